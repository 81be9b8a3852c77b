use crate::Config;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.path, "data.db");
    assert_eq!(config.auth.session_ttl_days, 7);
    assert!(!config.auth.secure_cookies);
    assert_eq!(config.ai.model, "gemini-2.5-flash");
    assert_eq!(config.ai.guest_limit, 3);
    assert_eq!(config.ai.guest_window_days, 30);
}

#[test]
fn test_validate_requires_api_key() {
    let config = Config::default();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ai.api_key = Some("test-key".into());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_low_port() {
    let mut config = Config::default();
    config.ai.api_key = Some("test-key".into());
    config.server.port = 80;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_escaping_database_path() {
    let mut config = Config::default();
    config.ai.api_key = Some("test-key".into());
    config.database.path = "../outside.db".into();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_session_ttl() {
    let mut config = Config::default();
    config.ai.api_key = Some("test-key".into());
    config.auth.session_ttl_days = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_toml_section_parsing() {
    let toml = r#"
        [server]
        port = 9100

        [ai]
        api_key = "k"
        temperature = 0.1

        [auth]
        session_ttl_days = 14
    "#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.ai.temperature, 0.1);
    assert_eq!(config.auth.session_ttl_days, 14);
    // Unspecified sections fall back to defaults
    assert_eq!(config.database.path, "data.db");
}
