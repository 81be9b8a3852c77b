use crate::{
    AiConfig, AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig,
    ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for JOT_CONFIG_DIR env var, else use ./.jot/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: JOT_CONFIG_DIR env var > ./.jot/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("JOT_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".jot"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log a startup summary (never the API key).
    pub fn log_summary(&self) {
        info!("  server: {}", self.bind_addr());
        info!("  database: {}", self.database.path);
        info!(
            "  auth: session_ttl_days={}, secure_cookies={}",
            self.auth.session_ttl_days, self.auth.secure_cookies
        );
        info!(
            "  ai: model={}, temperature={}, guest_limit={}",
            self.ai.model, self.ai.temperature, self.ai.guest_limit
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("JOT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("JOT_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("JOT_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_parse("JOT_SESSION_TTL_DAYS", &mut self.auth.session_ttl_days);
        Self::apply_env_bool("JOT_SECURE_COOKIES", &mut self.auth.secure_cookies);

        // AI / extraction service
        Self::apply_env_option_string("GEMINI_API_KEY", &mut self.ai.api_key);
        Self::apply_env_string("JOT_AI_BASE_URL", &mut self.ai.base_url);
        Self::apply_env_string("JOT_AI_MODEL", &mut self.ai.model);
        Self::apply_env_parse("JOT_AI_TEMPERATURE", &mut self.ai.temperature);
        Self::apply_env_parse("JOT_GUEST_LIMIT", &mut self.ai.guest_limit);

        // Logging
        Self::apply_env_parse("JOT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("JOT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("JOT_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
