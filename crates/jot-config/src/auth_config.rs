use crate::{ConfigError, ConfigErrorResult, DEFAULT_SECURE_COOKIES, DEFAULT_SESSION_TTL_DAYS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Fixed-window session lifetime. No sliding expiration.
    pub session_ttl_days: i64,
    /// Mark the session cookie `Secure` (production deployments).
    pub secure_cookies: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            secure_cookies: DEFAULT_SECURE_COOKIES,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_ttl_days < 1 {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_days must be >= 1, got {}",
                self.session_ttl_days
            )));
        }

        Ok(())
    }
}
