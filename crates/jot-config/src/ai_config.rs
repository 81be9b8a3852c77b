use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL, DEFAULT_AI_TEMPERATURE,
    DEFAULT_GUEST_LIMIT, DEFAULT_GUEST_WINDOW_DAYS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Extraction service API key. Usually supplied via GEMINI_API_KEY.
    pub api_key: Option<String>,
    /// Base URL of the extraction service (overridable for tests).
    pub base_url: String,
    pub model: String,
    /// Low temperature keeps the extraction deterministic-leaning.
    pub temperature: f64,
    /// Hard cap on organize calls for unauthenticated callers.
    pub guest_limit: u32,
    /// Validity window of the guest counter cookie.
    pub guest_window_days: i64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_AI_BASE_URL),
            model: String::from(DEFAULT_AI_MODEL),
            temperature: DEFAULT_AI_TEMPERATURE,
            guest_limit: DEFAULT_GUEST_LIMIT,
            guest_window_days: DEFAULT_GUEST_WINDOW_DAYS,
        }
    }
}

impl AiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::ai(
                "ai.api_key is required (set GEMINI_API_KEY or ai.api_key in config.toml)",
            ));
        }

        if self.model.is_empty() {
            return Err(ConfigError::ai("ai.model must not be empty"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ai(format!(
                "ai.temperature must be in 0.0..=2.0, got {}",
                self.temperature
            )));
        }

        if self.guest_window_days < 1 {
            return Err(ConfigError::ai(format!(
                "ai.guest_window_days must be >= 1, got {}",
                self.guest_window_days
            )));
        }

        Ok(())
    }
}
