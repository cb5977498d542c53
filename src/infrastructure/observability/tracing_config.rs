use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::from_env(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info,examforge=debug,tower_http=debug".to_string()),
        }
    }
}

impl From<&LoggingSettings> for TracingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            environment: Environment::from_env(),
            json_format: settings.json_format,
            level: settings.level.clone(),
        }
    }
}
