use super::ConfigError;
use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// `[logging]` section. `RUST_LOG`, when set, takes precedence at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Case-insensitive tracing level name
    #[serde(default = "default_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if LEVELS.contains(&level.as_str()) {
            return Ok(());
        }
        Err(ConfigError::Validation(format!(
            "logging.level must be one of {:?}, got '{}'",
            LEVELS, self.level
        )))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
