use super::ConfigError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Availability history aggregation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// IANA time zone used to truncate slots to the hour and to label them
    /// (default: "UTC")
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Hourly slots whose count queries may run at the same time within one
    /// request (default: 1, sequential)
    #[serde(default = "default_query_concurrency")]
    pub query_concurrency: usize,

    /// Largest number of hourly slots a single request may ask for.
    /// Unset means unbounded.
    #[serde(default)]
    pub max_slots: Option<u64>,
}

impl HistoryConfig {
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone.parse::<Tz>().map_err(|e| {
            ConfigError::Validation(format!("Unknown time zone '{}': {}", self.timezone, e))
        })
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            query_concurrency: default_query_concurrency(),
            max_slots: None,
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_query_concurrency() -> usize {
    1
}
