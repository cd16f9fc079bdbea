use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Cadence of the stats-export background job.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "export.interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    30
}
