use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Correlation engine tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Window within which a response must arrive to count as answered.
    /// Also the sweep interval of the background expiration task.
    #[serde(default = "default_expiration_ms")]
    pub expiration_ms: u64,

    /// Hard capacity bound of the pending-query store. Queries observed
    /// while the store is full are dropped, never correlated.
    #[serde(default = "default_max_pending")]
    pub max_pending: usize,

    /// Removals tolerated before the pending store's backing storage is
    /// rebuilt to reclaim retained capacity.
    #[serde(default = "default_compaction_threshold")]
    pub compaction_threshold: usize,
}

impl TrackerConfig {
    pub fn expiration(&self) -> Duration {
        Duration::from_millis(self.expiration_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiration_ms == 0 {
            return Err(ConfigError::Invalid(
                "tracker.expiration_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_pending == 0 {
            return Err(ConfigError::Invalid(
                "tracker.max_pending must be greater than zero".to_string(),
            ));
        }
        if self.compaction_threshold == 0 {
            return Err(ConfigError::Invalid(
                "tracker.compaction_threshold must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            expiration_ms: default_expiration_ms(),
            max_pending: default_max_pending(),
            compaction_threshold: default_compaction_threshold(),
        }
    }
}

fn default_expiration_ms() -> u64 {
    10_000
}

fn default_max_pending() -> usize {
    10_000
}

fn default_compaction_threshold() -> usize {
    5_000
}
