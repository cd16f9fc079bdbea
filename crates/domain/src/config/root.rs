use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::export::ExportConfig;
use super::tracker::TrackerConfig;

/// Main configuration structure for dns-pulse
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Correlation engine configuration
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Stats export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-pulse.toml in current directory
    /// 3. /etc/dns-pulse/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dns-pulse.toml").exists() {
            Self::from_file("dns-pulse.toml")?
        } else if std::path::Path::new("/etc/dns-pulse/config.toml").exists() {
            Self::from_file("/etc/dns-pulse/config.toml")?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tracker.validate()?;
        self.export.validate()
    }
}
