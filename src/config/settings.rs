//! Top-level configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::strategy::RoutingKey;

use super::logging::LoggingConfig;

/// Application configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub singleton: SingletonConfig,
    pub strategy: StrategyConfig,
    pub logging: LoggingConfig,
}

/// Settings for the singleton console.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SingletonConfig {
    /// Append-only log file backing the instance.
    pub log_file: PathBuf,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("application.log"),
        }
    }
}

/// Settings for the strategy console.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Number of integers read from input.
    pub input_len: usize,
    /// Routing keys evaluated when none are given on the command line.
    pub keys: Vec<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            input_len: 5,
            keys: vec!["Heapify".to_string(), "sorting".to_string()],
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or a
    /// value is out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.singleton.log_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_file",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if self.strategy.input_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "input_len",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.strategy.keys.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "keys",
                reason: "at least one routing key is required".into(),
            }
            .into());
        }
        for key in &self.strategy.keys {
            if key.parse::<RoutingKey>().is_err() {
                return Err(ConfigError::InvalidValue {
                    field: "keys",
                    reason: format!("unrecognized routing key '{key}'"),
                }
                .into());
            }
        }
        self.logging.validate()
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
