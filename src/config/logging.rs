//! Logging configuration and initialization.

use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Accepted values for [`LoggingConfig::format`].
const FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Check `level` names a tracing level and `format` is a known formatter.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if Level::from_str(&self.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!("unknown log level '{}'", self.level),
            }
            .into());
        }
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected one of {FORMATS:?}, got '{}'", self.format),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Output goes to stderr; stdout belongs to the console drivers.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
