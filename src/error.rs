use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while routing a request to a strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("unrecognized routing key '{key}'")]
    UnrecognizedRoutingKey { key: String },

    #[error("input sequence is empty")]
    EmptyInput,

    #[error("no strategy registered for routing key {key}")]
    MissingStrategy { key: crate::strategy::RoutingKey },
}

/// Errors raised by the singleton instance and its log sink.
#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("failed to open log file {}: {source}", path.display())]
    ResourceInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log file {} has been released", path.display())]
    SinkClosed { path: PathBuf },

    #[error("failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Instance(#[from] InstanceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
