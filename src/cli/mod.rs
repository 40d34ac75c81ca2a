//! Command-line interface definitions.

pub mod input;
pub mod output;
pub mod singleton;
pub mod strategy;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Patterns - lazy singleton and strategy dispatch demonstrations.
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive singleton console reading integer commands from stdin
    Singleton(SingletonArgs),

    /// Evaluate routing keys against a sequence of integers
    Strategy(StrategyArgs),
}

/// Arguments for the `singleton` subcommand.
#[derive(Parser, Debug)]
pub struct SingletonArgs {
    /// Override the log file backing the instance
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the `strategy` subcommand.
#[derive(Parser, Debug)]
pub struct StrategyArgs {
    /// Comma-separated input sequence; read from stdin when omitted
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i64>>,

    /// Routing key to evaluate (repeatable); defaults come from config
    #[arg(short, long = "key")]
    pub keys: Vec<String>,
}
