use clap::Parser;
use patterns::cli::{output, singleton, strategy, Cli, Commands};
use patterns::config::Config;
use patterns::error::Result;
use tracing::{error, info};

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    config.logging.validate()?;
    config.init_logging();
    info!(command = ?cli.command, "patterns starting");

    match &cli.command {
        Commands::Singleton(args) => singleton::execute(&config, args),
        Commands::Strategy(args) => strategy::execute(&config, args),
    }
}
