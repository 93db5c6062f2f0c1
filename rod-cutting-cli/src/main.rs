//! rodcut - command-line interface for the rod cutting optimizer

mod cli;
mod config;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Cli;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), error::CliError> {
    let config = Config::from_cli(cli)?;
    init_logging(&config);
    debug!(?config, "resolved configuration");

    let executor = Executor::new(&config.task)?;
    let reports = executor.execute(config.task)?;

    let formatter = OutputFormatter::new(config.quiet, config.format);
    println!("{}", formatter.render(&reports)?);
    Ok(())
}

/// Log to stderr; RUST_LOG overrides the -v level
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbosity >= 2)
        .init();
}
