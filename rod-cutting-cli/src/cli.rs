//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which solver(s) to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum AlgorithmChoice {
    /// Top-down memoized search
    Memo,
    /// Bottom-up tabulation
    Table,
    /// Run both and report whether the cut lists diverge (default)
    #[default]
    Both,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable text (default)
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

/// Optimal rod cutting
#[derive(Parser, Debug)]
#[command(name = "rodcut", about = "Find the most profitable way to cut a rod", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode - only output profits and cuts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one rod
    Solve(SolveArgs),
    /// Run the built-in example rods with both solvers
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Rod length
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: i64,

    /// Prices by piece length, starting at length 1 (comma-separated)
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub prices: Vec<String>,

    /// File holding the prices, separated by commas or whitespace
    #[arg(long, conflicts_with = "prices")]
    pub prices_file: Option<PathBuf>,

    /// Solver to run
    #[arg(short, long, value_enum, default_value = "both")]
    pub algorithm: AlgorithmChoice,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of threads for running the examples
    #[arg(long)]
    pub threads: Option<usize>,
}
