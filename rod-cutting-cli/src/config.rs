//! Configuration resolution from CLI args

use crate::cli::{AlgorithmChoice, Cli, Command, OutputFormat, SolveArgs};
use crate::error::CliError;
use rod_cutting::Algorithm;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no prices are given on the command line
pub const PRICES_ENV: &str = "RODCUT_PRICES";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Log verbosity (number of -v flags)
    pub verbosity: u8,
    /// Quiet mode
    pub quiet: bool,
    /// Output format
    pub format: OutputFormat,
    /// What to run
    pub task: Task,
}

#[derive(Debug, PartialEq)]
pub enum Task {
    /// Solve one rod with the listed algorithms
    Solve {
        length: i64,
        prices: Vec<f64>,
        algorithms: Vec<Algorithm>,
    },
    /// Run the built-in examples
    Demo { thread_count: usize },
}

impl Config {
    /// Build config from CLI args, resolving the price source
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        let task = match cli.command {
            Command::Solve(args) => {
                let prices = resolve_prices(&args, std::env::var(PRICES_ENV).ok())?;
                Task::Solve {
                    length: args.length,
                    prices,
                    algorithms: algorithms(args.algorithm),
                }
            }
            Command::Demo(args) => Task::Demo {
                thread_count: args.threads.unwrap_or_else(num_cpus),
            },
        };

        Ok(Config {
            verbosity: cli.verbose,
            quiet: cli.quiet,
            format: cli.format,
            task,
        })
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn algorithms(choice: AlgorithmChoice) -> Vec<Algorithm> {
    match choice {
        AlgorithmChoice::Memo => vec![Algorithm::Memoized],
        AlgorithmChoice::Table => vec![Algorithm::Tabulated],
        AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
    }
}

/// Pick prices from args, then the prices file, then the environment
fn resolve_prices(args: &SolveArgs, env_prices: Option<String>) -> Result<Vec<f64>, CliError> {
    if !args.prices.is_empty() {
        return parse_prices(args.prices.iter().map(String::as_str));
    }

    if let Some(path) = &args.prices_file {
        let path = expand_tilde(path);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        return parse_prices(split_prices(&content));
    }

    match env_prices {
        Some(value) => parse_prices(split_prices(&value)),
        None => Err(CliError::Config(format!(
            "No prices given: use --prices, --prices-file or {}",
            PRICES_ENV
        ))),
    }
}

fn split_prices(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
}

/// Parse price tokens in order, skipping empty ones
fn parse_prices<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<f64>, CliError> {
    tokens
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite())
                .ok_or_else(|| CliError::InvalidPrice {
                    position: idx + 1,
                    value: token.to_string(),
                })
        })
        .collect()
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix('~')) else {
        return path.to_path_buf();
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        return path.to_path_buf();
    }
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => path.to_path_buf(),
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn solve_args(argv: &[&str]) -> SolveArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Solve(args) => args,
            other => panic!("expected solve, got {:?}", other),
        }
    }

    #[test]
    fn test_prices_from_args() {
        let args = solve_args(&["rodcut", "solve", "-l", "3", "-p", "1,3,8"]);
        assert_eq!(resolve_prices(&args, None).unwrap(), vec![1.0, 3.0, 8.0]);
        assert_eq!(args.algorithm, AlgorithmChoice::Both);
    }

    #[test]
    fn test_args_take_precedence_over_env() {
        let args = solve_args(&["rodcut", "solve", "-l", "1", "-p", "4"]);
        let prices = resolve_prices(&args, Some("9 9 9".to_string())).unwrap();
        assert_eq!(prices, vec![4.0]);
    }

    #[test]
    fn test_prices_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2, 5, 7\n8\t10").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = solve_args(&["rodcut", "solve", "-l", "5", "--prices-file", &path]);
        assert_eq!(
            resolve_prices(&args, None).unwrap(),
            vec![2.0, 5.0, 7.0, 8.0, 10.0]
        );
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let args = solve_args(&[
            "rodcut",
            "solve",
            "-l",
            "1",
            "--prices-file",
            "/nonexistent/rodcut/prices.txt",
        ]);
        assert!(matches!(resolve_prices(&args, None), Err(CliError::Config(_))));
    }

    #[test]
    fn test_prices_from_env() {
        let args = solve_args(&["rodcut", "solve", "-l", "2"]);
        let prices = resolve_prices(&args, Some("1.5,2.5".to_string())).unwrap();
        assert_eq!(prices, vec![1.5, 2.5]);
    }

    #[test]
    fn test_no_price_source() {
        let args = solve_args(&["rodcut", "solve", "-l", "2"]);
        assert!(matches!(resolve_prices(&args, None), Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_price_reports_position() {
        let args = solve_args(&["rodcut", "solve", "-l", "3", "-p", "1,abc,3"]);
        match resolve_prices(&args, None) {
            Err(CliError::InvalidPrice { position, value }) => {
                assert_eq!(position, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidPrice, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let result = parse_prices(split_prices("1, NaN"));
        assert!(matches!(result, Err(CliError::InvalidPrice { position: 2, .. })));
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let args = solve_args(&["rodcut", "solve", "--length", "-1", "--prices=-2,3"]);
        assert_eq!(args.length, -1);
        assert_eq!(resolve_prices(&args, None).unwrap(), vec![-2.0, 3.0]);
    }

    #[test]
    fn test_algorithm_choice_expands() {
        assert_eq!(algorithms(AlgorithmChoice::Memo), vec![Algorithm::Memoized]);
        assert_eq!(algorithms(AlgorithmChoice::Table), vec![Algorithm::Tabulated]);
        assert_eq!(algorithms(AlgorithmChoice::Both).len(), 2);
    }

    #[test]
    fn test_demo_thread_count() {
        let cli = Cli::try_parse_from(["rodcut", "demo", "--threads", "3"]).unwrap();
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.task, Task::Demo { thread_count: 3 });
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_verbosity_maps_to_filter() {
        let cli = Cli::try_parse_from(["rodcut", "-vv", "demo"]).unwrap();
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("/tmp/prices")), PathBuf::from("/tmp/prices"));
        assert_eq!(expand_tilde(Path::new("~user/prices")), PathBuf::from("~user/prices"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/prices")), home.join("prices"));
        }
    }
}
