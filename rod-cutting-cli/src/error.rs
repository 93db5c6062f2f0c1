//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A price could not be read as a number
    #[error("Invalid price {value:?} at position {position}")]
    InvalidPrice { position: usize, value: String },

    /// Solver rejected the request
    #[error("{0}")]
    InvalidInput(#[from] rod_cutting::InvalidInput),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
}
