//! Error types for the rod cutting library

use thiserror::Error;

/// Error raised when a request cannot be answered from the given inputs.
///
/// Every variant is the same failure kind: the requested length is negative
/// or reaches past what the price table covers. No partial result is ever
/// returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The requested rod length is below zero
    #[error("Invalid input: rod length {0} is negative")]
    NegativeLength(i64),
    /// The price table has fewer entries than the requested rod length
    #[error("Invalid input: rod length {requested} needs {requested} prices, table has {available}")]
    InsufficientPrices { requested: usize, available: usize },
    /// A single piece length was looked up outside `1..=max`
    #[error("Invalid input: piece length {piece} is outside 1..={max}")]
    PieceOutOfRange { piece: usize, max: usize },
}
