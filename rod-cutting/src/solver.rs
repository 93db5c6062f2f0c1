//! Solver trait, algorithm selection, and top-level entry points

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidInput;
use crate::iterative::IterativeSolver;
use crate::price::{Price, PriceTable};
use crate::recursive::RecursiveSolver;
use crate::result::{CutPlan, CutResult};

/// Which evaluation order to solve with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Top-down search with memoization, first-found split wins ties
    Memoized,
    /// Bottom-up tabulation, last-found split wins ties
    Tabulated,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Memoized, Algorithm::Tabulated];

    /// Short name used on the command line and in output.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Memoized => "memo",
            Algorithm::Tabulated => "table",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised algorithm name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm: {0} (expected memo or table)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memo" | "memoized" | "recursive" => Ok(Algorithm::Memoized),
            "table" | "tabulated" | "iterative" => Ok(Algorithm::Tabulated),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Core trait implemented by both rod cutting solvers.
///
/// A solver is bound to one price table and keeps no state between calls.
///
/// # Example
///
/// ```
/// use rod_cutting::{PriceTable, RecursiveSolver, RodSolver};
///
/// let prices = PriceTable::new(vec![1u32, 5, 8, 9]);
/// let plan = RecursiveSolver::new(&prices).solve(4).unwrap();
/// assert_eq!(plan.profit, 10);
/// assert_eq!(plan.cuts, vec![2, 2]);
/// ```
pub trait RodSolver<P: Price> {
    /// The evaluation order this solver uses
    fn algorithm(&self) -> Algorithm;

    /// Best plan for a rod of `length`.
    ///
    /// # Returns
    /// * `Ok(CutPlan)` - maximum profit and one cut list achieving it
    /// * `Err(InvalidInput)` - the price table does not reach `length`
    fn solve(&self, length: usize) -> Result<CutPlan<P>, InvalidInput>;
}

pub trait RodSolverExt<P: Price>: RodSolver<P> {
    /// Solves for a signed length and packages the result.
    ///
    /// Negative lengths are rejected before any work is done.
    fn optimal_cut(&self, length: i64) -> Result<CutResult<P>, InvalidInput> {
        let length = usize::try_from(length).map_err(|_| InvalidInput::NegativeLength(length))?;
        self.solve(length).map(CutResult::from_plan)
    }
}

impl<P: Price, T: RodSolver<P> + ?Sized> RodSolverExt<P> for T {}

/// Maximum revenue for a rod of `length` with the chosen algorithm.
///
/// `prices[i]` is the revenue for a piece of length `i + 1`; entries past
/// `length` are ignored.
///
/// # Example
///
/// ```
/// use rod_cutting::{compute_optimal_cut, Algorithm};
///
/// let result = compute_optimal_cut(4, &[3, 5, 6, 7], Algorithm::Tabulated).unwrap();
/// assert_eq!(result.max_profit, 12);
/// assert_eq!(result.cuts, vec![1, 1, 1, 1]);
/// assert_eq!(result.number_of_cuts, 3);
/// ```
pub fn compute_optimal_cut<P: Price>(
    length: i64,
    prices: &[P],
    algorithm: Algorithm,
) -> Result<CutResult<P>, InvalidInput> {
    let table = PriceTable::from(prices);
    match algorithm {
        Algorithm::Memoized => RecursiveSolver::new(&table).optimal_cut(length),
        Algorithm::Tabulated => IterativeSolver::new(&table).optimal_cut(length),
    }
}

/// Results of both algorithms for the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<P> {
    pub memoized: CutResult<P>,
    pub tabulated: CutResult<P>,
}

impl<P: Price> Comparison<P> {
    /// Whether the two cut lists differ. Profits always agree.
    pub fn cuts_diverge(&self) -> bool {
        self.memoized.cuts != self.tabulated.cuts
    }

    /// Result for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> &CutResult<P> {
        match algorithm {
            Algorithm::Memoized => &self.memoized,
            Algorithm::Tabulated => &self.tabulated,
        }
    }
}

/// Runs both algorithms on the same inputs.
///
/// ```
/// use rod_cutting::compare;
///
/// let both = compare(5, &[2, 5, 7, 8, 10]).unwrap();
/// assert_eq!(both.memoized.max_profit, both.tabulated.max_profit);
/// assert!(both.cuts_diverge());
/// ```
pub fn compare<P: Price>(length: i64, prices: &[P]) -> Result<Comparison<P>, InvalidInput> {
    let table = PriceTable::from(prices);
    Ok(Comparison {
        memoized: RecursiveSolver::new(&table).optimal_cut(length)?,
        tabulated: IterativeSolver::new(&table).optimal_cut(length)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("Recursive".parse::<Algorithm>(), Ok(Algorithm::Memoized));
        assert_eq!("iterative".parse::<Algorithm>(), Ok(Algorithm::Tabulated));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(UnknownAlgorithm("greedy".to_string()))
        );
    }

    #[test]
    fn test_solvers_report_their_algorithm() {
        let table = PriceTable::new(vec![1u8]);
        assert_eq!(RecursiveSolver::new(&table).algorithm(), Algorithm::Memoized);
        assert_eq!(IterativeSolver::new(&table).algorithm(), Algorithm::Tabulated);
    }

    #[test]
    fn test_negative_length_rejected_by_both() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                compute_optimal_cut(-1, &[1u32, 2], algorithm),
                Err(InvalidInput::NegativeLength(-1))
            );
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let table = PriceTable::new(vec![1u32, 5, 8, 9]);
        let solvers: Vec<Box<dyn RodSolver<u32> + '_>> = vec![
            Box::new(RecursiveSolver::new(&table)),
            Box::new(IterativeSolver::new(&table)),
        ];
        for solver in &solvers {
            let result = solver.optimal_cut(4).unwrap();
            assert_eq!(result.max_profit, 10, "{}", solver.algorithm());
        }
    }

    #[test]
    fn test_compare_without_ties_agrees() {
        let both = compare(3, &[1u32, 3, 8]).unwrap();
        assert!(!both.cuts_diverge());
        assert_eq!(both.get(Algorithm::Memoized).cuts, vec![3]);
        assert_eq!(both.get(Algorithm::Tabulated).cuts, vec![3]);
    }

    #[test]
    fn test_compare_propagates_invalid_input() {
        assert_eq!(
            compare(4, &[1.0, 2.0]),
            Err(InvalidInput::InsufficientPrices {
                requested: 4,
                available: 2
            })
        );
    }
}
