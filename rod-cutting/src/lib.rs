//! Rod Cutting Optimizer
//!
//! Computes the maximum revenue from cutting a rod of integral length into
//! pieces priced by length, along with one list of piece lengths that achieves
//! it.
//!
//! # Overview
//!
//! Two solvers share the same recurrence and always agree on the profit:
//! - [`RecursiveSolver`]: top-down search memoized through [`dp_cache`]
//! - [`IterativeSolver`]: bottom-up tabulation over every sub-length
//!
//! They differ in how they break ties between equally profitable splits, so
//! their cut lists can differ. The recursive solver keeps the first split it
//! finds (strictly greater replaces), the iterative solver keeps the last one
//! (greater or equal replaces).
//!
//! # Quick Example
//!
//! ```
//! use rod_cutting::{compute_optimal_cut, Algorithm, InvalidInput};
//!
//! let prices = [2, 5, 7, 8, 10];
//!
//! let memo = compute_optimal_cut(5, &prices, Algorithm::Memoized).unwrap();
//! assert_eq!(memo.max_profit, 12);
//! assert_eq!(memo.cuts, vec![1, 2, 2]);
//! assert_eq!(memo.number_of_cuts, 2);
//!
//! let table = compute_optimal_cut(5, &prices, Algorithm::Tabulated).unwrap();
//! assert_eq!(table.max_profit, 12);
//! assert_eq!(table.cuts, vec![2, 2, 1]);
//!
//! assert_eq!(
//!     compute_optimal_cut(6, &prices, Algorithm::Memoized),
//!     Err(InvalidInput::InsufficientPrices { requested: 6, available: 5 })
//! );
//! ```
//!
//! ## Solver Trait
//!
//! [`RodSolver`] is the seam both solvers implement; [`RodSolverExt`] adds
//! signed-length validation and packaging into a [`CutResult`].

pub mod dp_cache;
mod error;
mod iterative;
mod price;
mod recursive;
mod result;
mod solver;

pub use error::InvalidInput;
pub use iterative::IterativeSolver;
pub use price::{Price, PriceTable};
pub use recursive::RecursiveSolver;
pub use result::{CutPlan, CutResult};
pub use solver::{
    Algorithm, Comparison, RodSolver, RodSolverExt, UnknownAlgorithm, compare,
    compute_optimal_cut,
};
