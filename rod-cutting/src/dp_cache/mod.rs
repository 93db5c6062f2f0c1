//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for dynamic programming problems whose values depend on other
//! values in a directed acyclic graph (DAG). The recursive rod cutting solver
//! is built on it, and it is usable for any other problem that fits.
//!
//! # Pieces
//!
//! - [`DpProblem`]: describes dependencies and the (fallible) computation
//! - [`Backend`]: storage seam; [`VecBackend`] covers dense `usize` indices
//! - [`DpCache`]: resolves dependencies on demand and computes each index once
//!
//! # Warning: Cycle Behavior
//!
//! **This cache does NOT support cycle detection.** A cyclic dependency graph
//! recurses until the stack overflows.
//!
//! # Example
//!
//! ```rust
//! use rod_cutting::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Lengths above 3 are rejected
//! struct Bounded;
//!
//! impl DpProblem<usize, u32> for Bounded {
//!     type Error = String;
//!
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n == 0 { vec![] } else { vec![n - 1] }
//!     }
//!
//!     fn compute(&self, n: &usize, deps: Vec<u32>) -> Result<u32, String> {
//!         if *n > 3 {
//!             return Err(format!("{n} is too long"));
//!         }
//!         Ok(deps.first().copied().unwrap_or(0) + 1)
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Bounded);
//! assert_eq!(cache.get(&3), Ok(4));
//! assert!(cache.get(&5).is_err());
//! assert_eq!(cache.cached(), 4);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::DpProblem;
