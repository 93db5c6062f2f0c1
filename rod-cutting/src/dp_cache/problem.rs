//! Trait-based DP problem definition.

/// A trait for defining dynamic programming problems.
///
/// Implement this trait to describe which indices an index depends on and how
/// its value is built from theirs. Computation may fail; failures propagate
/// out of [`DpCache::get`](super::DpCache::get) and are never cached.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use rod_cutting::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// /// Number of ways to climb `n` stairs taking one or two steps at a time.
/// struct Stairs;
///
/// impl DpProblem<usize, u64> for Stairs {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, _n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if deps.is_empty() { 1 } else { deps[0] + deps[1] })
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Stairs);
/// assert_eq!(cache.get(&10), Ok(89));
/// ```
pub trait DpProblem<I, K> {
    /// Error produced when a value cannot be computed.
    type Error;

    /// Returns the indices that this index depends on, in the order they
    /// should be resolved.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> Result<K, Self::Error>;
}
