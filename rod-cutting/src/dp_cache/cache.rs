//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` memoizes recursive computations where values depend on other
/// values. Dependencies are resolved on first demand, in the order the problem
/// lists them, and each value is computed at most once. The cache owns its
/// backend, so two caches never share state.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// This cache does NOT detect cycles in the dependency graph. A cycle recurses
/// until the stack overflows. Recursion depth equals the longest dependency
/// chain, so keep chains to a modest length.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Starts building a cache.
    pub fn builder() -> DpCacheBuilder<I, K, B, P> {
        DpCacheBuilder {
            backend: None,
            problem: None,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// If the value is already cached, returns a clone of the cached value.
    /// Otherwise, resolves all dependencies recursively, computes the value,
    /// caches it, and returns a clone.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while computing this index or any of its
    /// dependencies. Values computed before the failure stay cached.
    pub fn get(&self, index: &I) -> Result<K, P::Error> {
        // Fast path: check if already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        // Resolve dependencies with no borrow held
        let dep_values = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect::<Result<Vec<K>, P::Error>>()?;

        self.backend
            .borrow_mut()
            .get_or_try_insert(index.clone(), || self.problem.compute(index, dep_values))
            .cloned()
    }

    /// Number of values computed so far.
    pub fn cached(&self) -> usize {
        self.backend.borrow().len()
    }

    /// Consumes the cache and returns its backend.
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

/// Builder for [`DpCache`].
///
/// ```rust
/// use std::convert::Infallible;
/// use rod_cutting::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Triangular;
///
/// impl DpProblem<usize, u64> for Triangular {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(deps.first().map_or(0, |prev| prev + *n as u64))
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(VecBackend::new())
///     .problem(Triangular)
///     .build();
/// assert_eq!(cache.get(&4), Ok(10));
/// ```
pub struct DpCacheBuilder<I, K, B, P> {
    backend: Option<B>,
    problem: Option<P>,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCacheBuilder<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K> + Default,
    P: DpProblem<I, K>,
{
    /// Sets the storage backend.
    pub fn backend(mut self, backend: B) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Sets the problem definition.
    pub fn problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    /// Builds the cache, falling back to a default backend when none was set.
    ///
    /// # Panics
    ///
    /// Panics if no problem was set.
    pub fn build(self) -> DpCache<I, K, B, P> {
        let problem = self.problem.expect("DpCache builder requires a problem");
        DpCache::with_problem(self.backend.unwrap_or_default(), problem)
    }
}
