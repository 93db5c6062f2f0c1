//! Top-down memoized search

use std::rc::Rc;

use tracing::{debug, trace};

use crate::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::error::InvalidInput;
use crate::price::{Price, PriceTable};
use crate::result::CutPlan;
use crate::solver::{Algorithm, RodSolver};

/// Rod cutting expressed as a [`DpProblem`] over sub-lengths.
///
/// Length `n` depends on every split `(c, n - c)` for `c` in `1..n`, listed
/// pairwise so the cache resolves them in split-scan order.
struct RodCutting<'a, P> {
    prices: &'a PriceTable<P>,
}

impl<P: Price> DpProblem<usize, Rc<CutPlan<P>>> for RodCutting<'_, P> {
    type Error = InvalidInput;

    fn deps(&self, n: &usize) -> Vec<usize> {
        (1..*n).flat_map(|c| [c, n - c]).collect()
    }

    fn compute(
        &self,
        n: &usize,
        deps: Vec<Rc<CutPlan<P>>>,
    ) -> Result<Rc<CutPlan<P>>, InvalidInput> {
        let n = *n;
        if n == 0 {
            return Ok(Rc::new(CutPlan::empty()));
        }

        let mut best = CutPlan::whole(n, self.prices.price(n)?);
        for pair in deps.chunks_exact(2) {
            let (left, right) = (&pair[0], &pair[1]);
            // Strictly greater: the first split reaching the best profit stays
            if left.profit + right.profit > best.profit {
                best = CutPlan::join(left, right);
            }
        }

        trace!(length = n, profit = ?best.profit, cuts = ?best.cuts, "memoized sub-length");
        Ok(Rc::new(best))
    }
}

/// Solves rod cutting top-down, computing sub-lengths on first demand.
///
/// Among splits with equal profit the earliest one found wins, so results lean
/// towards fewer pieces and towards shorter leading pieces. Each call builds a
/// fresh cache that is dropped when the call returns.
///
/// Recursion depth grows with the rod length.
#[derive(Debug, Clone, Copy)]
pub struct RecursiveSolver<'a, P> {
    prices: &'a PriceTable<P>,
}

impl<'a, P: Price> RecursiveSolver<'a, P> {
    pub fn new(prices: &'a PriceTable<P>) -> Self {
        Self { prices }
    }
}

impl<P: Price> RodSolver<P> for RecursiveSolver<'_, P> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Memoized
    }

    fn solve(&self, length: usize) -> Result<CutPlan<P>, InvalidInput> {
        self.prices.ensure_covers(length)?;
        debug!(length, "solving top-down");

        let cache = DpCache::with_problem(
            VecBackend::with_capacity(length + 1),
            RodCutting {
                prices: self.prices,
            },
        );
        let plan = cache.get(&length)?;

        debug!(length, profit = ?plan.profit, subproblems = cache.cached(), "solved top-down");
        drop(cache);
        Ok(Rc::unwrap_or_clone(plan))
    }
}
