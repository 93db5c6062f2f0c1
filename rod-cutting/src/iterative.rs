//! Bottom-up tabulation

use tracing::{debug, trace};

use crate::error::InvalidInput;
use crate::price::{Price, PriceTable};
use crate::result::CutPlan;
use crate::solver::{Algorithm, RodSolver};

/// Solves rod cutting bottom-up, filling every sub-length from 0 upwards.
///
/// Among splits with equal profit the last one scanned wins, so on ties the
/// cut list can differ from [`RecursiveSolver`](crate::RecursiveSolver) while
/// the profit never does.
///
/// Only the chosen split per length is stored; the cut list is rebuilt at the
/// end, giving the same order as concatenating `plan[c]` and `plan[n - c]`.
#[derive(Debug, Clone, Copy)]
pub struct IterativeSolver<'a, P> {
    prices: &'a PriceTable<P>,
}

impl<'a, P: Price> IterativeSolver<'a, P> {
    pub fn new(prices: &'a PriceTable<P>) -> Self {
        Self { prices }
    }
}

impl<P: Price> RodSolver<P> for IterativeSolver<'_, P> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Tabulated
    }

    fn solve(&self, length: usize) -> Result<CutPlan<P>, InvalidInput> {
        self.prices.ensure_covers(length)?;
        debug!(length, "solving bottom-up");

        let mut profit: Vec<P> = Vec::with_capacity(length + 1);
        // `None` sells the length whole, `Some(c)` splits it into c and n - c
        let mut split: Vec<Option<usize>> = Vec::with_capacity(length + 1);
        profit.push(P::zero());
        split.push(None);

        for n in 1..=length {
            let mut best = self.prices.price(n)?;
            let mut best_split = None;
            for c in 1..n {
                let candidate = profit[c] + profit[n - c];
                if candidate >= best {
                    best = candidate;
                    best_split = Some(c);
                }
            }
            trace!(length = n, profit = ?best, split = ?best_split, "tabulated sub-length");
            profit.push(best);
            split.push(best_split);
        }

        let plan = CutPlan {
            profit: profit[length],
            cuts: rebuild_cuts(&split, length),
        };
        debug!(length, profit = ?plan.profit, "solved bottom-up");
        Ok(plan)
    }
}

/// Expands the split table into piece lengths, left piece first.
fn rebuild_cuts(split: &[Option<usize>], length: usize) -> Vec<usize> {
    let mut cuts = Vec::new();
    if length == 0 {
        return cuts;
    }

    let mut pending = vec![length];
    while let Some(n) = pending.pop() {
        match split[n] {
            None => cuts.push(n),
            Some(c) => {
                pending.push(n - c);
                pending.push(c);
            }
        }
    }
    cuts
}
