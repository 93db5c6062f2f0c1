//! Sub-length plans and the public result shape

use serde::Serialize;

use crate::price::Price;

/// Best known way to cut a rod of one particular length.
///
/// `cuts` lists piece lengths in order and always sums to the length the plan
/// was computed for. The plan for length 0 has no pieces and zero profit.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPlan<P> {
    pub profit: P,
    pub cuts: Vec<usize>,
}

impl<P: Price> CutPlan<P> {
    /// Plan for the empty rod.
    pub fn empty() -> Self {
        Self {
            profit: P::zero(),
            cuts: Vec::new(),
        }
    }

    /// Plan that sells a rod of `length` as a single piece.
    pub fn whole(length: usize, price: P) -> Self {
        Self {
            profit: price,
            cuts: vec![length],
        }
    }

    /// Plan formed by selling `left` and `right` side by side.
    pub fn join(left: &Self, right: &Self) -> Self {
        let mut cuts = Vec::with_capacity(left.cuts.len() + right.cuts.len());
        cuts.extend_from_slice(&left.cuts);
        cuts.extend_from_slice(&right.cuts);
        Self {
            profit: left.profit + right.profit,
            cuts,
        }
    }

    /// Rod length this plan covers.
    pub fn length(&self) -> usize {
        self.cuts.iter().sum()
    }
}

/// Optimal cut for the full rod as handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutResult<P> {
    pub max_profit: P,
    pub cuts: Vec<usize>,
    /// Cut operations needed, one less than the number of pieces
    pub number_of_cuts: usize,
}

impl<P: Price> CutResult<P> {
    /// Packages a top-level plan.
    ///
    /// A rod split into `k` pieces needs `k - 1` cuts; the empty rod needs none.
    pub fn from_plan(plan: CutPlan<P>) -> Self {
        let number_of_cuts = plan.cuts.len().saturating_sub(1);
        Self {
            max_profit: plan.profit,
            cuts: plan.cuts,
            number_of_cuts,
        }
    }
}

impl<P: Price> From<CutPlan<P>> for CutResult<P> {
    fn from(plan: CutPlan<P>) -> Self {
        Self::from_plan(plan)
    }
}
