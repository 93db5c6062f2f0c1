//! Price table lookups

use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

use crate::error::InvalidInput;

/// Numeric type usable as a piece price and as an accumulated profit.
///
/// Implemented for every `Copy + PartialOrd + Add + Zero` type, so the usual
/// integer and floating point types all work. Negative values are accepted
/// as they are.
pub trait Price: Copy + PartialOrd + Add<Output = Self> + Zero + Debug {}

impl<T> Price for T where T: Copy + PartialOrd + Add<Output = T> + Zero + Debug {}

/// Read-only revenue per piece length.
///
/// Entry `i` of the backing sequence is the revenue for a piece of length
/// `i + 1`, so a table built from `L` prices covers lengths `1..=L`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable<P> {
    prices: Vec<P>,
}

impl<P: Price> PriceTable<P> {
    /// Creates a table from prices ordered by piece length, starting at 1.
    pub fn new(prices: impl Into<Vec<P>>) -> Self {
        Self {
            prices: prices.into(),
        }
    }

    /// Longest piece length with a price.
    pub fn max_length(&self) -> usize {
        self.prices.len()
    }

    /// Revenue for one uncut piece of length `piece`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::PieceOutOfRange`] when `piece` is zero or longer
    /// than [`max_length`](Self::max_length).
    pub fn price(&self, piece: usize) -> Result<P, InvalidInput> {
        piece
            .checked_sub(1)
            .and_then(|idx| self.prices.get(idx))
            .copied()
            .ok_or(InvalidInput::PieceOutOfRange {
                piece,
                max: self.prices.len(),
            })
    }

    /// Checks that a rod of `length` can be priced piece by piece.
    pub fn ensure_covers(&self, length: usize) -> Result<(), InvalidInput> {
        if length > self.prices.len() {
            return Err(InvalidInput::InsufficientPrices {
                requested: length,
                available: self.prices.len(),
            });
        }
        Ok(())
    }
}

impl<P: Price> From<Vec<P>> for PriceTable<P> {
    fn from(prices: Vec<P>) -> Self {
        Self::new(prices)
    }
}

impl<P: Price> From<&[P]> for PriceTable<P> {
    fn from(prices: &[P]) -> Self {
        Self::new(prices.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_one_indexed() {
        let table = PriceTable::new(vec![1u32, 5, 8]);
        assert_eq!(table.price(1), Ok(1));
        assert_eq!(table.price(3), Ok(8));
        assert_eq!(table.max_length(), 3);
    }

    #[test]
    fn test_price_out_of_range() {
        let table = PriceTable::new(vec![1u32, 5, 8]);
        assert_eq!(
            table.price(0),
            Err(InvalidInput::PieceOutOfRange { piece: 0, max: 3 })
        );
        assert_eq!(
            table.price(4),
            Err(InvalidInput::PieceOutOfRange { piece: 4, max: 3 })
        );
    }

    #[test]
    fn test_ensure_covers() {
        let table: PriceTable<f64> = PriceTable::from(&[1.5, 2.0][..]);
        assert!(table.ensure_covers(0).is_ok());
        assert!(table.ensure_covers(2).is_ok());
        assert_eq!(
            table.ensure_covers(3),
            Err(InvalidInput::InsufficientPrices {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_empty_table_covers_only_zero() {
        let table: PriceTable<i64> = PriceTable::new(Vec::new());
        assert!(table.ensure_covers(0).is_ok());
        assert!(table.ensure_covers(1).is_err());
        assert!(table.price(1).is_err());
    }

    #[test]
    fn test_negative_prices_are_kept() {
        let table = PriceTable::new(vec![-3i64, -1]);
        assert_eq!(table.price(2), Ok(-1));
    }
}
