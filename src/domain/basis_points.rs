//! Basis-point representation for rates.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Basis points in one whole (100%).
const BPS_DENOMINATOR: u32 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.apply(Amount::new(10_000), Rounding::Down).expect("fits"), Amount::new(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Wraps a raw basis-point value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` for rates strictly below 100%.
    #[must_use]
    pub const fn is_below_whole(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if `amount * self` exceeds `u128`.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(AmmError::Overflow("basis points apply overflow")),
        };
        match Amount::new(product).checked_div(&Amount::new(BPS_DENOMINATOR as u128), rounding) {
            Some(v) => Ok(v),
            None => Err(AmmError::DivisionByZero),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn whole_boundary() {
        assert!(BasisPoints::ZERO.is_below_whole());
        assert!(BasisPoints::new(9_999).is_below_whole());
        assert!(!BasisPoints::MAX_PERCENT.is_below_whole());
    }

    #[test]
    fn apply_rounds() {
        let bp = BasisPoints::new(30);
        let Ok(down) = bp.apply(Amount::new(1_001), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = bp.apply(Amount::new(1_001), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::new(3));
        assert_eq!(up, Amount::new(4));
    }

    #[test]
    fn apply_overflow() {
        let Err(AmmError::Overflow(_)) = BasisPoints::new(2).apply(Amount::MAX, Rounding::Down)
        else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
