//! Swap fee rate.

use core::fmt;

use super::{Amount, BasisPoints, Rounding};

/// The fee charged on swap input, as a [`BasisPoints`] rate.
///
/// The default tier is zero: a pool without a configured fee prices swaps
/// with the bare constant-product formula.  A non-zero tier is taken from
/// the input before pricing (`amount_in' = amount_in * (1 - rate)`) and the
/// fee stays in the pool's reserves.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.fee_for(Amount::new(1_000)).expect("fits"), Amount::new(3));
/// assert_eq!(FeeTier::ZERO.fee_for(Amount::new(1_000)).expect("fits"), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.30%, the common volatile-pair rate.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// Creates a tier from an arbitrary rate.
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the rate.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if the tier charges nothing.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Fee owed on `amount_in`, rounded up so the pool never undercharges.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
    /// intermediate product overflows.
    pub const fn fee_for(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in, Rounding::Up)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(FeeTier::default(), FeeTier::ZERO);
        assert!(FeeTier::ZERO.is_zero());
        assert!(!FeeTier::TIER_0_30_PERCENT.is_zero());
    }

    #[test]
    fn fee_rounds_up() {
        // 30bp of 1 = 0.003 -> 1
        let Ok(fee) = FeeTier::TIER_0_30_PERCENT.fee_for(Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(1));
    }

    #[test]
    fn zero_input_zero_fee() {
        let Ok(fee) = FeeTier::TIER_0_30_PERCENT.fee_for(Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::TIER_0_30_PERCENT.to_string(), "FeeTier(30bp)");
    }
}
