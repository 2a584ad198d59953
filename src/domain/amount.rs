//! Asset quantities in base units.

use core::fmt;

use super::Rounding;

/// A quantity of one asset, counted in its smallest indivisible unit.
///
/// `Amount` is unsigned: reserves and transfers can never be negative.
/// It does not know how many fractional digits its asset carries; that is
/// the job of [`Decimals`](super::Decimals).
///
/// Arithmetic helpers are checked and return `None` instead of wrapping.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
///
/// let reserve = Amount::new(100_000);
/// let deposit = Amount::new(50_000);
/// assert_eq!(reserve.checked_add(&deposit), Some(Amount::new(150_000)));
/// assert_eq!(deposit.checked_sub(&reserve), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// No units.
    pub const ZERO: Self = Self(0);

    /// Largest representable quantity.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw base-unit count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw base-unit count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for a zero quantity.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with an explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        let q = self.0 / divisor.0;
        match rounding {
            Rounding::Down => Some(Self(q)),
            // q + 1 cannot overflow: a non-zero remainder implies divisor > 1.
            Rounding::Up if self.0 % divisor.0 != 0 => Some(Self(q + 1)),
            Rounding::Up => Some(Self(q)),
        }
    }

    /// Returns the smaller of two amounts.
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_max() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn add_and_sub() {
        let a = Amount::new(150_000);
        assert_eq!(a.checked_add(&Amount::new(1)), Some(Amount::new(150_001)));
        assert_eq!(a.checked_sub(&a), Some(Amount::ZERO));
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(Amount::ZERO.checked_sub(&Amount::new(1)), None);
    }

    #[test]
    fn div_rounds_in_requested_direction() {
        let n = Amount::new(100_000);
        let d = Amount::new(3);
        assert_eq!(n.checked_div(&d, Rounding::Down), Some(Amount::new(33_333)));
        assert_eq!(n.checked_div(&d, Rounding::Up), Some(Amount::new(33_334)));
        assert_eq!(
            Amount::new(9).checked_div(&d, Rounding::Up),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn div_by_zero_is_none() {
        assert_eq!(Amount::new(1).checked_div(&Amount::ZERO, Rounding::Down), None);
    }

    #[test]
    fn div_up_at_max_does_not_overflow() {
        let r = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up);
        assert_eq!(r, Some(Amount::new(u128::MAX / 2 + 1)));
    }

    #[test]
    fn min_picks_smaller() {
        assert_eq!(Amount::new(3).min(Amount::new(7)), Amount::new(3));
        assert_eq!(Amount::new(7).min(Amount::new(3)), Amount::new(3));
    }

    #[test]
    fn conversions_and_display() {
        assert_eq!(Amount::from(5u64), Amount::new(5));
        assert_eq!(Amount::from(5u128), Amount::new(5));
        assert_eq!(Amount::new(100_000).to_string(), "100000");
    }
}
