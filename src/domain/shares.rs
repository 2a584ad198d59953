//! Pool ownership claims.

use core::fmt;

/// A quantity of pool shares, in the share ledger's base unit.
///
/// Shares are kept distinct from [`Amount`](super::Amount) so that an asset
/// quantity can never be passed where a claim on the pool is expected.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Shares;
///
/// let minted = Shares::new(100);
/// assert_eq!(minted.checked_add(&Shares::new(50)), Some(Shares::new(150)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw share count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw share count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
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

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_ops() {
        let s = Shares::new(150);
        assert_eq!(s.checked_sub(&Shares::new(50)), Some(Shares::new(100)));
        assert_eq!(s.checked_sub(&Shares::new(151)), None);
        assert_eq!(Shares::new(u128::MAX).checked_add(&Shares::new(1)), None);
    }

    #[test]
    fn zero() {
        assert!(Shares::ZERO.is_zero());
        assert_eq!(Shares::default(), Shares::ZERO);
        assert_eq!(Shares::new(100).to_string(), "100");
    }
}
