//! Fractional digits of an asset's base unit.

use super::Amount;
use crate::error::AmmError;

/// Largest supported number of fractional digits.
const MAX_DECIMALS: u8 = 18;

/// How many fractional digits one whole unit of an asset is split into.
///
/// An asset with `Decimals(18)` counts `10^18` base units per whole unit.
/// Valid range is `0..=18`.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Decimals};
///
/// let d = Decimals::new(18).expect("valid");
/// assert_eq!(d.to_base_units(1), Amount::new(1_000_000_000_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// Whole units only.
    pub const ZERO: Self = Self(0);

    /// Eighteen fractional digits, the usual fungible-token setting.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a `Decimals` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the digit count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Base units per whole unit, `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts a whole-unit quantity into base units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub const fn to_base_units(&self, whole: u64) -> Amount {
        Amount::new(whole as u128 * self.factor())
    }

    /// Truncates a base-unit quantity to whole units.
    #[must_use]
    pub const fn to_whole_units(&self, amount: Amount) -> u128 {
        amount.get() / self.factor()
    }
}
