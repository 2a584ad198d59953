//! Checked arithmetic trait for the quantity newtypes.
//!
//! [`CheckedArithmetic`] returns [`Result<Self, AmmError>`](crate::error::AmmError)
//! instead of `Option`, tagging each failure with the operation that
//! caused it so it can be propagated with `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::domain::Amount;
//! use hydra_cpmm::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100);
//! assert!(reserve.safe_sub(&Amount::new(101)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for [`Amount`] and [`Shares`].
///
/// # Contract
///
/// - No panics, no wrapping, no saturation.
/// - Addition past the type's range is [`AmmError::Overflow`]; subtraction
///   below zero is [`AmmError::Underflow`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `other > self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn amount_add_overflow() {
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn amount_sub_underflow() {
        let Err(AmmError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn amount_ok_paths() {
        assert_eq!(Amount::new(2).safe_add(&Amount::new(3)), Ok(Amount::new(5)));
        assert_eq!(Amount::new(5).safe_sub(&Amount::new(3)), Ok(Amount::new(2)));
    }

    #[test]
    fn shares_paths() {
        assert_eq!(Shares::new(100).safe_add(&Shares::new(50)), Ok(Shares::new(150)));
        let Err(AmmError::Underflow(_)) = Shares::new(50).safe_sub(&Shares::new(51)) else {
            panic!("expected Underflow");
        };
    }
}
