//! The pool's two reserve counters.

use crate::domain::{Amount, Side};
use crate::error::AmmError;
use crate::math::{wide_mul, U256};

/// A signed change to one reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveDelta {
    /// Assets enter the pool.
    Increase(Amount),
    /// Assets leave the pool.
    Decrease(Amount),
}

impl ReserveDelta {
    /// No change.
    pub const NONE: Self = Self::Increase(Amount::ZERO);

    fn apply_to(self, reserve: Amount) -> Result<Amount, AmmError> {
        match self {
            Self::Increase(amount) => reserve
                .checked_add(&amount)
                .ok_or(AmmError::Overflow("reserve overflow")),
            Self::Decrease(amount) => reserve.checked_sub(&amount).ok_or(AmmError::Underflow(
                "reserve would become negative",
            )),
        }
    }
}

/// Snapshot of the pool's custodied balances of asset A and asset B.
///
/// A pure ledger of quantities: the only check it performs is that no
/// reserve goes below zero (or beyond `u128::MAX`).  Both reserves start at
/// zero and are non-zero after the first successful deposit.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
/// use hydra_cpmm::state::{ReserveDelta, Reserves};
///
/// let r = Reserves::new(Amount::new(100), Amount::new(100));
/// let next = r
///     .apply(ReserveDelta::Increase(Amount::new(1)), ReserveDelta::Decrease(Amount::new(1)))
///     .expect("in range");
/// assert_eq!(next.reserve_a(), Amount::new(101));
/// assert!(r.apply(ReserveDelta::NONE, ReserveDelta::Decrease(Amount::new(101))).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Reserves {
    /// An empty pool.
    pub const EMPTY: Self = Self::new(Amount::ZERO, Amount::ZERO);

    /// Builds a snapshot from explicit balances.
    #[must_use]
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Current reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Current reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Reserve on the given side.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// `(input reserve, output reserve)` for a swap selling `side_in`.
    pub(crate) const fn oriented(&self, side_in: Side) -> (Amount, Amount) {
        match side_in {
            Side::A => (self.reserve_a, self.reserve_b),
            Side::B => (self.reserve_b, self.reserve_a),
        }
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() || self.reserve_b.is_zero()
    }

    /// The constant-product invariant `k = reserve_a * reserve_b`, exact.
    #[must_use]
    pub fn product(&self) -> U256 {
        wide_mul(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Returns the snapshot that results from applying both deltas.
    ///
    /// `self` is left unchanged, so callers can validate a transition
    /// before committing it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if a decrease exceeds the reserve.
    /// - [`AmmError::Overflow`] if an increase exceeds `u128::MAX`.
    pub fn apply(&self, delta_a: ReserveDelta, delta_b: ReserveDelta) -> Result<Self, AmmError> {
        Ok(Self {
            reserve_a: delta_a.apply_to(self.reserve_a)?,
            reserve_b: delta_b.apply_to(self.reserve_b)?,
        })
    }

    /// Applies a delta to one side only.
    ///
    /// # Errors
    ///
    /// Same as [`Reserves::apply`].
    pub fn apply_side(&self, side: Side, delta: ReserveDelta) -> Result<Self, AmmError> {
        match side {
            Side::A => self.apply(delta, ReserveDelta::NONE),
            Side::B => self.apply(ReserveDelta::NONE, delta),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn r(a: u128, b: u128) -> Reserves {
        Reserves::new(Amount::new(a), Amount::new(b))
    }

    #[test]
    fn starts_empty() {
        assert_eq!(Reserves::default(), Reserves::EMPTY);
        assert!(Reserves::EMPTY.is_empty());
        assert!(r(1, 0).is_empty());
        assert!(!r(1, 1).is_empty());
    }

    #[test]
    fn apply_both_directions() {
        let Ok(next) = r(150_000, 150_000).apply(
            ReserveDelta::Increase(Amount::new(1)),
            ReserveDelta::Decrease(Amount::new(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(next, r(150_001, 149_999));
    }

    #[test]
    fn apply_underflow_leaves_original() {
        let res = r(10, 10);
        let err = res.apply(
            ReserveDelta::Decrease(Amount::new(5)),
            ReserveDelta::Decrease(Amount::new(11)),
        );
        let Err(AmmError::Underflow(_)) = err else {
            panic!("expected Underflow");
        };
        assert_eq!(res, r(10, 10));
    }

    #[test]
    fn apply_overflow() {
        let Err(AmmError::Overflow(_)) = r(u128::MAX, 0).apply(
            ReserveDelta::Increase(Amount::new(1)),
            ReserveDelta::NONE,
        ) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn draining_to_zero_is_allowed() {
        let Ok(next) = r(5, 7).apply(
            ReserveDelta::Decrease(Amount::new(5)),
            ReserveDelta::Decrease(Amount::new(7)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(next, Reserves::EMPTY);
    }

    #[test]
    fn side_accessors() {
        let res = r(1, 2);
        assert_eq!(res.reserve(Side::A), Amount::new(1));
        assert_eq!(res.reserve(Side::B), Amount::new(2));
        assert_eq!(res.oriented(Side::B), (Amount::new(2), Amount::new(1)));
        let Ok(next) = res.apply_side(Side::B, ReserveDelta::Increase(Amount::new(3))) else {
            panic!("expected Ok");
        };
        assert_eq!(next, r(1, 5));
    }

    #[test]
    fn product_is_exact_past_u128() {
        let res = r(u128::MAX, 2);
        assert!(res.product() > U256::new(u128::MAX));
        assert_eq!(res.product(), U256::new(u128::MAX) * U256::new(2));
    }
}
