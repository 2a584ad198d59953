//! Priced, not yet executed, swap.

use core::fmt;

use crate::domain::{Amount, Side};

/// The result of pricing a swap against a reserves snapshot.
///
/// # Invariants
///
/// - `fee <= amount_in`.
/// - `amount_out` is strictly below the output reserve it was priced on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    side_in: Side,
    amount_in: Amount,
    fee: Amount,
    amount_out: Amount,
}

impl SwapQuote {
    pub(crate) const fn new(
        side_in: Side,
        amount_in: Amount,
        fee: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            side_in,
            amount_in,
            fee,
            amount_out,
        }
    }

    /// A zero-input quote: nothing in, nothing out.
    pub(crate) const fn zero(side_in: Side) -> Self {
        Self::new(side_in, Amount::ZERO, Amount::ZERO, Amount::ZERO)
    }

    /// Side of the asset sold to the pool.
    #[must_use]
    pub const fn side_in(&self) -> Side {
        self.side_in
    }

    /// Side of the asset bought from the pool.
    #[must_use]
    pub const fn side_out(&self) -> Side {
        self.side_in.opposite()
    }

    /// Gross amount sold, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Part of `amount_in` retained as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Amount the pool pays out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote({} in={}, fee={}, out={})",
            self.side_in, self.amount_in, self.fee, self.amount_out
        )
    }
}
