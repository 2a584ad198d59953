//! Event emitted by every successful swap.

use core::fmt;

use super::{Address, Amount, Asset, Timestamp};

/// Immutable record of one completed swap.
///
/// Produced once per successful swap and returned to the caller; the pool
/// keeps no copy.  Reserves are the values *after* the swap was applied,
/// so an indexer can follow the pool price from records alone.
///
/// Fields are set by the pool and exposed read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapRecord {
    trader: Address,
    asset_in: Asset,
    amount_in: Amount,
    asset_out: Asset,
    amount_out: Amount,
    reserve_a_after: Amount,
    reserve_b_after: Amount,
    timestamp: Timestamp,
}

impl SwapRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        trader: Address,
        asset_in: Asset,
        amount_in: Amount,
        asset_out: Asset,
        amount_out: Amount,
        reserve_a_after: Amount,
        reserve_b_after: Amount,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            trader,
            asset_in,
            amount_in,
            asset_out,
            amount_out,
            reserve_a_after,
            reserve_b_after,
            timestamp,
        }
    }

    /// The account that swapped.
    #[must_use]
    pub const fn trader(&self) -> Address {
        self.trader
    }

    /// The asset sold to the pool.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        self.asset_in
    }

    /// Amount sold to the pool, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// The asset bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        self.asset_out
    }

    /// Amount paid out by the pool.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Reserve of asset A after the swap.
    pub const fn reserve_a_after(&self) -> Amount {
        self.reserve_a_after
    }

    /// Reserve of asset B after the swap.
    pub const fn reserve_b_after(&self) -> Amount {
        self.reserve_b_after
    }

    /// Time of the enclosing operation.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for SwapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap(trader={}, in={}, out={}, reserves=({}, {}), at={})",
            self.trader,
            self.amount_in,
            self.amount_out,
            self.reserve_a_after,
            self.reserve_b_after,
            self.timestamp
        )
    }
}
