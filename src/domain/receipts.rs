//! Results of liquidity operations.

use super::{Address, Amount, Shares};

/// Outcome of a successful `add_liquidity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deposit {
    /// Account credited with the new shares.
    pub provider: Address,
    /// Asset A moved into the pool.
    pub amount_a: Amount,
    /// Asset B moved into the pool.
    pub amount_b: Amount,
    /// Shares minted to the provider.
    pub shares_minted: Shares,
}

/// Outcome of a successful `remove_liquidity`.
///
/// Amounts are rounded down, so a withdrawer can receive marginally less
/// than an exact proportional slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Withdrawal {
    /// Account whose shares were burned.
    pub provider: Address,
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
    /// Shares burned.
    pub shares_burned: Shares,
}
