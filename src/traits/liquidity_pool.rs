//! Liquidity surface of a pool, extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! Total shares change only through [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`].  Swaps move reserves but never
//! mint or burn shares, so every share's claim grows with retained fees.
//!
//! ```text
//! total_shares = Σ balance_of(provider)
//! ```

use super::{AssetLedger, SwapPool};
use crate::domain::{Address, Amount, CallContext, Deposit, Shares, Withdrawal};
use crate::error::AmmError;

/// Deposits and withdrawals of liquidity against pool shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits `amount_a` of asset A and `amount_b` of asset B from
    /// `ctx.caller()` and mints shares to them.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_a` is zero.
    /// - [`AmmError::RatioMismatch`] if `amount_b` does not match the
    ///   current price.
    /// - [`AmmError::Ledger`] if a transfer is refused.
    fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError>;

    /// Burns `shares` held by `ctx.caller()` and pays out the
    /// proportional reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroShares`] if `shares` is zero.
    /// - [`AmmError::PoolEmpty`] if no shares exist.
    /// - [`AmmError::InsufficientShares`] if the caller holds fewer shares.
    fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError>;

    /// Total shares outstanding.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Shares held by `provider`.
    #[must_use]
    fn balance_of(&self, provider: &Address) -> Shares;
}
