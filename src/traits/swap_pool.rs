//! Swap surface of a pool.
//!
//! [`SwapPool`] covers pricing and executing swaps.  Quotes are pure; a
//! swap prices against the pre-swap reserves, settles both transfers and
//! updates the reserves as one unit.
//!
//! # Fee Deduction
//!
//! Any fee is deducted from the input before the pricing curve is applied
//! and stays in the pool:
//!
//! ```text
//! net_input  = amount_in − ceil(amount_in × fee_bps / 10 000)
//! amount_out = curve(net_input)
//! reserve_in += amount_in
//! ```

use super::AssetLedger;
use crate::domain::{Amount, AssetPair, CallContext, FeeTier, Side, SwapRecord};
use crate::error::AmmError;
use crate::pricing::SwapQuote;

/// Pricing and execution of swaps between the pool's two assets.
pub trait SwapPool {
    /// Sells `amount_in` of the `side_in` asset to the pool.
    ///
    /// Pulls the input from `ctx.caller()`, pushes the output back, and
    /// returns the emitted [`SwapRecord`].  On error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::PoolEmpty`] if the pool has no liquidity.
    /// - [`AmmError::Ledger`] if a transfer is refused.
    fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        side_in: Side,
        amount_in: Amount,
    ) -> Result<SwapRecord, AmmError>;

    /// Prices a swap without executing it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolEmpty`] if `amount_in > 0` on an empty pool.
    /// - [`AmmError::Overflow`] on arithmetic overflow.
    fn quote_swap(&self, side_in: Side, amount_in: Amount) -> Result<SwapQuote, AmmError>;

    /// The assets traded by the pool.
    #[must_use]
    fn asset_pair(&self) -> &AssetPair;

    /// The fee charged on swap input.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
