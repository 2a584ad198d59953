//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] are the pool's operation surface,
//! [`FromConfig`] its construction, and [`AssetLedger`] the collaborator
//! that moves assets in and out of custody.

mod asset_ledger;
mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use asset_ledger::{AssetLedger, Transfer};
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
