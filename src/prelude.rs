//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, Asset, AssetPair, BasisPoints, CallContext, Decimals, Deposit, FeeTier,
    Rounding, Shares, Side, SwapRecord, Timestamp, Withdrawal,
};

pub use crate::traits::{AssetLedger, FromConfig, LiquidityPool, SwapPool, Transfer};

pub use crate::math::CheckedArithmetic;

pub use crate::config::ConstantProductConfig;

pub use crate::error::{AmmError, LedgerError, Result};

pub use crate::ledger::InMemoryLedger;

pub use crate::pools::ConstantProductPool;

pub use crate::pricing::SwapQuote;
