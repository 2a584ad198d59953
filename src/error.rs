//! Unified error types for the pool core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Failures reported by the external asset ledgers are carried
//! unchanged inside [`AmmError::Ledger`].

use thiserror::Error;

use crate::domain::{Amount, Shares};

/// Convenience alias used throughout the crate.
pub type Result<T, E = AmmError> = core::result::Result<T, E>;

/// Every way a pool operation can fail.
///
/// A failed operation never leaves partial state behind: reserves, share
/// balances and asset custody are exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmmError {
    // ------------------------------------------------------------------
    // Caller input
    // ------------------------------------------------------------------
    /// A deposit or swap was requested with a zero asset amount.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// A withdrawal was requested for zero shares.
    #[error("share amount must be greater than zero")]
    ZeroShares,

    /// The declared asset-B amount does not preserve the pool price.
    #[error("deposit ratio mismatch: expected {expected} of asset B, got {provided}")]
    RatioMismatch {
        /// Amount of asset B the pool requires for the given asset-A amount.
        expected: Amount,
        /// Amount of asset B the caller declared.
        provided: Amount,
    },

    /// The provider does not hold enough shares.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to burn.
        requested: Shares,
        /// Shares the caller actually holds.
        available: Shares,
    },

    /// An amount is not acceptable for the requested operation.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The pool's custody account tried to trade with or provide to itself.
    #[error("custody account cannot call pool operations")]
    CustodyCaller,

    // ------------------------------------------------------------------
    // Pool state
    // ------------------------------------------------------------------
    /// The pool has no liquidity yet.
    #[error("pool is empty")]
    PoolEmpty,

    /// A balance would become negative.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// A balance or intermediate value exceeds the representable range.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------
    /// The pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An asset is unknown to the pool or the pair is degenerate.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Decimal precision is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// The fee rate is out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------
    /// An asset ledger refused a transfer.
    #[error("asset ledger: {0}")]
    Ledger(#[from] LedgerError),
}

/// Failures surfaced by an [`AssetLedger`](crate::traits::AssetLedger).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerError {
    /// The owner does not hold enough of the asset.
    #[error("insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer requires.
        needed: Amount,
        /// Amount the owner holds.
        available: Amount,
    },

    /// The spender's allowance is smaller than the transfer.
    #[error("allowance exceeded: needed {needed}, allowed {allowed}")]
    AllowanceExceeded {
        /// Amount the transfer requires.
        needed: Amount,
        /// Amount the owner approved.
        allowed: Amount,
    },

    /// The ledger does not know the asset.
    #[error("unknown asset")]
    UnknownAsset,

    /// A credit would overflow the recipient's balance.
    #[error("balance overflow")]
    BalanceOverflow,

    /// A settlement leg failed and undoing the legs before it also failed.
    /// The ledger is left partly applied.
    #[error("settlement reversal failed after: {0}")]
    ReversalFailed(Box<LedgerError>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ratio_mismatch() {
        let err = AmmError::RatioMismatch {
            expected: Amount::new(50),
            provided: Amount::new(49),
        };
        assert_eq!(
            err.to_string(),
            "deposit ratio mismatch: expected 50 of asset B, got 49"
        );
    }

    #[test]
    fn display_insufficient_shares() {
        let err = AmmError::InsufficientShares {
            requested: Shares::new(51),
            available: Shares::new(50),
        };
        assert_eq!(
            err.to_string(),
            "insufficient shares: requested 51, available 50"
        );
    }

    #[test]
    fn ledger_error_converts_unchanged() {
        let inner = LedgerError::AllowanceExceeded {
            needed: Amount::new(10),
            allowed: Amount::new(5),
        };
        let err: AmmError = inner.clone().into();
        assert_eq!(err, AmmError::Ledger(inner));
        assert!(err.to_string().starts_with("asset ledger: allowance exceeded"));
    }

    #[test]
    fn display_reversal_failed_names_cause() {
        let err = LedgerError::ReversalFailed(Box::new(LedgerError::UnknownAsset));
        assert_eq!(err.to_string(), "settlement reversal failed after: unknown asset");
    }
}
