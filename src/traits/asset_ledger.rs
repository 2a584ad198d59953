//! The external asset ledgers a pool moves funds through.
//!
//! The pool never holds assets itself: custody lives in the ledgers, under
//! the pool's custody address.  A pool only needs two primitives per
//! asset, mirroring a fungible-token contract:
//!
//! - [`AssetLedger::transfer_from`]: pull funds the owner has approved
//!   into pool custody.
//! - [`AssetLedger::transfer`]: push funds out of pool custody.
//!
//! # Settlement
//!
//! All transfers of one pool operation are handed over together as a
//! batch to [`AssetLedger::settle`], which must apply either every leg or
//! none.  The provided implementation applies pulls before pushes and, if
//! any leg fails, reverses the legs already applied with
//! [`AssetLedger::transfer`].  Reversal does not restore consumed
//! allowances, and if a reversal itself fails the batch ends as
//! [`LedgerError::ReversalFailed`].  Ledgers that can roll back natively
//! should override it.

use tracing::{error, warn};

use crate::domain::{Address, Amount, Asset};
use crate::error::LedgerError;

/// One leg of a settlement batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Pull `amount` of `asset` from `owner` into `pool` custody.
    In {
        /// Asset moved.
        asset: Asset,
        /// Account funds come from.
        owner: Address,
        /// Pool custody account.
        pool: Address,
        /// Quantity moved.
        amount: Amount,
    },
    /// Push `amount` of `asset` from `pool` custody to `recipient`.
    Out {
        /// Asset moved.
        asset: Asset,
        /// Pool custody account.
        pool: Address,
        /// Account receiving the funds.
        recipient: Address,
        /// Quantity moved.
        amount: Amount,
    },
}

impl Transfer {
    /// Quantity moved by this leg.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::In { amount, .. } | Self::Out { amount, .. } => *amount,
        }
    }

    /// Returns `true` for a pull into custody.
    #[must_use]
    pub const fn is_inbound(&self) -> bool {
        matches!(self, Self::In { .. })
    }
}

/// Balance-transfer capability of the ledgers backing a pool's assets.
///
/// Failures are reported as [`LedgerError`] and propagated by the pool
/// unchanged.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `owner` to `pool`, consuming the
    /// allowance `owner` granted to `pool`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AllowanceExceeded`] if the allowance is too small.
    /// - [`LedgerError::InsufficientBalance`] if `owner` lacks the funds.
    fn transfer_from(
        &mut self,
        asset: &Asset,
        owner: Address,
        pool: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `pool` to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `pool` lacks the funds.
    fn transfer(
        &mut self,
        asset: &Asset,
        pool: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Applies every leg of `batch`, or none of them.
    ///
    /// Zero-amount legs are skipped.  Pulls run before pushes.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing leg, after reversing every
    /// leg already applied.  If any reversal fails, returns
    /// [`LedgerError::ReversalFailed`] wrapping that first error.
    fn settle(&mut self, batch: &[Transfer]) -> Result<(), LedgerError> {
        let mut applied_legs: Vec<&Transfer> = Vec::with_capacity(batch.len());
        let inbound = batch.iter().filter(|t| t.is_inbound());
        let outbound = batch.iter().filter(|t| !t.is_inbound());

        for leg in inbound.chain(outbound) {
            if leg.amount().is_zero() {
                continue;
            }
            let applied = match *leg {
                Transfer::In {
                    asset,
                    owner,
                    pool,
                    amount,
                } => self.transfer_from(&asset, owner, pool, amount),
                Transfer::Out {
                    asset,
                    pool,
                    recipient,
                    amount,
                } => self.transfer(&asset, pool, recipient, amount),
            };
            if let Err(err) = applied {
                warn!(%err, reversals = applied_legs.len(), "settlement failed, reversing");
                if reverse(self, &applied_legs) {
                    return Err(err);
                }
                return Err(LedgerError::ReversalFailed(Box::new(err)));
            }
            applied_legs.push(leg);
        }
        Ok(())
    }
}

/// Undoes `applied` last first; returns `false` if any leg could not be undone.
fn reverse<L: AssetLedger + ?Sized>(ledger: &mut L, applied: &[&Transfer]) -> bool {
    let mut clean = true;
    for leg in applied.iter().rev() {
        let (asset, from, to, amount) = match **leg {
            Transfer::In {
                asset,
                owner,
                pool,
                amount,
            } => (asset, pool, owner, amount),
            Transfer::Out {
                asset,
                pool,
                recipient,
                amount,
            } => (asset, recipient, pool, amount),
        };
        if let Err(err) = ledger.transfer(&asset, from, to, amount) {
            error!(%err, %from, %to, %amount, "settlement reversal failed");
            clean = false;
        }
    }
    clean
}
