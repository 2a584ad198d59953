//! Per-provider share balances.

use std::collections::BTreeMap;

use crate::domain::{Address, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// A validated, not yet applied, change to one provider's balance.
///
/// Produced by [`ShareLedger::prepare_mint`] / [`ShareLedger::prepare_burn`]
/// and applied with [`ShareLedger::commit`], which cannot fail.  The pool
/// holds the ledger mutably between the two calls, so the update can never
/// go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ShareUpdate {
    provider: Address,
    balance_after: Shares,
    total_after: Shares,
}

impl ShareUpdate {
    /// Provider whose balance changes.
    #[must_use]
    pub const fn provider(&self) -> Address {
        self.provider
    }

    /// Provider balance once committed.
    pub const fn balance_after(&self) -> Shares {
        self.balance_after
    }

    /// Total shares once committed.
    pub const fn total_after(&self) -> Shares {
        self.total_after
    }
}

/// Ownership claims on the pool.
///
/// Maps each provider to a share balance and tracks the total.  The sum of
/// all balances always equals [`total_shares`](Self::total_shares); a
/// provider whose balance reaches zero is dropped from the map.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, Shares};
/// use hydra_cpmm::state::ShareLedger;
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let mut ledger = ShareLedger::new();
/// ledger.mint(alice, Shares::new(100)).expect("positive");
/// ledger.burn(alice, Shares::new(40)).expect("enough shares");
/// assert_eq!(ledger.balance_of(&alice), Shares::new(60));
/// assert_eq!(ledger.total_shares(), Shares::new(60));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<Address, Shares>,
    total: Shares,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Share balance of `provider`; zero if unknown.
    pub fn balance_of(&self, provider: &Address) -> Shares {
        self.balances.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Total shares outstanding.
    pub const fn total_shares(&self) -> Shares {
        self.total
    }

    /// Iterates providers with a non-zero balance, in address order.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Shares)> {
        self.balances.iter()
    }

    /// Number of providers with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Validates a mint of `amount` shares to `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount` is zero.
    /// - [`AmmError::Overflow`] if the balance or total would overflow.
    pub fn prepare_mint(&self, provider: Address, amount: Shares) -> Result<ShareUpdate, AmmError> {
        if amount.is_zero() {
            return Err(AmmError::InvalidAmount("cannot mint zero shares"));
        }
        Ok(ShareUpdate {
            provider,
            balance_after: self.balance_of(&provider).safe_add(&amount)?,
            total_after: self.total.safe_add(&amount)?,
        })
    }

    /// Validates a burn of `amount` shares from `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount` is zero.
    /// - [`AmmError::InsufficientShares`] if `provider` holds fewer than
    ///   `amount` shares.
    pub fn prepare_burn(&self, provider: Address, amount: Shares) -> Result<ShareUpdate, AmmError> {
        if amount.is_zero() {
            return Err(AmmError::InvalidAmount("cannot burn zero shares"));
        }
        let available = self.balance_of(&provider);
        let Some(balance_after) = available.checked_sub(&amount) else {
            return Err(AmmError::InsufficientShares {
                requested: amount,
                available,
            });
        };
        Ok(ShareUpdate {
            provider,
            balance_after,
            // Every balance is part of the total, so this cannot underflow.
            total_after: self.total.safe_sub(&amount)?,
        })
    }

    /// Applies a prepared update.
    pub fn commit(&mut self, update: ShareUpdate) {
        if update.balance_after.is_zero() {
            self.balances.remove(&update.provider);
        } else {
            self.balances.insert(update.provider, update.balance_after);
        }
        self.total = update.total_after;
    }

    /// Mints `amount` shares to `provider` and returns the new balance.
    ///
    /// # Errors
    ///
    /// See [`ShareLedger::prepare_mint`].
    pub fn mint(&mut self, provider: Address, amount: Shares) -> Result<Shares, AmmError> {
        let update = self.prepare_mint(provider, amount)?;
        self.commit(update);
        Ok(update.balance_after)
    }

    /// Burns `amount` shares from `provider` and returns the new balance.
    ///
    /// # Errors
    ///
    /// See [`ShareLedger::prepare_burn`].
    pub fn burn(&mut self, provider: Address, amount: Shares) -> Result<Shares, AmmError> {
        let update = self.prepare_burn(provider, amount)?;
        self.commit(update);
        Ok(update.balance_after)
    }

    /// Returns `true` if the balances sum exactly to the total.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.balances
            .values()
            .try_fold(Shares::ZERO, |acc, s| acc.checked_add(s))
            == Some(self.total)
    }
}
