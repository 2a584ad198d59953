//! In-memory fungible-asset ledger.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::{Address, Amount, Asset};
use crate::error::LedgerError;
use crate::traits::{AssetLedger, Transfer};

/// Balances and allowances of one asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Book {
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<(Address, Address), Amount>,
    supply: Amount,
}

impl Book {
    fn balance(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn move_funds(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance(&from);
        let Some(from_after) = available.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        };
        if from == to {
            return Ok(());
        }
        let to_after = self
            .balance(&to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert(from, from_after);
        self.balances.insert(to, to_after);
        Ok(())
    }
}

/// A self-contained ledger for any number of assets, keyed by asset
/// address.
///
/// Behaves like a standard fungible-token contract: owners hold balances,
/// approve spenders, and spenders pull approved funds with
/// [`transfer_from`](AssetLedger::transfer_from).  Useful as the custody
/// backend for simulations and tests.
///
/// Its [`settle`](AssetLedger::settle) snapshots the whole ledger and
/// restores it if any leg fails.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, Amount, Asset, Decimals};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::traits::AssetLedger;
///
/// let token = Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX);
/// let alice = Address::from_bytes([10u8; 32]);
/// let pool = Address::from_bytes([99u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(&token, alice, Amount::new(1_000)).expect("mint");
/// ledger.approve(&token, alice, pool, Amount::new(400));
/// ledger.transfer_from(&token, alice, pool, Amount::new(400)).expect("approved");
/// assert_eq!(ledger.balance_of(&token, &pool), Amount::new(400));
/// assert!(ledger.transfer_from(&token, alice, pool, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    books: BTreeMap<Address, Book>,
}

impl InMemoryLedger {
    /// Creates an empty ledger with no assets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` new units of `asset` for `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the supply or the
    /// balance of `to` would overflow.
    pub fn mint(&mut self, asset: &Asset, to: Address, amount: Amount) -> Result<(), LedgerError> {
        let book = self.books.entry(asset.address()).or_default();
        let supply = book
            .supply
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        let balance = book
            .balance(&to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        book.supply = supply;
        book.balances.insert(to, balance);
        debug!(asset = %asset.address(), %to, %amount, "minted");
        Ok(())
    }

    /// Sets the amount `spender` may pull from `owner`.
    pub fn approve(&mut self, asset: &Asset, owner: Address, spender: Address, amount: Amount) {
        self.books
            .entry(asset.address())
            .or_default()
            .allowances
            .insert((owner, spender), amount);
    }

    /// Balance of `owner` in `asset`; zero for unknown assets or owners.
    pub fn balance_of(&self, asset: &Asset, owner: &Address) -> Amount {
        self.books
            .get(&asset.address())
            .map_or(Amount::ZERO, |b| b.balance(owner))
    }

    /// Remaining allowance of `spender` over `owner`'s `asset`.
    pub fn allowance(&self, asset: &Asset, owner: Address, spender: Address) -> Amount {
        self.books
            .get(&asset.address())
            .map_or(Amount::ZERO, |b| b.allowance(owner, spender))
    }

    /// Total units of `asset` ever minted.
    pub fn total_supply(&self, asset: &Asset) -> Amount {
        self.books
            .get(&asset.address())
            .map_or(Amount::ZERO, |b| b.supply)
    }

    fn book_mut(&mut self, asset: &Asset) -> Result<&mut Book, LedgerError> {
        self.books
            .get_mut(&asset.address())
            .ok_or(LedgerError::UnknownAsset)
    }

    fn apply(&mut self, leg: &Transfer) -> Result<(), LedgerError> {
        match *leg {
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
        }
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_from(
        &mut self,
        asset: &Asset,
        owner: Address,
        pool: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let book = self.book_mut(asset)?;
        let available = book.balance(&owner);
        if amount > available {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        let allowed = book.allowance(owner, pool);
        let Some(allowance_after) = allowed.checked_sub(&amount) else {
            return Err(LedgerError::AllowanceExceeded {
                needed: amount,
                allowed,
            });
        };
        book.move_funds(owner, pool, amount)?;
        book.allowances.insert((owner, pool), allowance_after);
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: &Asset,
        pool: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.book_mut(asset)?.move_funds(pool, recipient, amount)
    }

    fn settle(&mut self, batch: &[Transfer]) -> Result<(), LedgerError> {
        let snapshot = self.clone();
        let inbound = batch.iter().filter(|t| t.is_inbound());
        let outbound = batch.iter().filter(|t| !t.is_inbound());
        for leg in inbound.chain(outbound) {
            if leg.amount().is_zero() {
                continue;
            }
            if let Err(err) = self.apply(leg) {
                warn!(%err, "settlement failed, ledger restored");
                *self = snapshot;
                return Err(err);
            }
        }
        Ok(())
    }
}
