//! Constant Product pool (`x · y = k`) with a share ledger.
//!
//! The pool owns two reserve counters and a share ledger, and moves assets
//! through an external [`AssetLedger`].  Every mutating operation runs in
//! three phases:
//!
//! 1. **Stage**: validate input, price the operation, and compute the next
//!    reserves and share update without touching `self`.
//! 2. **Settle**: hand all asset transfers of the operation to the ledger
//!    as one all-or-nothing batch.
//! 3. **Commit**: install the staged reserves and share update; this step
//!    cannot fail.
//!
//! A failure in either of the first two phases therefore leaves the pool
//! exactly as it was.
//!
//! # Liquidity
//!
//! - First deposit: the pair `(amount_a, amount_b)` sets the price; the
//!   provider receives `amount_a / share_precision` shares.
//! - Later deposits: `amount_b` must equal `quote_deposit(amount_a)`; the
//!   provider receives `total_shares × amount_a / reserve_a` shares.
//! - Withdrawal: `reserve_x × shares / total_shares` of each asset.
//!
//! All divisions round down, in the pool's favour.

use tracing::debug;

use crate::config::ConstantProductConfig;
use crate::domain::{
    Address, Amount, Asset, AssetPair, CallContext, Deposit, FeeTier, Shares, Side, SwapRecord,
    Withdrawal,
};
use crate::error::AmmError;
use crate::math::U256;
use crate::pricing::{self, SwapQuote};
use crate::state::{ReserveDelta, Reserves, ShareLedger};
use crate::traits::{AssetLedger, FromConfig, LiquidityPool, SwapPool, Transfer};

/// A two-asset Constant Product AMM pool.
///
/// Created empty from a [`ConstantProductConfig`] via [`FromConfig`].
///
/// # State
///
/// - `reserves`: custodied balances of A and B, in base units (fees included)
/// - `shares`: provider share balances and their total
///
/// # Example
///
/// ```rust
/// use hydra_cpmm::config::ConstantProductConfig;
/// use hydra_cpmm::domain::{Address, Amount, Asset, AssetPair, CallContext, Decimals, Timestamp};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::pools::ConstantProductPool;
/// use hydra_cpmm::traits::{FromConfig, LiquidityPool};
///
/// let a = Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX);
/// let b = Asset::new(Address::from_bytes([2u8; 32]), Decimals::MAX);
/// let custody = Address::from_bytes([9u8; 32]);
/// let lp = Address::from_bytes([10u8; 32]);
///
/// let cfg = ConstantProductConfig::new(AssetPair::new(a, b).expect("distinct"), custody);
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("valid config");
///
/// let mut ledger = InMemoryLedger::new();
/// for asset in [a, b] {
///     ledger.mint(&asset, lp, Amount::new(100_000)).expect("mint");
///     ledger.approve(&asset, lp, custody, Amount::new(100_000));
/// }
///
/// let ctx = CallContext::new(lp, Timestamp::from_secs(1));
/// let deposit = pool
///     .add_liquidity(&mut ledger, &ctx, Amount::new(100_000), Amount::new(100_000))
///     .expect("first deposit");
/// assert_eq!(deposit.shares_minted.get(), 100);
///
/// let err = pool.swap_a_for_b(&mut ledger, &ctx, Amount::ZERO).unwrap_err();
/// assert_eq!(err, hydra_cpmm::error::AmmError::ZeroAmount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    asset_pair: AssetPair,
    custody: Address,
    fee_tier: FeeTier,
    share_precision: u128,
    reserves: Reserves,
    shares: ShareLedger,
}

impl ConstantProductPool {
    // -- read-only queries ----------------------------------------------------

    /// Current reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserves.reserve_a()
    }

    /// Current reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserves.reserve_b()
    }

    /// Snapshot of both reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Asset A.
    #[must_use]
    pub const fn asset_a(&self) -> Asset {
        self.asset_pair.first()
    }

    /// Asset B.
    #[must_use]
    pub const fn asset_b(&self) -> Asset {
        self.asset_pair.second()
    }

    /// Account holding the pool's assets in the external ledgers.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }

    /// First-deposit share divisor.
    #[must_use]
    pub const fn share_precision(&self) -> u128 {
        self.share_precision
    }

    /// Read access to the share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &ShareLedger {
        &self.shares
    }

    /// The exact invariant `reserve_a × reserve_b`.
    #[must_use]
    pub fn invariant_k(&self) -> U256 {
        self.reserves.product()
    }

    /// Asset-B amount required alongside `amount_a` at the current price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] before the first deposit.
    pub fn quote_deposit(&self, amount_a: Amount) -> Result<Amount, AmmError> {
        pricing::quote_deposit(&self.reserves, amount_a)
    }

    /// Asset-A amount required alongside `amount_b` at the current price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] before the first deposit.
    pub fn quote_deposit_for_b(&self, amount_b: Amount) -> Result<Amount, AmmError> {
        pricing::quote_deposit_for_b(&self.reserves, amount_b)
    }

    /// Estimated asset-B output for selling `amount_in` of asset A.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] if the pool has no liquidity and
    /// `amount_in > 0`.
    pub fn quote_swap_a_for_b(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        self.quote_swap(Side::A, amount_in).map(|q| q.amount_out())
    }

    /// Estimated asset-A output for selling `amount_in` of asset B.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] if the pool has no liquidity and
    /// `amount_in > 0`.
    pub fn quote_swap_b_for_a(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        self.quote_swap(Side::B, amount_in).map(|q| q.amount_out())
    }

    /// Amounts of A and B that burning `shares` would pay out now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolEmpty`] if no shares exist.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the total.
    pub fn quote_withdraw(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        pricing::quote_withdraw(&self.reserves, self.shares.total_shares(), shares)
    }

    // -- swaps ----------------------------------------------------------------

    /// Sells `amount_in` of asset A for asset B.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_a_for_b<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        amount_in: Amount,
    ) -> Result<SwapRecord, AmmError> {
        self.swap(ledger, ctx, Side::A, amount_in)
    }

    /// Sells `amount_in` of asset B for asset A.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_b_for_a<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        amount_in: Amount,
    ) -> Result<SwapRecord, AmmError> {
        self.swap(ledger, ctx, Side::B, amount_in)
    }

    // -- helpers --------------------------------------------------------------

    /// The caller, unless it is the custody account: its transfers would be
    /// self-transfers that move no assets.
    fn external_caller(&self, ctx: &CallContext) -> Result<Address, AmmError> {
        let caller = ctx.caller();
        if caller == self.custody {
            return Err(AmmError::CustodyCaller);
        }
        Ok(caller)
    }

    fn pull(&self, side: Side, owner: Address, amount: Amount) -> Transfer {
        Transfer::In {
            asset: self.asset_pair.asset(side),
            owner,
            pool: self.custody,
            amount,
        }
    }

    fn push(&self, side: Side, recipient: Address, amount: Amount) -> Transfer {
        Transfer::Out {
            asset: self.asset_pair.asset(side),
            pool: self.custody,
            recipient,
            amount,
        }
    }
}

impl FromConfig<ConstantProductConfig> for ConstantProductPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ConstantProductConfig::validate`].
    fn from_config(config: &ConstantProductConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            asset_pair: *config.asset_pair(),
            custody: config.custody(),
            fee_tier: config.fee_tier(),
            share_precision: config.share_precision(),
            reserves: Reserves::EMPTY,
            shares: ShareLedger::new(),
        })
    }
}

impl SwapPool for ConstantProductPool {
    /// Executes a swap priced on the pre-swap reserves.
    ///
    /// The full `amount_in` (fee included) is added to the input reserve
    /// and `amount_out` is removed from the output reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CustodyCaller`] if the caller is the custody account.
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::PoolEmpty`] if either reserve is zero.
    /// - [`AmmError::Underflow`] if the output would exceed its reserve.
    /// - [`AmmError::Ledger`] if a transfer is refused.
    fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        side_in: Side,
        amount_in: Amount,
    ) -> Result<SwapRecord, AmmError> {
        let trader = self.external_caller(ctx)?;
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if self.reserves.is_empty() {
            return Err(AmmError::PoolEmpty);
        }

        let quote = pricing::quote_swap(&self.reserves, side_in, amount_in, self.fee_tier)?;
        let side_out = quote.side_out();
        let next = self
            .reserves
            .apply_side(side_in, ReserveDelta::Increase(amount_in))?
            .apply_side(side_out, ReserveDelta::Decrease(quote.amount_out()))?;

        ledger.settle(&[
            self.pull(side_in, trader, amount_in),
            self.push(side_out, trader, quote.amount_out()),
        ])?;

        self.reserves = next;

        let record = SwapRecord::new(
            trader,
            self.asset_pair.asset(side_in),
            amount_in,
            self.asset_pair.asset(side_out),
            quote.amount_out(),
            next.reserve_a(),
            next.reserve_b(),
            ctx.timestamp(),
        );
        debug!(
            %trader,
            side_in = %side_in,
            %amount_in,
            fee = %quote.fee(),
            amount_out = %quote.amount_out(),
            reserve_a = %next.reserve_a(),
            reserve_b = %next.reserve_b(),
            "swap"
        );
        Ok(record)
    }

    fn quote_swap(&self, side_in: Side, amount_in: Amount) -> Result<SwapQuote, AmmError> {
        pricing::quote_swap(&self.reserves, side_in, amount_in, self.fee_tier)
    }

    fn asset_pair(&self) -> &AssetPair {
        &self.asset_pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl LiquidityPool for ConstantProductPool {
    /// Deposits a matched pair and mints shares to the caller.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CustodyCaller`] if the caller is the custody account.
    /// - [`AmmError::ZeroAmount`] if `amount_a` is zero, or `amount_b` is
    ///   zero on the first deposit.
    /// - [`AmmError::RatioMismatch`] if a later deposit's `amount_b` is not
    ///   `quote_deposit(amount_a)`.
    /// - [`AmmError::InvalidAmount`] if the deposit is too small to mint a
    ///   share.
    /// - [`AmmError::Overflow`] if a reserve or share total would overflow.
    /// - [`AmmError::Ledger`] if a transfer is refused.
    fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Deposit, AmmError> {
        let provider = self.external_caller(ctx)?;
        if amount_a.is_zero() {
            return Err(AmmError::ZeroAmount);
        }

        let total = self.shares.total_shares();
        let minted = if total.is_zero() {
            if amount_b.is_zero() {
                return Err(AmmError::ZeroAmount);
            }
            pricing::initial_shares(amount_a, self.share_precision)?
        } else {
            let expected = pricing::quote_deposit(&self.reserves, amount_a)?;
            if expected != amount_b {
                return Err(AmmError::RatioMismatch {
                    expected,
                    provided: amount_b,
                });
            }
            pricing::proportional_shares(&self.reserves, total, amount_a)?
        };
        if minted.is_zero() {
            return Err(AmmError::InvalidAmount("deposit too small to mint shares"));
        }

        let update = self.shares.prepare_mint(provider, minted)?;
        let next = self.reserves.apply(
            ReserveDelta::Increase(amount_a),
            ReserveDelta::Increase(amount_b),
        )?;

        ledger.settle(&[
            self.pull(Side::A, provider, amount_a),
            self.pull(Side::B, provider, amount_b),
        ])?;

        self.shares.commit(update);
        self.reserves = next;

        debug!(
            %provider,
            %amount_a,
            %amount_b,
            shares_minted = %minted,
            total_shares = %update.total_after(),
            "add liquidity"
        );
        Ok(Deposit {
            provider,
            amount_a,
            amount_b,
            shares_minted: minted,
        })
    }

    /// Burns the caller's shares and pays out the proportional reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CustodyCaller`] if the caller is the custody account.
    /// - [`AmmError::ZeroShares`] if `shares` is zero.
    /// - [`AmmError::PoolEmpty`] if no shares exist.
    /// - [`AmmError::InsufficientShares`] if the caller holds fewer shares.
    /// - [`AmmError::Ledger`] if a transfer is refused.
    fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        ctx: &CallContext,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        let provider = self.external_caller(ctx)?;
        if shares.is_zero() {
            return Err(AmmError::ZeroShares);
        }
        let total = self.shares.total_shares();
        if total.is_zero() {
            return Err(AmmError::PoolEmpty);
        }

        let update = self.shares.prepare_burn(provider, shares)?;
        let (amount_a, amount_b) = pricing::quote_withdraw(&self.reserves, total, shares)?;
        let next = self.reserves.apply(
            ReserveDelta::Decrease(amount_a),
            ReserveDelta::Decrease(amount_b),
        )?;

        ledger.settle(&[
            self.push(Side::A, provider, amount_a),
            self.push(Side::B, provider, amount_b),
        ])?;

        self.shares.commit(update);
        self.reserves = next;

        debug!(
            %provider,
            %amount_a,
            %amount_b,
            shares_burned = %shares,
            total_shares = %update.total_after(),
            "remove liquidity"
        );
        Ok(Withdrawal {
            provider,
            amount_a,
            amount_b,
            shares_burned: shares,
        })
    }

    fn total_shares(&self) -> Shares {
        self.shares.total_shares()
    }

    fn balance_of(&self, provider: &Address) -> Shares {
        self.shares.balance_of(provider)
    }
}
