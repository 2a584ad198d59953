//! Configuration for a constant-product pool.

use crate::domain::{Address, AssetPair, FeeTier};
use crate::error::AmmError;

/// Divisor applied to the first asset-A deposit to obtain the initial share
/// count.
///
/// With this value a first deposit of 100 000 base units of asset A mints
/// 100 shares; with 18-decimal assets, 100 000 whole units mint 100 whole
/// shares (shares then carry the same 18 fractional digits).
pub const DEFAULT_SHARE_PRECISION: u128 = 1_000;

/// Immutable parameters of a constant-product pool.
///
/// # Parameters
///
/// - `asset_pair`: assets A and B, in creation order.
/// - `custody`: the account under which the pool holds its assets in the
///   external ledgers.
/// - `fee_tier`: fee taken from swap input; zero unless configured.
/// - `share_precision`: first-deposit divisor, see
///   [`DEFAULT_SHARE_PRECISION`].
///
/// # Validation
///
/// - `share_precision` must be non-zero.
/// - The fee must be strictly below 100%.
/// - `custody` must differ from both asset addresses.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::config::ConstantProductConfig;
/// use hydra_cpmm::domain::{Address, Asset, AssetPair, Decimals, FeeTier};
///
/// let a = Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX);
/// let b = Asset::new(Address::from_bytes([2u8; 32]), Decimals::MAX);
/// let pair = AssetPair::new(a, b).expect("distinct");
///
/// let cfg = ConstantProductConfig::new(pair, Address::from_bytes([9u8; 32]))
///     .with_fee_tier(FeeTier::TIER_0_30_PERCENT);
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.share_precision(), 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantProductConfig {
    asset_pair: AssetPair,
    custody: Address,
    #[cfg_attr(feature = "serde", serde(default))]
    fee_tier: FeeTier,
    #[cfg_attr(feature = "serde", serde(default = "default_share_precision"))]
    share_precision: u128,
}

#[cfg(feature = "serde")]
const fn default_share_precision() -> u128 {
    DEFAULT_SHARE_PRECISION
}

impl ConstantProductConfig {
    /// Creates a fee-less configuration with the default share precision.
    #[must_use]
    pub const fn new(asset_pair: AssetPair, custody: Address) -> Self {
        Self {
            asset_pair,
            custody,
            fee_tier: FeeTier::ZERO,
            share_precision: DEFAULT_SHARE_PRECISION,
        }
    }

    /// Sets the swap fee.
    #[must_use]
    pub const fn with_fee_tier(mut self, fee_tier: FeeTier) -> Self {
        self.fee_tier = fee_tier;
        self
    }

    /// Sets the first-deposit share divisor.
    #[must_use]
    pub const fn with_share_precision(mut self, share_precision: u128) -> Self {
        self.share_precision = share_precision;
        self
    }

    /// Checks every configuration invariant.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `share_precision` is zero or
    ///   `custody` collides with an asset address.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.share_precision == 0 {
            return Err(AmmError::InvalidConfiguration(
                "share precision must be non-zero",
            ));
        }
        if !self.fee_tier.basis_points().is_below_whole() {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        if self.custody == self.asset_pair.first().address()
            || self.custody == self.asset_pair.second().address()
        {
            return Err(AmmError::InvalidConfiguration(
                "custody account must differ from asset addresses",
            ));
        }
        Ok(())
    }

    /// The traded assets.
    #[must_use]
    pub const fn asset_pair(&self) -> &AssetPair {
        &self.asset_pair
    }

    /// The pool's custody account.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }

    /// The swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// The first-deposit share divisor.
    #[must_use]
    pub const fn share_precision(&self) -> u128 {
        self.share_precision
    }
}
