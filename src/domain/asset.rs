//! Asset identity.

use super::{Address, Amount, Decimals};

/// One of the fungible assets a pool trades.
///
/// An asset is identified by the address of its ledger plus the number of
/// fractional digits of its base unit.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, Asset, Decimals};
///
/// let dapp = Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX);
/// assert_eq!(dapp.whole(100_000).get(), 100_000 * 10u128.pow(18));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    address: Address,
    decimals: Decimals,
}

impl Asset {
    /// Creates a new `Asset`.
    #[must_use]
    pub const fn new(address: Address, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the ledger address of the asset.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the fractional digits of the base unit.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Converts whole units of this asset into base units.
    pub const fn whole(&self, units: u64) -> Amount {
        self.decimals.to_base_units(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let addr = Address::from_bytes([3u8; 32]);
        let asset = Asset::new(addr, Decimals::ZERO);
        assert_eq!(asset.address(), addr);
        assert_eq!(asset.decimals(), Decimals::ZERO);
        assert_eq!(asset.whole(7), Amount::new(7));
    }

    #[test]
    fn equality_requires_both_fields() {
        let addr = Address::from_bytes([3u8; 32]);
        assert_ne!(Asset::new(addr, Decimals::ZERO), Asset::new(addr, Decimals::MAX));
    }
}
