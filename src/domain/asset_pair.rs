//! The two assets a pool is bound to.

use super::{Asset, Side};
use crate::error::AmmError;

/// The ordered pair of assets traded by a pool.
///
/// The order is the one chosen at pool creation: the first asset is
/// [`Side::A`], the second [`Side::B`].  Shares minted on the first deposit
/// are derived from the asset-A amount, so the pair is deliberately not
/// re-sorted by address.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, Asset, AssetPair, Decimals, Side};
///
/// let a = Asset::new(Address::from_bytes([2u8; 32]), Decimals::MAX);
/// let b = Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX);
/// let pair = AssetPair::new(a, b).expect("distinct assets");
/// assert_eq!(pair.asset(Side::A), a);
/// assert_eq!(pair.side_of(&b).expect("member"), Side::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: Asset,
    asset_b: Asset,
}

impl AssetPair {
    /// Binds two assets into a pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both assets share an address.
    pub fn new(asset_a: Asset, asset_b: Asset) -> Result<Self, AmmError> {
        if asset_a.address() == asset_b.address() {
            return Err(AmmError::InvalidToken(
                "asset pair requires two distinct addresses",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns asset A.
    #[must_use]
    pub const fn first(&self) -> Asset {
        self.asset_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn second(&self) -> Asset {
        self.asset_b
    }

    /// Returns the asset on the given side.
    #[must_use]
    pub const fn asset(&self, side: Side) -> Asset {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Returns `true` if the asset belongs to the pair.
    #[must_use]
    pub fn contains(&self, asset: &Asset) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns the side an asset sits on.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `asset` is not in the pair.
    pub fn side_of(&self, asset: &Asset) -> Result<Side, AmmError> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(AmmError::InvalidToken("asset is not part of this pair"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Address, Decimals};

    fn asset(byte: u8) -> Asset {
        Asset::new(Address::from_bytes([byte; 32]), Decimals::MAX)
    }

    #[test]
    fn keeps_creation_order() {
        let Ok(pair) = AssetPair::new(asset(9), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), asset(9));
        assert_eq!(pair.second(), asset(1));
        assert_eq!(pair.asset(Side::B), asset(1));
    }

    #[test]
    fn same_address_rejected() {
        let a = asset(1);
        let b = Asset::new(a.address(), Decimals::ZERO);
        let Err(AmmError::InvalidToken(_)) = AssetPair::new(a, b) else {
            panic!("expected InvalidToken");
        };
    }

    #[test]
    fn membership() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
        assert_eq!(pair.side_of(&asset(1)), Ok(Side::A));
        assert!(pair.side_of(&asset(3)).is_err());
    }
}
