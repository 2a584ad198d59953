//! Chain-agnostic account and asset identity.

use core::fmt;

/// A 32-byte identity for an account, a provider, a trader, or an asset
/// contract.
///
/// All byte sequences are valid, so construction is infallible.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Address;
///
/// let alice = Address::from_bytes([7u8; 32]);
/// assert_eq!(alice.as_bytes(), [7u8; 32]);
/// assert_ne!(alice, Address::zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Short hex form: the first four bytes, enough to tell accounts apart in logs.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}
