//! Construction of a pool from validated configuration.

use crate::error::AmmError;

/// Builds a pool from its configuration.
///
/// Implementations validate every configuration invariant; a successfully
/// constructed pool is in a valid, empty initial state.
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a parameter is out of range.
    /// - [`AmmError::InvalidFee`] if the fee rate is unusable.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
