//! Caller identity and clock of one pool operation.

use super::{Address, Timestamp};

/// The environment of a single pool call: who is calling and when.
///
/// Supplied by the sequential processor the pool runs on, the way a
/// transaction carries its sender and block time.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, CallContext, Timestamp};
///
/// let ctx = CallContext::new(Address::from_bytes([5u8; 32]), Timestamp::from_secs(1_700_000_000));
/// assert_eq!(ctx.timestamp().as_secs(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: Address,
    timestamp: Timestamp,
}

impl CallContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(caller: Address, timestamp: Timestamp) -> Self {
        Self { caller, timestamp }
    }

    /// The account performing the operation.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// The time of the enclosing operation.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
