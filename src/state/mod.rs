//! Mutable pool state: reserve counters and the share ledger.
//!
//! Both are owned exclusively by a pool.  They expose checked, staged
//! mutation so the pool can validate an entire operation before any of it
//! is applied.

mod reserves;
mod share_ledger;

pub use reserves::{ReserveDelta, Reserves};
pub use share_ledger::{ShareLedger, ShareUpdate};
