//! Value types shared by every part of the pool.
//!
//! Quantities, identities, rates and the records returned by pool
//! operations.  All are small `Copy` newtypes; the ones with invariants
//! validate them at construction.

mod address;
mod amount;
mod asset;
mod asset_pair;
mod basis_points;
mod context;
mod decimals;
mod fee_tier;
mod receipts;
mod rounding;
mod shares;
mod side;
mod swap_record;
mod timestamp;

pub use address::Address;
pub use amount::Amount;
pub use asset::Asset;
pub use asset_pair::AssetPair;
pub use basis_points::BasisPoints;
pub use context::CallContext;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use receipts::{Deposit, Withdrawal};
pub use rounding::Rounding;
pub use shares::Shares;
pub use side::Side;
pub use swap_record::SwapRecord;
pub use timestamp::Timestamp;
