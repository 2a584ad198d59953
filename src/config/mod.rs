//! Declarative pool configuration.
//!
//! A configuration fully describes a pool's immutable parameters.  Pools
//! are built from it through [`FromConfig`](crate::traits::FromConfig),
//! which validates it first.

mod constant_product;

pub use constant_product::{ConstantProductConfig, DEFAULT_SHARE_PRECISION};
