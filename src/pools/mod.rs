//! Pool implementations.
//!
//! | Pool | Invariant | Style |
//! |------|-----------|-------|
//! | [`ConstantProductPool`] | `x · y = k` | Uniswap V2 |

pub mod constant_product;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
