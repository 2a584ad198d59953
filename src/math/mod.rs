//! Overflow-safe arithmetic for pool accounting.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning helpers on the domain
//! newtypes into [`AmmError`](crate::error::AmmError)s, and [`mul_div`]
//! computes ratio products in 256 bits.  Division always takes an explicit
//! [`Rounding`](crate::domain::Rounding).

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use ethnum::U256;
pub use mul_div::{mul_div, mul_div_amount, wide_mul};
