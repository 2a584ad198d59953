//! Full-precision `a * b / d` for reserve-sized operands.
//!
//! Reserve products overflow `u128` long before the reserves themselves do
//! (two 18-decimal reserves of 10^5 whole units already reach 10^46), so
//! every product is formed in 256 bits and narrowed back after division.

use ethnum::U256;

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Computes `a * b / d` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128, AmmError> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::new(a) * U256::new(b);
    let divisor = U256::new(d);
    let mut quotient = product / divisor;
    if rounding.is_up() && product % divisor != U256::ZERO {
        quotient += U256::ONE;
    }
    narrow(quotient)
}

/// [`mul_div`] over [`Amount`] operands.
///
/// # Errors
///
/// Same as [`mul_div`].
pub fn mul_div_amount(
    a: Amount,
    b: Amount,
    d: Amount,
    rounding: Rounding,
) -> Result<Amount, AmmError> {
    mul_div(a.get(), b.get(), d.get(), rounding).map(Amount::new)
}

/// Exact product of two `u128` values.
#[must_use]
pub fn wide_mul(a: u128, b: u128) -> U256 {
    U256::new(a) * U256::new(b)
}

fn narrow(value: U256) -> Result<u128, AmmError> {
    if value > U256::new(u128::MAX) {
        return Err(AmmError::Overflow("mul_div result exceeds u128"));
    }
    Ok(value.as_u128())
}
