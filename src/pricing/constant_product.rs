//! Constant-product (`x · y = k`) quote math.
//!
//! Pure functions over a [`Reserves`] snapshot.  Nothing here mutates
//! state; the pool calls these to price an operation, then commits the
//! result itself.
//!
//! # Swap (selling `net` units of X for Y)
//!
//! ```text
//! fee            = ceil(amount_in × fee_bps / 10 000)
//! net            = amount_in − fee
//! y_after        = ceil(x × y / (x + net))
//! amount_out     = y − y_after
//! ```
//!
//! Rounding the post-swap reserve *up* is what truncates the output in the
//! pool's favour: the trader never receives a fractional unit, and
//! `(x + amount_in) × y_after ≥ x × y` holds exactly.  Because
//! `y_after ≥ 1` whenever `x, y > 0`, the output reserve is never drained.

use tracing::trace;

use super::SwapQuote;
use crate::domain::{Amount, FeeTier, Rounding, Shares, Side};
use crate::error::AmmError;
use crate::math::{mul_div, mul_div_amount, CheckedArithmetic};
use crate::state::Reserves;

/// Amount of asset B that matches `amount_a` at the current price.
///
/// `floor(amount_a × reserve_b / reserve_a)`.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if `reserve_a` is zero; an empty pool has no
///   price and accepts any first pair.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote_deposit(reserves: &Reserves, amount_a: Amount) -> Result<Amount, AmmError> {
    if reserves.reserve_a().is_zero() {
        return Err(AmmError::PoolEmpty);
    }
    let amount_b = mul_div_amount(
        amount_a,
        reserves.reserve_b(),
        reserves.reserve_a(),
        Rounding::Down,
    )?;
    trace!(%amount_a, %amount_b, "quote deposit");
    Ok(amount_b)
}

/// Amount of asset A that matches `amount_b` at the current price.
///
/// `floor(amount_b × reserve_a / reserve_b)`.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if `reserve_b` is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote_deposit_for_b(reserves: &Reserves, amount_b: Amount) -> Result<Amount, AmmError> {
    if reserves.reserve_b().is_zero() {
        return Err(AmmError::PoolEmpty);
    }
    let amount_a = mul_div_amount(
        amount_b,
        reserves.reserve_a(),
        reserves.reserve_b(),
        Rounding::Down,
    )?;
    trace!(%amount_b, %amount_a, "quote deposit for b");
    Ok(amount_a)
}

/// Prices selling `amount_in` of the `side_in` asset.
///
/// A zero input yields a zero quote on any pool, empty or not.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if either reserve is zero and `amount_in > 0`.
/// - [`AmmError::Overflow`] if `x + net` exceeds `u128`.
pub fn quote_swap(
    reserves: &Reserves,
    side_in: Side,
    amount_in: Amount,
    fee_tier: FeeTier,
) -> Result<SwapQuote, AmmError> {
    if amount_in.is_zero() {
        return Ok(SwapQuote::zero(side_in));
    }
    if reserves.is_empty() {
        return Err(AmmError::PoolEmpty);
    }
    let (reserve_in, reserve_out) = reserves.oriented(side_in);

    let fee = fee_tier.fee_for(amount_in)?;
    let net = amount_in.safe_sub(&fee)?;

    let amount_out = if net.is_zero() {
        Amount::ZERO
    } else {
        let denominator = reserve_in
            .checked_add(&net)
            .ok_or(AmmError::Overflow("swap denominator overflow"))?;
        let reserve_out_after = Amount::new(mul_div(
            reserve_in.get(),
            reserve_out.get(),
            denominator.get(),
            Rounding::Up,
        )?);
        reserve_out.safe_sub(&reserve_out_after)?
    };

    let quote = SwapQuote::new(side_in, amount_in, fee, amount_out);
    trace!(%quote, "quote swap");
    Ok(quote)
}

/// Prices selling `amount_in` of asset A for asset B.
///
/// # Errors
///
/// See [`quote_swap`].
pub fn quote_swap_a_for_b(
    reserves: &Reserves,
    amount_in: Amount,
    fee_tier: FeeTier,
) -> Result<SwapQuote, AmmError> {
    quote_swap(reserves, Side::A, amount_in, fee_tier)
}

/// Prices selling `amount_in` of asset B for asset A.
///
/// # Errors
///
/// See [`quote_swap`].
pub fn quote_swap_b_for_a(
    reserves: &Reserves,
    amount_in: Amount,
    fee_tier: FeeTier,
) -> Result<SwapQuote, AmmError> {
    quote_swap(reserves, Side::B, amount_in, fee_tier)
}

/// Amounts of A and B redeemed by burning `shares` out of `total_shares`.
///
/// `floor(reserve × shares / total)` on each side.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if `total_shares` is zero.
/// - [`AmmError::InsufficientShares`] if `shares > total_shares`.
pub fn quote_withdraw(
    reserves: &Reserves,
    total_shares: Shares,
    shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    if total_shares.is_zero() {
        return Err(AmmError::PoolEmpty);
    }
    if shares > total_shares {
        return Err(AmmError::InsufficientShares {
            requested: shares,
            available: total_shares,
        });
    }
    let amount_a = Amount::new(mul_div(
        reserves.reserve_a().get(),
        shares.get(),
        total_shares.get(),
        Rounding::Down,
    )?);
    let amount_b = Amount::new(mul_div(
        reserves.reserve_b().get(),
        shares.get(),
        total_shares.get(),
        Rounding::Down,
    )?);
    Ok((amount_a, amount_b))
}

/// Shares minted by the first deposit: `floor(amount_a / precision)`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `precision` is zero.
pub fn initial_shares(amount_a: Amount, precision: u128) -> Result<Shares, AmmError> {
    amount_a
        .checked_div(&Amount::new(precision), Rounding::Down)
        .map(|a| Shares::new(a.get()))
        .ok_or(AmmError::DivisionByZero)
}

/// Shares minted by a later deposit: `floor(total × amount_a / reserve_a)`.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if `reserve_a` is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn proportional_shares(
    reserves: &Reserves,
    total_shares: Shares,
    amount_a: Amount,
) -> Result<Shares, AmmError> {
    if reserves.reserve_a().is_zero() {
        return Err(AmmError::PoolEmpty);
    }
    mul_div(
        total_shares.get(),
        amount_a.get(),
        reserves.reserve_a().get(),
        Rounding::Down,
    )
    .map(Shares::new)
}
