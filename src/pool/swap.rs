//! Fee-inclusive exchange transition.
//!
//! The pool charges 0.3% on the way in: only 997/1000 of the input
//! participates in pricing, but the full input lands in the reserve.
//! The output is the closed-form solution of
//!
//! ```text
//! (reserve_in + amount_in * 997/1000) * (reserve_out - amount_out)
//!     = reserve_in * reserve_out
//! ```
//!
//! solved for `amount_out` and truncated towards the pool. Truncation
//! plus the retained fee is exactly what keeps the product of the
//! reserves from ever decreasing across a swap.

use primitive_types::U256;

use crate::domain::Amount;
use crate::error::PoolError;

use super::state::{AssetSide, PoolState};

/// Fee-retaining input multiplier: 997/1000 of the input is priced.
pub const FEE_NUMERATOR: u128 = 997;

/// Fee denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Computes the exact-input swap output against the given reserves:
/// `floor(in * 997 * reserve_out / (reserve_in * 1000 + in * 997))`.
///
/// Pure pricing with 256-bit intermediates; both the swap transition and
/// the read-only quote call this, so a quote can never drift from the
/// execution it predicts.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if the widened numerator exceeds 256
/// bits, which requires both the input and the output reserve to be near
/// `u128::MAX`.
pub(crate) fn output_for_input(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> crate::error::Result<Amount> {
    let in_with_fee = U256::from(amount_in.get()) * U256::from(FEE_NUMERATOR);
    let numerator = in_with_fee
        .checked_mul(U256::from(reserve_out.get()))
        .ok_or(PoolError::Overflow("swap numerator exceeds 256 bits"))?;
    let denominator = U256::from(reserve_in.get()) * U256::from(FEE_DENOMINATOR) + in_with_fee;
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let amount_out = numerator / denominator;
    // denominator > in_with_fee, so amount_out < reserve_out and fits u128.
    Ok(Amount::new(amount_out.as_u128()))
}

/// Computes the exact-output inverse: the smallest input whose swap
/// yields at least `amount_out`. Quote-only; the swap transition itself
/// is always exact-input.
///
/// `floor(reserve_in * amount_out * 1000 / ((reserve_out - amount_out) * 997)) + 1`
///
/// # Errors
///
/// - [`PoolError::InsufficientLiquidity`] if `amount_out` does not leave
///   a positive output reserve behind.
/// - [`PoolError::Overflow`] if the widened numerator exceeds 256 bits
///   or the required input exceeds `u128`.
pub(crate) fn input_for_output(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> crate::error::Result<Amount> {
    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }
    let numerator = U256::from(reserve_in.get())
        .checked_mul(U256::from(amount_out.get()))
        .and_then(|n| n.checked_mul(U256::from(FEE_DENOMINATOR)))
        .ok_or(PoolError::Overflow("inverse quote numerator exceeds 256 bits"))?;
    // reserve_out > amount_out, so the denominator is positive.
    let remaining = U256::from(reserve_out.get()) - U256::from(amount_out.get());
    let denominator = remaining * U256::from(FEE_NUMERATOR);
    let amount_in = numerator / denominator + U256::one();
    if amount_in > U256::from(u128::MAX) {
        return Err(PoolError::Overflow("required input exceeds u128"));
    }
    Ok(Amount::new(amount_in.as_u128()))
}

/// Applies an exact-input swap to `state` and returns the output amount.
///
/// The caller has already validated the deadline, the input amount, and
/// the asset identity; this transition validates liquidity, prices the
/// exchange, enforces the slippage bound, and moves the reserves.
///
/// # Errors
///
/// - [`PoolError::InsufficientLiquidity`] if either reserve is empty.
/// - [`PoolError::SlippageExceeded`] if the output is below
///   `min_amount_out`.
/// - [`PoolError::InsufficientOutput`] if the output truncates to zero.
pub(crate) fn swap(
    state: &mut PoolState,
    side_in: AssetSide,
    amount_in: Amount,
    min_amount_out: Amount,
) -> crate::error::Result<Amount> {
    let reserve_in = state.reserve(side_in);
    let reserve_out = state.reserve(side_in.other());
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }

    let amount_out = output_for_input(amount_in, reserve_in, reserve_out)?;
    if amount_out < min_amount_out {
        return Err(PoolError::SlippageExceeded {
            amount_out,
            min_amount_out,
        });
    }
    if amount_out.is_zero() {
        return Err(PoolError::InsufficientOutput);
    }

    state.credit_reserve(side_in, amount_in)?;
    state.debit_reserve(side_in.other(), amount_out)?;
    Ok(amount_out)
}
