//! Deposit and withdrawal transitions.
//!
//! Share issuance follows the constant-product convention: the first
//! deposit is priced by the geometric mean of the two amounts, every
//! later deposit by the weaker side of the proportional ratio, and all
//! division truncates towards the pool.
//!
//! # Genesis lock
//!
//! The first deposit permanently locks [`MINIMUM_LIQUIDITY`] shares in
//! the zero-account sink. Whoever seeds the pool pays that fixed cost
//! once, which keeps the share price of a near-empty pool from being
//! manipulated into absurd territory.

use crate::domain::{AccountId, Amount, Shares};
use crate::error::PoolError;
use crate::math::{mul_div, sqrt_product, Rounding};

use super::state::PoolState;

/// Shares minted to the reserved sink at genesis and never redeemable.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// Applies a deposit to `state` and returns the shares credited to the
/// depositor.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if either amount is zero.
/// - [`PoolError::InsufficientInitialLiquidity`] if a genesis deposit
///   does not clear the lock.
/// - [`PoolError::InvalidReserves`] if shares exist but a reserve is
///   empty.
/// - [`PoolError::InsufficientSharesMinted`] if a proportional deposit
///   truncates to zero shares.
/// - [`PoolError::Overflow`] if supply or reserves would exceed `u128`.
pub(crate) fn deposit(
    state: &mut PoolState,
    depositor: AccountId,
    amount_a: Amount,
    amount_b: Amount,
) -> crate::error::Result<Shares> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(PoolError::ZeroAmount("deposit requires both assets"));
    }

    let minted = if state.total_shares().is_zero() {
        genesis_shares(amount_a, amount_b)?
    } else {
        proportional_shares(state, amount_a, amount_b)?
    };

    if state.total_shares().is_zero() {
        state.mint(AccountId::zero(), MINIMUM_LIQUIDITY)?;
    }
    state.mint(depositor, minted)?;
    state.credit_reserves(amount_a, amount_b)?;
    Ok(minted)
}

/// First deposit: `floor(sqrt(amount_a * amount_b))` raw shares, minus
/// the permanently locked minimum.
fn genesis_shares(amount_a: Amount, amount_b: Amount) -> crate::error::Result<Shares> {
    let raw = Shares::new(sqrt_product(amount_a.get(), amount_b.get()));
    if raw <= MINIMUM_LIQUIDITY {
        return Err(PoolError::InsufficientInitialLiquidity {
            minted: raw,
            minimum: MINIMUM_LIQUIDITY,
        });
    }
    raw.checked_sub(&MINIMUM_LIQUIDITY)
        .ok_or(PoolError::Overflow("genesis share underflow"))
}

/// Later deposits: `min(amount_a * total / reserve_a,
/// amount_b * total / reserve_b)`, truncated. The weaker side determines
/// the mint; excess on the other side is absorbed into reserves without
/// credit.
fn proportional_shares(
    state: &PoolState,
    amount_a: Amount,
    amount_b: Amount,
) -> crate::error::Result<Shares> {
    let (reserve_a, reserve_b) = (state.reserve_a(), state.reserve_b());
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::InvalidReserves(
            "a reserve is empty while shares exist",
        ));
    }

    let total = state.total_shares().get();
    let by_a = mul_div(amount_a.get(), total, reserve_a.get(), Rounding::Down)
        .ok_or(PoolError::Overflow("share issue against first reserve"))?;
    let by_b = mul_div(amount_b.get(), total, reserve_b.get(), Rounding::Down)
        .ok_or(PoolError::Overflow("share issue against second reserve"))?;

    let minted = Shares::new(by_a.min(by_b));
    if minted.is_zero() {
        return Err(PoolError::InsufficientSharesMinted);
    }
    Ok(minted)
}

/// Applies a withdrawal to `state` and returns the redeemed amounts.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if `shares` is zero.
/// - [`PoolError::SharesLocked`] if the withdrawer is the reserved sink.
/// - [`PoolError::InsufficientSharesOwned`] if the balance is too small.
/// - [`PoolError::InsufficientSharesBurned`] if either redeemed amount
///   truncates to zero.
pub(crate) fn withdraw(
    state: &mut PoolState,
    withdrawer: AccountId,
    shares: Shares,
) -> crate::error::Result<(Amount, Amount)> {
    if shares.is_zero() {
        return Err(PoolError::ZeroAmount("withdrawal requires shares"));
    }
    if withdrawer.is_zero() {
        return Err(PoolError::SharesLocked);
    }
    let available = state.ledger().balance_of(&withdrawer);
    if available < shares {
        return Err(PoolError::InsufficientSharesOwned {
            requested: shares,
            available,
        });
    }

    let total = state.total_shares().get();
    let amount_a = Amount::new(
        mul_div(shares.get(), state.reserve_a().get(), total, Rounding::Down)
            .ok_or(PoolError::Overflow("redemption against first reserve"))?,
    );
    let amount_b = Amount::new(
        mul_div(shares.get(), state.reserve_b().get(), total, Rounding::Down)
            .ok_or(PoolError::Overflow("redemption against second reserve"))?,
    );
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(PoolError::InsufficientSharesBurned);
    }

    state.burn(&withdrawer, shares)?;
    state.debit_reserves(amount_a, amount_b)?;
    Ok((amount_a, amount_b))
}
