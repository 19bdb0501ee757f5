//! Read-only projections over pool state.
//!
//! Everything here takes `&self` and mutates nothing, so projections may
//! run concurrently with each other and always observe one consistent
//! snapshot. Quotes replay the exact pricing functions of the swap
//! engine, so a quote always equals what an immediately-following swap
//! with the same inputs would produce.

use crate::domain::{AccountId, Amount, AssetId, Price, Shares};
use crate::error::PoolError;
use crate::math::{mul_div, Rounding};

use super::swap;
use super::Pool;

/// A snapshot of the pool's externally relevant numbers.
///
/// Produced by [`Pool::summary`]. For an empty pool every field is zero;
/// the summary never fails on missing liquidity, unlike
/// [`Pool::price_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolSummary {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    price_a_in_b: Price,
    price_b_in_a: Price,
}

impl PoolSummary {
    /// Returns the reserve of the first asset.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of the second asset.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the price of the first asset in units of the second.
    pub const fn price_a_in_b(&self) -> Price {
        self.price_a_in_b
    }

    /// Returns the price of the second asset in units of the first.
    pub const fn price_b_in_a(&self) -> Price {
        self.price_b_in_a
    }
}

/// A holder's stake and its current redemption value.
///
/// Produced by [`Pool::position_value`]. Zero-valued when the holder has
/// no shares or the pool is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionValue {
    shares: Shares,
    amount_a: Amount,
    amount_b: Amount,
}

impl PositionValue {
    /// Returns the holder's share balance.
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns the first-asset value the shares would currently redeem.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the second-asset value the shares would currently redeem.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl<T, C> Pool<T, C> {
    /// Returns both reserves as `(first, second)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.state().reserve_a(), self.state().reserve_b())
    }

    /// Returns the outstanding share supply, locked shares included.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.state().total_shares()
    }

    /// Returns the share balance of `holder`, zero if absent.
    #[must_use]
    pub fn shares_of(&self, holder: &AccountId) -> Shares {
        self.state().ledger().balance_of(holder)
    }

    /// Quotes the output of an exact-input swap without executing it.
    ///
    /// Replays the swap engine's pricing function against current
    /// reserves, so the result equals the output of an immediately
    /// following [`Pool::swap`] with the same inputs.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InvalidAsset`] if `asset_in` is foreign.
    /// - [`PoolError::NoLiquidity`] if either reserve is empty.
    pub fn quote_output(&self, asset_in: &AssetId, amount_in: Amount) -> crate::error::Result<Amount> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("quote requires a positive input"));
        }
        let side_in = self.side_of(asset_in)?;
        let reserve_in = self.state().reserve(side_in);
        let reserve_out = self.state().reserve(side_in.other());
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::NoLiquidity);
        }
        swap::output_for_input(amount_in, reserve_in, reserve_out)
    }

    /// Quotes the smallest input that yields at least `amount_out` of
    /// `asset_out`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_out` is zero.
    /// - [`PoolError::InvalidAsset`] if `asset_out` is foreign.
    /// - [`PoolError::NoLiquidity`] if either reserve is empty.
    /// - [`PoolError::InsufficientLiquidity`] if `amount_out` would not
    ///   leave a positive output reserve behind.
    pub fn quote_input(&self, asset_out: &AssetId, amount_out: Amount) -> crate::error::Result<Amount> {
        if amount_out.is_zero() {
            return Err(PoolError::ZeroAmount("quote requires a positive output"));
        }
        let side_out = self.side_of(asset_out)?;
        let reserve_out = self.state().reserve(side_out);
        let reserve_in = self.state().reserve(side_out.other());
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::NoLiquidity);
        }
        swap::input_for_output(amount_out, reserve_in, reserve_out)
    }

    /// Prices one unit of `asset` in the counter asset, scaled by
    /// [`Price::SCALE`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if `asset` is foreign.
    /// - [`PoolError::NoLiquidity`] if either reserve is empty.
    /// - [`PoolError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn price_of(&self, asset: &AssetId) -> crate::error::Result<Price> {
        let side = self.side_of(asset)?;
        let base = self.state().reserve(side);
        let counter = self.state().reserve(side.other());
        if base.is_zero() || counter.is_zero() {
            return Err(PoolError::NoLiquidity);
        }
        Price::from_reserves(counter, base)
    }

    /// Produces a full snapshot: reserves, share supply, and both
    /// directional prices. All-zero for an empty pool instead of
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] only if a scaled price exceeds
    /// `u128`; missing liquidity is not an error here.
    pub fn summary(&self) -> crate::error::Result<PoolSummary> {
        let (reserve_a, reserve_b) = self.reserves();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Ok(PoolSummary::default());
        }
        Ok(PoolSummary {
            reserve_a,
            reserve_b,
            total_shares: self.total_shares(),
            price_a_in_b: Price::from_reserves(reserve_b, reserve_a)?,
            price_b_in_a: Price::from_reserves(reserve_a, reserve_b)?,
        })
    }

    /// Values a holder's stake at current reserves: the shares held and
    /// the amounts a full withdrawal would redeem right now. Zero-valued
    /// when the holder has no shares or the pool is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] only if the proportional value
    /// computation overflows, which a consistent state rules out.
    pub fn position_value(&self, holder: &AccountId) -> crate::error::Result<PositionValue> {
        let shares = self.shares_of(holder);
        let total = self.total_shares();
        if shares.is_zero() || total.is_zero() {
            return Ok(PositionValue::default());
        }
        let amount_a = mul_div(
            shares.get(),
            self.state().reserve_a().get(),
            total.get(),
            Rounding::Down,
        )
        .ok_or(PoolError::Overflow("position value against first reserve"))?;
        let amount_b = mul_div(
            shares.get(),
            self.state().reserve_b().get(),
            total.get(),
            Rounding::Down,
        )
        .ok_or(PoolError::Overflow("position value against second reserve"))?;
        Ok(PositionValue {
            shares,
            amount_a: Amount::new(amount_a),
            amount_b: Amount::new(amount_b),
        })
    }
}
