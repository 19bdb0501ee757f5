//! Fixed-point price of one asset in terms of the other.

use core::fmt;

use super::Amount;
use crate::error::PoolError;
use crate::math::{mul_div, Rounding};

/// A price expressed as a fixed-point number scaled by [`Price::SCALE`].
///
/// One whole unit of the priced asset is worth `get() / SCALE` units of
/// the counter asset. The representation is pure integer so that price
/// projections stay exact and deterministic like the rest of the engine.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, Price};
///
/// // 2000 counter units per 1000 base units = 2.0
/// let price = Price::from_reserves(Amount::new(2_000), Amount::new(1_000)).expect("priced");
/// assert_eq!(price.get(), 2 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Price(u128);

impl Price {
    /// Fixed-point scaling factor (`1e18`).
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Zero price, the degenerate value for an empty pool.
    pub const ZERO: Self = Self(0);

    /// Creates a `Price` from an already-scaled raw value.
    pub const fn new(scaled: u128) -> Self {
        Self(scaled)
    }

    /// Returns the underlying scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Prices one unit of the base asset in the counter asset:
    /// `counter_reserve * SCALE / base_reserve`, truncated.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if `base_reserve` is zero.
    /// - [`PoolError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn from_reserves(counter_reserve: Amount, base_reserve: Amount) -> crate::error::Result<Self> {
        if base_reserve.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let scaled = mul_div(
            counter_reserve.get(),
            Self::SCALE,
            base_reserve.get(),
            Rounding::Down,
        )
        .ok_or(PoolError::Overflow("scaled price exceeds u128"))?;
        Ok(Self(scaled))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
