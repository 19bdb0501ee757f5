//! 256-bit widened multiply-divide and integer square root.

use primitive_types::U256;

use super::Rounding;

/// Computes `a * b / divisor` with a 256-bit intermediate product and an
/// explicit rounding direction.
///
/// The product of two `u128` values always fits in 256 bits, so the
/// multiplication itself cannot overflow; only the final quotient is
/// range-checked. Returns `None` if `divisor` is zero or the quotient
/// does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use xyk_pool::math::{mul_div, Rounding};
///
/// // u128::MAX * 2 exceeds u128, but the widened intermediate does not.
/// assert_eq!(
///     mul_div(u128::MAX, 2, 4, Rounding::Down),
///     Some(u128::MAX / 2),
/// );
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let product = U256::from(a) * U256::from(b);
    let (quotient, remainder) = product.div_mod(U256::from(divisor));
    let quotient = match rounding {
        Rounding::Down => quotient,
        Rounding::Up => {
            if remainder.is_zero() {
                quotient
            } else {
                // product < U256::MAX, so the bumped quotient cannot wrap.
                quotient + U256::one()
            }
        }
    };
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(quotient.as_u128())
}

/// Computes `floor(sqrt(a * b))` over the full 256-bit product.
///
/// Newton's method on `U256`. The result always fits in `u128` because
/// `a * b <= (2^128 - 1)^2`.
///
/// # Examples
///
/// ```
/// use xyk_pool::math::sqrt_product;
///
/// assert_eq!(sqrt_product(4, 9), 6);
/// assert_eq!(sqrt_product(2, 3), 2); // floor(sqrt(6))
/// ```
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    let n = U256::from(a) * U256::from(b);
    if n.is_zero() {
        return 0;
    }
    let mut x = n;
    // n < U256::MAX, so n + 1 cannot wrap.
    let mut y = (n + U256::one()) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x.as_u128()
}
