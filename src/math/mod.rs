//! Exact integer arithmetic for pool calculations.
//!
//! Every formula in the engine multiplies before it divides, and the
//! products of two `u128` reserves do not fit in `u128`. This module
//! widens all such intermediates to 256 bits so no precision is ever
//! lost before the final truncating division, and every result is
//! range-checked back into `u128`.
//!
//! Division never happens without an explicit [`Rounding`] direction:
//! the engines round in the pool's favour, and that choice is what makes
//! the constant-product invariant provably non-decreasing.

mod rounding;
mod wide;

pub use rounding::Rounding;
pub use wide::{mul_div, sqrt_product};
