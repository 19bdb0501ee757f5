//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every failure is synchronous and operation-aborting: the
//! pool either commits an operation in full or leaves its state untouched.
//! Variants carry the structured data a caller needs to react — the
//! computed output on a slippage failure, both clock readings on an
//! expired deadline — instead of free-text messages.
//!
//! There is no retry machinery anywhere in the crate: retrying a financial
//! operation against moved prices or a passed deadline is unsafe, so every
//! error is surfaced directly to the caller.

use core::fmt;

use crate::domain::{Amount, Shares, Timestamp};

/// Convenience alias used by every fallible operation in the crate.
///
/// The error type defaults to [`PoolError`] but stays overridable so the
/// alias can shadow `std`'s `Result` in glob imports without breaking
/// two-parameter uses.
pub type Result<T, E = PoolError> = core::result::Result<T, E>;

/// Closed set of failures the pool engine can produce.
///
/// # Examples
///
/// ```
/// use xyk_pool::error::PoolError;
///
/// let err = PoolError::InsufficientLiquidity;
/// assert_eq!(err.to_string(), "insufficient liquidity in pool reserves");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// An amount or share quantity that must be strictly positive was zero.
    ZeroAmount(&'static str),
    /// Pool reserves are in a state the operation cannot price against.
    InvalidReserves(&'static str),
    /// A first deposit did not clear the permanently locked minimum.
    InsufficientInitialLiquidity {
        /// Shares the geometric mean of the deposit would issue.
        minted: Shares,
        /// The permanently locked minimum that must be exceeded.
        minimum: Shares,
    },
    /// A proportional deposit was too small to mint a single share.
    InsufficientSharesMinted,
    /// The caller asked to burn more shares than they hold.
    InsufficientSharesOwned {
        /// Shares the caller asked to burn.
        requested: Shares,
        /// Shares the caller actually holds.
        available: Shares,
    },
    /// A withdrawal would redeem zero units of at least one asset.
    InsufficientSharesBurned,
    /// The reserved sink's genesis lock can never be redeemed.
    SharesLocked,
    /// The asset is not one of the pool's pair.
    InvalidAsset(&'static str),
    /// One or both reserves are empty, so the swap cannot be priced.
    InsufficientLiquidity,
    /// The computed output fell below the caller's minimum.
    SlippageExceeded {
        /// Output the pricing formula actually produced.
        amount_out: Amount,
        /// Minimum the caller was willing to accept.
        min_amount_out: Amount,
    },
    /// The pricing formula truncated the output to zero.
    InsufficientOutput,
    /// The operation arrived after its deadline.
    TransactionExpired {
        /// Clock reading at operation entry.
        now: Timestamp,
        /// Deadline supplied by the caller.
        deadline: Timestamp,
    },
    /// A price query against an empty pool.
    NoLiquidity,
    /// A mutating operation was invoked while another is in flight.
    ReentrantCall,
    /// The settlement collaborator rejected a transfer; state was rolled back.
    TransferFailed(&'static str),
    /// An intermediate value exceeded the representable range.
    Overflow(&'static str),
    /// Division by zero in an arithmetic helper.
    DivisionByZero,
    /// A consistency check found state that violates a pool invariant.
    InconsistentState(&'static str),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAmount(ctx) => write!(f, "zero amount: {ctx}"),
            Self::InvalidReserves(ctx) => write!(f, "invalid reserves: {ctx}"),
            Self::InsufficientInitialLiquidity { minted, minimum } => write!(
                f,
                "initial deposit mints {minted} shares, must exceed locked minimum {minimum}"
            ),
            Self::InsufficientSharesMinted => {
                write!(f, "deposit too small to mint any shares")
            }
            Self::InsufficientSharesOwned {
                requested,
                available,
            } => write!(
                f,
                "cannot burn {requested} shares, caller holds {available}"
            ),
            Self::InsufficientSharesBurned => {
                write!(f, "burning these shares would redeem zero of an asset")
            }
            Self::SharesLocked => write!(f, "genesis lock shares are not redeemable"),
            Self::InvalidAsset(ctx) => write!(f, "invalid asset: {ctx}"),
            Self::InsufficientLiquidity => {
                write!(f, "insufficient liquidity in pool reserves")
            }
            Self::SlippageExceeded {
                amount_out,
                min_amount_out,
            } => write!(
                f,
                "output {amount_out} below requested minimum {min_amount_out}"
            ),
            Self::InsufficientOutput => write!(f, "swap output truncated to zero"),
            Self::TransactionExpired { now, deadline } => {
                write!(f, "deadline {deadline} passed at {now}")
            }
            Self::NoLiquidity => write!(f, "pool holds no liquidity"),
            Self::ReentrantCall => write!(f, "reentrant call into an in-flight operation"),
            Self::TransferFailed(ctx) => write!(f, "asset transfer failed: {ctx}"),
            Self::Overflow(ctx) => write!(f, "arithmetic overflow: {ctx}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InconsistentState(ctx) => write!(f, "inconsistent pool state: {ctx}"),
        }
    }
}

impl std::error::Error for PoolError {}
