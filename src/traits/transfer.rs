//! Asset settlement collaborator.
//!
//! The pool never holds real balances; an external ledger does. Every
//! mutating operation asks that ledger to move assets through this trait
//! and treats any failure as an abort signal: the pool rolls its own
//! state back in full and surfaces
//! [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed).
//!
//! Implementations are untrusted from the pool's point of view. The pool
//! commits its internal state before calling them and guards against
//! re-entry, so a hostile implementation can never observe or exploit a
//! half-applied transition.

use core::fmt;

use crate::domain::{AccountId, Amount, AssetId};

/// Failure reported by a settlement collaborator.
///
/// Carries a static reason string; the pool propagates it verbatim
/// inside [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferError(&'static str);

impl TransferError {
    /// Creates a new `TransferError` with the given reason.
    #[must_use]
    pub const fn new(reason: &'static str) -> Self {
        Self(reason)
    }

    /// Returns the failure reason.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transfer failed: {}", self.0)
    }
}

/// Moves assets between external custody and the pool's custody.
///
/// Both methods must be synchronous and must report the true outcome;
/// the pool checks every result and never assumes silent success. When
/// one leg of a two-leg settlement fails after the other succeeded,
/// unwinding the completed leg is the implementation's responsibility —
/// the pool has already rolled back its own accounting.
pub trait AssetTransfer {
    /// Pulls `amount` of `asset` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError`] if the external ledger cannot or will
    /// not perform the movement.
    fn move_in(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Pushes `amount` of `asset` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError`] if the external ledger cannot or will
    /// not perform the movement.
    fn move_out(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}

/// A settlement collaborator that accepts every movement.
///
/// Useful for simulations and doctests where balances are tracked
/// elsewhere or not at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopTransfer;

impl AssetTransfer for NoopTransfer {
    fn move_in(
        &mut self,
        _asset: AssetId,
        _from: AccountId,
        _amount: Amount,
    ) -> Result<(), TransferError> {
        Ok(())
    }

    fn move_out(
        &mut self,
        _asset: AssetId,
        _to: AccountId,
        _amount: Amount,
    ) -> Result<(), TransferError> {
        Ok(())
    }
}
