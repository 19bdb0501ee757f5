//! Reentrancy protection for mutating operations.
//!
//! The settlement collaborator runs untrusted code in the middle of
//! every mutating operation. This guard is a two-state machine that
//! every such operation enters on arrival and exits on every return
//! path, so a collaborator that calls back into the pool is refused
//! before it can touch anything.

use crate::error::PoolError;

/// Whether an operation is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Idle,
    InOperation,
}

/// Serializes mutating operations and refuses re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReentrancyGuard {
    state: GuardState,
}

impl ReentrancyGuard {
    /// Creates a guard in the idle state.
    pub(crate) const fn new() -> Self {
        Self {
            state: GuardState::Idle,
        }
    }

    /// Marks an operation as in flight.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ReentrantCall`] if an operation is already
    /// in flight.
    pub(crate) fn enter(&mut self) -> crate::error::Result<()> {
        match self.state {
            GuardState::Idle => {
                self.state = GuardState::InOperation;
                Ok(())
            }
            GuardState::InOperation => Err(PoolError::ReentrantCall),
        }
    }

    /// Returns the guard to idle. Called on success and failure alike.
    pub(crate) fn exit(&mut self) {
        self.state = GuardState::Idle;
    }

    /// Returns `true` if no operation is in flight.
    pub(crate) const fn is_idle(&self) -> bool {
        matches!(self.state, GuardState::Idle)
    }
}
