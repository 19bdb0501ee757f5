//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use xyk_pool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositReceipt, Price, Shares, SwapReceipt, Timestamp,
    WithdrawalReceipt,
};

// Re-export the pool aggregate and its projections
pub use crate::pool::{Pool, PoolState, PoolSummary, PositionValue, MINIMUM_LIQUIDITY};

// Re-export the share ledger
pub use crate::ledger::ShareLedger;

// Re-export collaborator traits and ready-made implementations
pub use crate::traits::{AssetTransfer, Clock, FixedClock, NoopTransfer, SystemClock, TransferError};

// Re-export error types
pub use crate::error::{PoolError, Result};
