//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the core value types that model the pool domain:
//! assets, holders, amounts, shares, prices, timestamps, and operation
//! receipts. All types are newtypes with validated constructors so that
//! invalid values cannot reach the engines.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod price;
mod receipt;
mod shares;
mod timestamp;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use price::Price;
pub use receipt::{DepositReceipt, SwapReceipt, WithdrawalReceipt};
pub use shares::Shares;
pub use timestamp::Timestamp;
