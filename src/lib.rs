//! # xyk-pool
//!
//! Two-asset constant-product liquidity pool engine with exact integer
//! pricing.
//!
//! This crate implements the accounting core of an `x · y = k` market:
//! participants deposit paired assets for proportional claim shares,
//! redeem shares for a proportional cut of the reserves, and exchange
//! one asset for the other at a reserve-determined price carrying a
//! 0.3% fee that accrues to share holders.
//!
//! Asset settlement, time, persistence, and notification plumbing stay
//! outside: settlement and time enter through the [`traits`]
//! collaborators, every completed operation returns a structured
//! receipt, and the engine itself is deterministic integer arithmetic
//! end to end.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xyk-pool = "0.1"
//! ```
//!
//! ## Create a pool, deposit, and swap
//!
//! ```rust
//! use xyk_pool::domain::{AccountId, Amount, AssetId, AssetPair, Timestamp};
//! use xyk_pool::pool::Pool;
//! use xyk_pool::traits::{FixedClock, NoopTransfer};
//!
//! // 1. Identify the two assets
//! let pair = AssetPair::new(
//!     AssetId::from_bytes([1u8; 32]),
//!     AssetId::from_bytes([2u8; 32]),
//! )
//! .expect("distinct assets");
//!
//! // 2. Build the pool with its collaborators
//! let clock = FixedClock::new(Timestamp::new(1_700_000_000));
//! let mut pool = Pool::with_clock(pair, NoopTransfer, clock);
//!
//! // 3. Seed it: the first deposit is priced by the geometric mean
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let receipt = pool
//!     .deposit(alice, Amount::new(1_000_000), Amount::new(1_000_000))
//!     .expect("genesis deposit");
//! assert_eq!(receipt.shares_minted().get(), 999_000);
//!
//! // 4. Trade against it
//! let deadline = Timestamp::new(1_700_000_060);
//! let swap = pool
//!     .swap(alice, pair.first(), Amount::new(1_000), Amount::new(1), deadline)
//!     .expect("swap succeeded");
//! assert!(swap.amount_out().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  deposit / withdraw / swap, quotes and views
//! └──────┬──────┘
//!        │ &mut self (serialized) · &self (concurrent reads)
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  reentrancy guard, checkpoint/rollback, receipts
//! └──────┬──────┘
//!        │ validated transitions
//!        ▼
//! ┌─────────────┐
//! │   Engines    │  share issuance, fee-inclusive pricing, projections
//! └──────┬──────┘
//!        │ checked u128 + 256-bit intermediates
//!        ▼
//! ┌─────────────┐
//! │  PoolState   │  reserves, share supply, holder ledger
//! └─────────────┘
//! ```
//!
//! Settlement runs *after* every state transition commits and a failure
//! restores the pre-operation checkpoint, so untrusted transfer code can
//! never observe or exploit a half-applied operation.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), receipts, etc. |
//! | [`pool`] | [`Pool`](pool::Pool) aggregate, [`PoolState`](pool::PoolState), engines, and read-only views |
//! | [`ledger`] | [`ShareLedger`](ledger::ShareLedger) per-holder share accounting |
//! | [`traits`] | Collaborator seams: [`AssetTransfer`](traits::AssetTransfer), [`Clock`](traits::Clock) |
//! | [`math`] | 256-bit widened `mul_div` and integer square root |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
