//! The pool aggregate: state, engines, guard, and orchestration.
//!
//! [`Pool`] owns the accounting state and the two collaborators, and
//! drives every operation through the same sequence:
//!
//! 1. enter the reentrancy guard (refused if an operation is in flight),
//! 2. validate inputs against current state,
//! 3. apply the full state transition,
//! 4. request settlement from the transfer collaborator,
//! 5. commit on success, restore the pre-operation checkpoint on any
//!    failure, and exit the guard either way.
//!
//! State is therefore always consistent when untrusted settlement code
//! runs, and a failed operation is indistinguishable from one that never
//! happened. Read-only projections live in [`view`] and take `&self`,
//! so they can never observe a half-applied transition.

mod guard;
mod liquidity;
mod state;
mod swap;
mod view;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::MINIMUM_LIQUIDITY;
pub use state::PoolState;
pub use swap::{FEE_DENOMINATOR, FEE_NUMERATOR};
pub use view::{PoolSummary, PositionValue};

use guard::ReentrancyGuard;
use state::AssetSide;

use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositReceipt, Shares, SwapReceipt, Timestamp,
    WithdrawalReceipt,
};
use crate::error::PoolError;
use crate::traits::{AssetTransfer, Clock, SystemClock};

/// A two-asset constant-product liquidity pool.
///
/// Mutating operations (`deposit`, `withdraw`, `swap`) take `&mut self`
/// and run fully serialized; read-only projections take `&self`. The
/// settlement and time collaborators are owned by the pool and chosen at
/// construction.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{AccountId, Amount, AssetId, AssetPair, Timestamp};
/// use xyk_pool::pool::Pool;
/// use xyk_pool::traits::{FixedClock, NoopTransfer};
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// )
/// .expect("distinct assets");
/// let clock = FixedClock::new(Timestamp::new(1_700_000_000));
/// let mut pool = Pool::with_clock(pair, NoopTransfer, clock);
///
/// // Genesis deposit: sqrt(1e6 * 1e6) = 1e6 shares, 1000 locked.
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let receipt = pool
///     .deposit(alice, Amount::new(1_000_000), Amount::new(1_000_000))
///     .expect("genesis deposit");
/// assert_eq!(receipt.shares_minted().get(), 999_000);
///
/// // Swap 1000 of the first asset for the second.
/// let deadline = Timestamp::new(1_700_000_060);
/// let swap = pool
///     .swap(alice, pair.first(), Amount::new(1_000), Amount::new(1), deadline)
///     .expect("swap");
/// assert_eq!(swap.amount_out().get(), 996);
/// ```
#[derive(Debug, Clone)]
pub struct Pool<T, C = SystemClock> {
    assets: AssetPair,
    state: PoolState,
    guard: ReentrancyGuard,
    transfer: T,
    clock: C,
}

impl<T> Pool<T, SystemClock> {
    /// Creates an empty pool over `assets` using the system clock.
    pub fn new(assets: AssetPair, transfer: T) -> Self {
        Self::with_clock(assets, transfer, SystemClock)
    }
}

impl<T, C> Pool<T, C> {
    /// Creates an empty pool over `assets` with an explicit time source.
    pub fn with_clock(assets: AssetPair, transfer: T, clock: C) -> Self {
        Self {
            assets,
            state: PoolState::new(),
            guard: ReentrancyGuard::new(),
            transfer,
            clock,
        }
    }

    /// Returns the asset pair this pool trades.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Returns a read-only view of the accounting state.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    /// Returns the settlement collaborator.
    #[must_use]
    pub const fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Returns the time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Maps an asset identifier onto a reserve side.
    fn side_of(&self, asset: &AssetId) -> crate::error::Result<AssetSide> {
        if *asset == self.assets.first() {
            Ok(AssetSide::A)
        } else if *asset == self.assets.second() {
            Ok(AssetSide::B)
        } else {
            Err(PoolError::InvalidAsset("asset is not part of this pool"))
        }
    }
}

impl<T: AssetTransfer, C: Clock> Pool<T, C> {
    /// Deposits both assets and mints proportional shares to `depositor`.
    ///
    /// The first deposit is priced by the geometric mean of the two
    /// amounts and permanently locks [`MINIMUM_LIQUIDITY`] shares; later
    /// deposits mint by the weaker side of the proportional ratio.
    /// Settlement pulls both amounts from the depositor after the state
    /// transition commits; a settlement failure rolls everything back.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ReentrantCall`] if an operation is in flight.
    /// - Every engine failure from the deposit transition (zero amounts,
    ///   lock not cleared, dust deposits, overflow).
    /// - [`PoolError::TransferFailed`] if settlement is refused.
    pub fn deposit(
        &mut self,
        depositor: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<DepositReceipt> {
        self.guard.enter()?;
        let result = self.deposit_guarded(depositor, amount_a, amount_b);
        self.guard.exit();
        result
    }

    fn deposit_guarded(
        &mut self,
        depositor: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<DepositReceipt> {
        let checkpoint = self.state.clone();
        let outcome = self.deposit_apply(depositor, amount_a, amount_b);
        if outcome.is_err() {
            self.state = checkpoint;
        }
        outcome
    }

    fn deposit_apply(
        &mut self,
        depositor: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<DepositReceipt> {
        let minted = liquidity::deposit(&mut self.state, depositor, amount_a, amount_b)?;
        self.settle_in(self.assets.first(), depositor, amount_a)?;
        self.settle_in(self.assets.second(), depositor, amount_b)?;
        DepositReceipt::new(depositor, amount_a, amount_b, minted, self.clock.now())
    }

    /// Burns `shares` from `withdrawer` and redeems the proportional cut
    /// of both reserves.
    ///
    /// Settlement pushes both amounts back to the withdrawer after the
    /// state transition commits; a settlement failure rolls everything
    /// back.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ReentrantCall`] if an operation is in flight.
    /// - Every engine failure from the withdrawal transition (zero
    ///   shares, locked sink, insufficient balance, zero-value burn).
    /// - [`PoolError::TransferFailed`] if settlement is refused.
    pub fn withdraw(
        &mut self,
        withdrawer: AccountId,
        shares: Shares,
    ) -> crate::error::Result<WithdrawalReceipt> {
        self.guard.enter()?;
        let result = self.withdraw_guarded(withdrawer, shares);
        self.guard.exit();
        result
    }

    fn withdraw_guarded(
        &mut self,
        withdrawer: AccountId,
        shares: Shares,
    ) -> crate::error::Result<WithdrawalReceipt> {
        let checkpoint = self.state.clone();
        let outcome = self.withdraw_apply(withdrawer, shares);
        if outcome.is_err() {
            self.state = checkpoint;
        }
        outcome
    }

    fn withdraw_apply(
        &mut self,
        withdrawer: AccountId,
        shares: Shares,
    ) -> crate::error::Result<WithdrawalReceipt> {
        let (amount_a, amount_b) = liquidity::withdraw(&mut self.state, withdrawer, shares)?;
        self.settle_out(self.assets.first(), withdrawer, amount_a)?;
        self.settle_out(self.assets.second(), withdrawer, amount_b)?;
        WithdrawalReceipt::new(withdrawer, shares, amount_a, amount_b, self.clock.now())
    }

    /// Exchanges `amount_in` of `asset_in` for the counter asset at the
    /// fee-inclusive constant-product price.
    ///
    /// The deadline is checked first, before any other validation.
    /// Settlement pulls the input and pushes the output after the state
    /// transition commits; a settlement failure rolls everything back.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TransactionExpired`] if `deadline` has passed.
    /// - [`PoolError::ReentrantCall`] if an operation is in flight.
    /// - [`PoolError::ZeroAmount`] / [`PoolError::InvalidAsset`] on bad
    ///   inputs, and every engine failure from the swap transition
    ///   (empty reserves, slippage, zero output).
    /// - [`PoolError::TransferFailed`] if settlement is refused.
    pub fn swap(
        &mut self,
        trader: AccountId,
        asset_in: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        deadline: Timestamp,
    ) -> crate::error::Result<SwapReceipt> {
        self.guard.enter()?;
        let result = self.swap_guarded(trader, asset_in, amount_in, min_amount_out, deadline);
        self.guard.exit();
        result
    }

    fn swap_guarded(
        &mut self,
        trader: AccountId,
        asset_in: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        deadline: Timestamp,
    ) -> crate::error::Result<SwapReceipt> {
        let now = self.clock.now();
        if now.is_after(deadline) {
            return Err(PoolError::TransactionExpired { now, deadline });
        }
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap requires a positive input"));
        }
        let side_in = self.side_of(&asset_in)?;
        let asset_out = self.assets.other(&asset_in)?;

        let checkpoint = self.state.clone();
        let outcome =
            self.swap_apply(trader, side_in, asset_in, asset_out, amount_in, min_amount_out, now);
        if outcome.is_err() {
            self.state = checkpoint;
        }
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    fn swap_apply(
        &mut self,
        trader: AccountId,
        side_in: AssetSide,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        now: Timestamp,
    ) -> crate::error::Result<SwapReceipt> {
        let amount_out = swap::swap(&mut self.state, side_in, amount_in, min_amount_out)?;
        self.settle_in(asset_in, trader, amount_in)?;
        self.settle_out(asset_out, trader, amount_out)?;
        SwapReceipt::new(trader, asset_in, asset_out, amount_in, amount_out, now)
    }

    fn settle_in(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        self.transfer
            .move_in(asset, from, amount)
            .map_err(|e| PoolError::TransferFailed(e.reason()))
    }

    fn settle_out(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        self.transfer
            .move_out(asset, to, amount)
            .map_err(|e| PoolError::TransferFailed(e.reason()))
    }
}
