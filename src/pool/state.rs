//! Pool state: reserves, share supply, and the holder ledger.

use primitive_types::U256;

use crate::domain::{AccountId, Amount, Shares};
use crate::error::PoolError;
use crate::ledger::ShareLedger;
use crate::pool::MINIMUM_LIQUIDITY;

/// Which of the pool's two reserves an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssetSide {
    /// The first (lower-identifier) asset.
    A,
    /// The second (higher-identifier) asset.
    B,
}

impl AssetSide {
    /// Returns the opposite side.
    pub(crate) const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The complete accounting state of one pool.
///
/// Owned exclusively by [`Pool`](crate::pool::Pool); the engines mutate
/// it through crate-private methods and nothing outside this crate can
/// touch it directly, so the invariants below can only be checked and
/// broken in one place.
///
/// # Invariants
///
/// - The share ledger sums exactly to `total_shares`.
/// - Reserves are zero together (before genesis) or positive together.
/// - Once shares exist, at least [`MINIMUM_LIQUIDITY`] of them are held
///   by the reserved zero-account sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    ledger: ShareLedger,
}

impl PoolState {
    /// Creates the empty pre-genesis state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reserve of the first asset.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of the second asset.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply, locked shares included.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the holder ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ShareLedger {
        &self.ledger
    }

    /// Returns the reserve on the given side.
    pub(crate) const fn reserve(&self, side: AssetSide) -> Amount {
        match side {
            AssetSide::A => self.reserve_a,
            AssetSide::B => self.reserve_b,
        }
    }

    /// Returns the current constant product `reserve_a * reserve_b`.
    pub(crate) fn constant_product(&self) -> U256 {
        U256::from(self.reserve_a.get()) * U256::from(self.reserve_b.get())
    }

    /// Mints `shares` to `holder` and grows the supply.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the supply or the holder's
    /// balance would exceed `u128`.
    pub(crate) fn mint(&mut self, holder: AccountId, shares: Shares) -> crate::error::Result<()> {
        let grown = self
            .total_shares
            .checked_add(&shares)
            .ok_or(PoolError::Overflow("total share supply overflow"))?;
        self.ledger.credit(holder, shares)?;
        self.total_shares = grown;
        Ok(())
    }

    /// Burns `shares` from `holder` and shrinks the supply.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientSharesOwned`] if the holder's balance
    ///   is smaller than `shares`.
    /// - [`PoolError::Overflow`] if the supply would underflow, which a
    ///   consistent ledger makes impossible.
    pub(crate) fn burn(&mut self, holder: &AccountId, shares: Shares) -> crate::error::Result<()> {
        self.ledger.debit(holder, shares)?;
        self.total_shares = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("total share supply underflow"))?;
        Ok(())
    }

    /// Increases one reserve.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the reserve would exceed `u128`.
    pub(crate) fn credit_reserve(
        &mut self,
        side: AssetSide,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let reserve = match side {
            AssetSide::A => &mut self.reserve_a,
            AssetSide::B => &mut self.reserve_b,
        };
        *reserve = reserve
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("reserve overflow on credit"))?;
        Ok(())
    }

    /// Decreases one reserve.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the reserve would underflow.
    pub(crate) fn debit_reserve(
        &mut self,
        side: AssetSide,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let reserve = match side {
            AssetSide::A => &mut self.reserve_a,
            AssetSide::B => &mut self.reserve_b,
        };
        *reserve = reserve
            .checked_sub(&amount)
            .ok_or(PoolError::Overflow("reserve underflow on debit"))?;
        Ok(())
    }

    /// Increases both reserves by the deposited amounts.
    pub(crate) fn credit_reserves(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<()> {
        self.credit_reserve(AssetSide::A, amount_a)?;
        self.credit_reserve(AssetSide::B, amount_b)
    }

    /// Decreases both reserves by the redeemed amounts.
    pub(crate) fn debit_reserves(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> crate::error::Result<()> {
        self.debit_reserve(AssetSide::A, amount_a)?;
        self.debit_reserve(AssetSide::B, amount_b)
    }

    /// Checks every structural invariant of the state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Overflow`] if the ledger sum overflows.
    /// - [`PoolError::InconsistentState`] naming the violated invariant.
    pub fn validate(&self) -> crate::error::Result<()> {
        let sum = self
            .ledger
            .sum()
            .ok_or(PoolError::Overflow("ledger sum overflow"))?;
        if sum != self.total_shares {
            return Err(PoolError::InconsistentState(
                "share ledger does not sum to total supply",
            ));
        }
        if self.total_shares.is_zero() {
            if !self.reserve_a.is_zero() || !self.reserve_b.is_zero() {
                return Err(PoolError::InconsistentState(
                    "reserves held with no share supply",
                ));
            }
            return Ok(());
        }
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::InconsistentState(
                "a reserve drained to zero while shares exist",
            ));
        }
        if self.total_shares < MINIMUM_LIQUIDITY {
            return Err(PoolError::InconsistentState(
                "share supply fell below the genesis lock",
            ));
        }
        if self.ledger.balance_of(&AccountId::zero()) < MINIMUM_LIQUIDITY {
            return Err(PoolError::InconsistentState(
                "genesis lock missing from the reserved sink",
            ));
        }
        Ok(())
    }
}
