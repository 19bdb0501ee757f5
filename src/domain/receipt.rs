//! Structured records of completed mutating operations.
//!
//! Every successful `deposit`, `withdraw`, and `swap` returns one of
//! these receipts. A receipt is the notification record an external
//! indexing or logging collaborator consumes: operation kind (the type),
//! actor, amounts moved, resulting shares or output, and a timestamp.
//! Construction is validated so a receipt can never describe an
//! operation the engine would have rejected.

use core::fmt;

use super::{AccountId, Amount, AssetId, Shares, Timestamp};
use crate::error::PoolError;

/// Record of a completed deposit.
///
/// # Invariants
///
/// - Both deposited amounts are positive.
/// - At least one share was minted to the depositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    depositor: AccountId,
    amount_a: Amount,
    amount_b: Amount,
    shares_minted: Shares,
    timestamp: Timestamp,
}

impl DepositReceipt {
    /// Creates a new `DepositReceipt` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if either amount or the minted
    /// share count is zero.
    pub const fn new(
        depositor: AccountId,
        amount_a: Amount,
        amount_b: Amount,
        shares_minted: Shares,
        timestamp: Timestamp,
    ) -> crate::error::Result<Self> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::ZeroAmount("deposit receipt amounts must be positive"));
        }
        if shares_minted.is_zero() {
            return Err(PoolError::ZeroAmount("deposit receipt must mint shares"));
        }
        Ok(Self {
            depositor,
            amount_a,
            amount_b,
            shares_minted,
            timestamp,
        })
    }

    /// Returns the depositing account.
    #[must_use]
    pub const fn depositor(&self) -> AccountId {
        self.depositor
    }

    /// Returns the amount of the first asset deposited.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the amount of the second asset deposited.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares credited to the depositor.
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Returns the completion time.
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(a={}, b={}, shares={}, at={})",
            self.amount_a, self.amount_b, self.shares_minted, self.timestamp
        )
    }
}

/// Record of a completed withdrawal.
///
/// # Invariants
///
/// - The burned share count is positive.
/// - Both redeemed amounts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalReceipt {
    withdrawer: AccountId,
    shares_burned: Shares,
    amount_a: Amount,
    amount_b: Amount,
    timestamp: Timestamp,
}

impl WithdrawalReceipt {
    /// Creates a new `WithdrawalReceipt` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if the share count or either
    /// redeemed amount is zero.
    pub const fn new(
        withdrawer: AccountId,
        shares_burned: Shares,
        amount_a: Amount,
        amount_b: Amount,
        timestamp: Timestamp,
    ) -> crate::error::Result<Self> {
        if shares_burned.is_zero() {
            return Err(PoolError::ZeroAmount("withdrawal receipt must burn shares"));
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::ZeroAmount(
                "withdrawal receipt amounts must be positive",
            ));
        }
        Ok(Self {
            withdrawer,
            shares_burned,
            amount_a,
            amount_b,
            timestamp,
        })
    }

    /// Returns the withdrawing account.
    #[must_use]
    pub const fn withdrawer(&self) -> AccountId {
        self.withdrawer
    }

    /// Returns the shares burned.
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Returns the amount of the first asset redeemed.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the amount of the second asset redeemed.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the completion time.
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(shares={}, a={}, b={}, at={})",
            self.shares_burned, self.amount_a, self.amount_b, self.timestamp
        )
    }
}

/// Record of a completed swap.
///
/// # Invariants
///
/// - Both exchanged amounts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    trader: AccountId,
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
    timestamp: Timestamp,
}

impl SwapReceipt {
    /// Creates a new `SwapReceipt` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if either amount is zero.
    pub const fn new(
        trader: AccountId,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        timestamp: Timestamp,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() || amount_out.is_zero() {
            return Err(PoolError::ZeroAmount("swap receipt amounts must be positive"));
        }
        Ok(Self {
            trader,
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            timestamp,
        })
    }

    /// Returns the trading account.
    #[must_use]
    pub const fn trader(&self) -> AccountId {
        self.trader
    }

    /// Returns the asset the trader sold to the pool.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the asset the trader received from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the completion time.
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap(in={}, out={}, at={})",
            self.amount_in, self.amount_out, self.timestamp
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    // -- DepositReceipt -----------------------------------------------------

    #[test]
    fn deposit_receipt_valid() {
        let Ok(r) = DepositReceipt::new(
            account(1),
            Amount::new(1_000),
            Amount::new(2_000),
            Shares::new(1_400),
            Timestamp::new(7),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(r.depositor(), account(1));
        assert_eq!(r.amount_a(), Amount::new(1_000));
        assert_eq!(r.amount_b(), Amount::new(2_000));
        assert_eq!(r.shares_minted(), Shares::new(1_400));
        assert_eq!(r.timestamp(), Timestamp::new(7));
    }

    #[test]
    fn deposit_receipt_rejects_zero_amount() {
        let result = DepositReceipt::new(
            account(1),
            Amount::ZERO,
            Amount::new(2_000),
            Shares::new(1),
            Timestamp::ZERO,
        );
        assert!(result.is_err());
    }

    #[test]
    fn deposit_receipt_rejects_zero_shares() {
        let result = DepositReceipt::new(
            account(1),
            Amount::new(1),
            Amount::new(1),
            Shares::ZERO,
            Timestamp::ZERO,
        );
        assert!(result.is_err());
    }

    #[test]
    fn deposit_receipt_display() {
        let Ok(r) = DepositReceipt::new(
            account(1),
            Amount::new(10),
            Amount::new(20),
            Shares::new(14),
            Timestamp::new(3),
        ) else {
            panic!("expected Ok");
        };
        let s = format!("{r}");
        assert!(s.contains("10"));
        assert!(s.contains("20"));
        assert!(s.contains("14"));
    }

    // -- WithdrawalReceipt --------------------------------------------------

    #[test]
    fn withdrawal_receipt_valid() {
        let Ok(r) = WithdrawalReceipt::new(
            account(2),
            Shares::new(500),
            Amount::new(100),
            Amount::new(200),
            Timestamp::new(9),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(r.withdrawer(), account(2));
        assert_eq!(r.shares_burned(), Shares::new(500));
        assert_eq!(r.amount_a(), Amount::new(100));
        assert_eq!(r.amount_b(), Amount::new(200));
    }

    #[test]
    fn withdrawal_receipt_rejects_zero_shares() {
        let result = WithdrawalReceipt::new(
            account(2),
            Shares::ZERO,
            Amount::new(100),
            Amount::new(200),
            Timestamp::ZERO,
        );
        assert!(result.is_err());
    }

    #[test]
    fn withdrawal_receipt_rejects_zero_amount() {
        let result = WithdrawalReceipt::new(
            account(2),
            Shares::new(1),
            Amount::new(100),
            Amount::ZERO,
            Timestamp::ZERO,
        );
        assert!(result.is_err());
    }

    // -- SwapReceipt --------------------------------------------------------

    #[test]
    fn swap_receipt_valid() {
        let Ok(r) = SwapReceipt::new(
            account(3),
            asset(1),
            asset(2),
            Amount::new(1_000),
            Amount::new(997),
            Timestamp::new(11),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(r.trader(), account(3));
        assert_eq!(r.asset_in(), asset(1));
        assert_eq!(r.asset_out(), asset(2));
        assert_eq!(r.amount_in(), Amount::new(1_000));
        assert_eq!(r.amount_out(), Amount::new(997));
    }

    #[test]
    fn swap_receipt_rejects_zero_input() {
        let result = SwapReceipt::new(
            account(3),
            asset(1),
            asset(2),
            Amount::ZERO,
            Amount::new(1),
            Timestamp::ZERO,
        );
        assert!(result.is_err());
    }

    #[test]
    fn swap_receipt_rejects_zero_output() {
        let result = SwapReceipt::new(
            account(3),
            asset(1),
            asset(2),
            Amount::new(1),
            Amount::ZERO,
            Timestamp::ZERO,
        );
        assert!(result.is_err());
    }

    #[test]
    fn swap_receipt_display() {
        let Ok(r) = SwapReceipt::new(
            account(3),
            asset(1),
            asset(2),
            Amount::new(100),
            Amount::new(90),
            Timestamp::new(5),
        ) else {
            panic!("expected Ok");
        };
        let s = format!("{r}");
        assert!(s.contains("100"));
        assert!(s.contains("90"));
    }

    #[test]
    fn copy_semantics() {
        let Ok(a) = SwapReceipt::new(
            account(3),
            asset(1),
            asset(2),
            Amount::new(100),
            Amount::new(90),
            Timestamp::ZERO,
        ) else {
            panic!("expected Ok");
        };
        let b = a;
        assert_eq!(a, b);
    }
}
