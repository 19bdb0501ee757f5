//! Per-holder share accounting.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::PoolError;

/// Mapping from holder identity to share balance.
///
/// Keys are unique and zero balances are pruned on debit, so every entry
/// is a live position. The ledger never tracks the pool total itself;
/// [`PoolState`](crate::pool::PoolState) holds that separately, and the
/// two must agree at every commit point: `sum() == total_shares`.
///
/// Iteration order is deterministic (sorted by holder identity), which
/// keeps consistency checks and state dumps reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<AccountId, Shares>,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: BTreeMap::new(),
        }
    }

    /// Returns the balance of `holder`, zero if absent.
    #[must_use]
    pub fn balance_of(&self, holder: &AccountId) -> Shares {
        self.balances.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns the number of holders with a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Returns `true` if no holder has a balance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Sums every balance. Returns `None` if the sum overflows, which
    /// indicates a corrupted ledger rather than a caller mistake.
    #[must_use]
    pub fn sum(&self) -> Option<Shares> {
        self.balances
            .values()
            .try_fold(Shares::ZERO, |acc, s| acc.checked_add(s))
    }

    /// Credits `shares` to `holder`, creating the entry if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the holder's balance would
    /// exceed `u128`.
    pub(crate) fn credit(&mut self, holder: AccountId, shares: Shares) -> crate::error::Result<()> {
        let current = self.balance_of(&holder);
        let updated = current
            .checked_add(&shares)
            .ok_or(PoolError::Overflow("holder share balance overflow"))?;
        self.balances.insert(holder, updated);
        Ok(())
    }

    /// Debits `shares` from `holder`, pruning the entry if it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientSharesOwned`] if the holder's
    /// balance is smaller than `shares`.
    pub(crate) fn debit(&mut self, holder: &AccountId, shares: Shares) -> crate::error::Result<()> {
        let current = self.balance_of(holder);
        let updated = current
            .checked_sub(&shares)
            .ok_or(PoolError::InsufficientSharesOwned {
                requested: shares,
                available: current,
            })?;
        if updated.is_zero() {
            self.balances.remove(holder);
        } else {
            self.balances.insert(*holder, updated);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn holder(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    // -- balance_of ---------------------------------------------------------

    #[test]
    fn absent_holder_has_zero_balance() {
        let ledger = ShareLedger::new();
        assert_eq!(ledger.balance_of(&holder(1)), Shares::ZERO);
    }

    // -- credit -------------------------------------------------------------

    #[test]
    fn credit_creates_entry() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&holder(1)), Shares::new(100));
        assert_eq!(ledger.holders(), 1);
    }

    #[test]
    fn credit_accumulates() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.credit(holder(1), Shares::new(50)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&holder(1)), Shares::new(150));
        assert_eq!(ledger.holders(), 1);
    }

    #[test]
    fn credit_overflow_rejected() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(u128::MAX)) else {
            panic!("expected Ok");
        };
        let result = ledger.credit(holder(1), Shares::new(1));
        assert!(matches!(result, Err(PoolError::Overflow(_))));
        // Balance unchanged after the failed credit.
        assert_eq!(ledger.balance_of(&holder(1)), Shares::new(u128::MAX));
    }

    // -- debit --------------------------------------------------------------

    #[test]
    fn debit_reduces_balance() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.debit(&holder(1), Shares::new(40)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&holder(1)), Shares::new(60));
    }

    #[test]
    fn debit_to_zero_prunes_entry() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.debit(&holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        assert!(ledger.is_empty());
    }

    #[test]
    fn debit_more_than_balance_rejected() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        let result = ledger.debit(&holder(1), Shares::new(101));
        assert_eq!(
            result,
            Err(PoolError::InsufficientSharesOwned {
                requested: Shares::new(101),
                available: Shares::new(100),
            })
        );
        assert_eq!(ledger.balance_of(&holder(1)), Shares::new(100));
    }

    #[test]
    fn debit_absent_holder_rejected() {
        let mut ledger = ShareLedger::new();
        let result = ledger.debit(&holder(9), Shares::new(1));
        assert_eq!(
            result,
            Err(PoolError::InsufficientSharesOwned {
                requested: Shares::new(1),
                available: Shares::ZERO,
            })
        );
    }

    // -- sum ----------------------------------------------------------------

    #[test]
    fn sum_over_holders() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.credit(holder(2), Shares::new(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.sum(), Some(Shares::new(350)));
    }

    #[test]
    fn sum_of_empty_ledger_is_zero() {
        assert_eq!(ShareLedger::new().sum(), Some(Shares::ZERO));
    }

    #[test]
    fn sum_overflow_detected() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(u128::MAX)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.credit(holder(2), Shares::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.sum(), None);
    }

    // -- misc ---------------------------------------------------------------

    #[test]
    fn distinct_holders_tracked_separately() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.credit(holder(2), Shares::new(20)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&holder(1)), Shares::new(10));
        assert_eq!(ledger.balance_of(&holder(2)), Shares::new(20));
        assert_eq!(ledger.holders(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let mut ledger = ShareLedger::new();
        let Ok(()) = ledger.credit(holder(1), Shares::new(10)) else {
            panic!("expected Ok");
        };
        let snapshot = ledger.clone();
        let Ok(()) = ledger.debit(&holder(1), Shares::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(snapshot.balance_of(&holder(1)), Shares::new(10));
        assert!(ledger.is_empty());
    }
}
