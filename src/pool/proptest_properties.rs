//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covered properties:
//!
//! 1. **Product monotonicity** — the constant product never decreases
//!    across any accepted swap.
//! 2. **Ledger consistency** — the share ledger sums to the total supply
//!    after any accepted operation sequence.
//! 3. **Withdrawal bound** — deposit-then-withdraw never returns more
//!    than was deposited.
//! 4. **Quote fidelity** — a quote equals the output of the swap that
//!    follows it.
//! 5. **Genesis bounds** — raw genesis shares are the floored geometric
//!    mean of the deposit.

use proptest::prelude::*;

use crate::domain::{AccountId, Amount, AssetId, AssetPair, Timestamp};
use crate::math::sqrt_product;
use crate::traits::{FixedClock, NoopTransfer};

use super::{Pool, MINIMUM_LIQUIDITY};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn depositor() -> AccountId {
    AccountId::from_bytes([10u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([11u8; 32])
}

fn far_deadline() -> Timestamp {
    Timestamp::new(u64::MAX)
}

fn seeded_pool(reserve_a: u128, reserve_b: u128) -> Pool<NoopTransfer, FixedClock> {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("valid pair");
    };
    let mut pool = Pool::with_clock(pair, NoopTransfer, FixedClock::new(Timestamp::new(1_000)));
    let Ok(_) = pool.deposit(depositor(), Amount::new(reserve_a), Amount::new(reserve_b)) else {
        panic!("genesis deposit");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves large enough to clear the genesis lock, small enough to keep
/// shrinking fast.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Swap inputs in a range that can move the pool meaningfully.
fn swap_amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

proptest! {
    // -----------------------------------------------------------------------
    // Property 1: Product monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn product_never_decreases_across_swaps(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amounts in prop::collection::vec(swap_amount_strategy(), 1..8),
        directions in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let mut pool = seeded_pool(ra, rb);
        for (amount, a_to_b) in amounts.iter().zip(directions.iter().cycle()) {
            let k_before = pool.state().constant_product();
            let asset_in = if *a_to_b { asset_a() } else { asset_b() };
            let result = pool.swap(
                trader(),
                asset_in,
                Amount::new(*amount),
                Amount::ZERO,
                far_deadline(),
            );
            match result {
                Ok(_) => prop_assert!(pool.state().constant_product() >= k_before),
                // A refused swap must not have moved anything.
                Err(_) => prop_assert_eq!(pool.state().constant_product(), k_before),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Property 2: Ledger consistency
    // -----------------------------------------------------------------------

    #[test]
    fn ledger_sums_to_total_after_operations(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        deposit_a in 1u128..=1_000_000u128,
        deposit_b in 1u128..=1_000_000u128,
        swap_amount in swap_amount_strategy(),
        burn_fraction in 1u128..=100u128,
    ) {
        let mut pool = seeded_pool(ra, rb);
        let second = AccountId::from_bytes([12u8; 32]);
        // Each operation may be individually refused; consistency must
        // hold either way.
        let _ = pool.deposit(second, Amount::new(deposit_a), Amount::new(deposit_b));
        let _ = pool.swap(
            trader(),
            asset_a(),
            Amount::new(swap_amount),
            Amount::ZERO,
            far_deadline(),
        );
        let owned = pool.shares_of(&depositor());
        let burn = owned.get() * burn_fraction / 100;
        let _ = pool.withdraw(depositor(), crate::domain::Shares::new(burn));

        prop_assert_eq!(pool.state().validate(), Ok(()));
    }

    // -----------------------------------------------------------------------
    // Property 3: Withdrawal bound
    // -----------------------------------------------------------------------

    #[test]
    fn withdrawal_never_exceeds_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let owned = pool.shares_of(&depositor());
        let Ok(receipt) = pool.withdraw(depositor(), owned) else {
            // A pool so lopsided that full withdrawal truncates to zero
            // on one side refuses the burn instead.
            return Ok(());
        };
        prop_assert!(receipt.amount_a() <= Amount::new(ra));
        prop_assert!(receipt.amount_b() <= Amount::new(rb));
        // The locked floor stays behind.
        prop_assert_eq!(pool.total_shares(), MINIMUM_LIQUIDITY);
        prop_assert!(!pool.state().reserve_a().is_zero());
        prop_assert!(!pool.state().reserve_b().is_zero());
    }

    // -----------------------------------------------------------------------
    // Property 4: Quote fidelity
    // -----------------------------------------------------------------------

    #[test]
    fn quote_equals_swap_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in swap_amount_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let quoted = pool.quote_output(&asset_a(), Amount::new(amount));
        let swapped = pool.swap(
            trader(),
            asset_a(),
            Amount::new(amount),
            Amount::ZERO,
            far_deadline(),
        );
        match (quoted, swapped) {
            (Ok(quote), Ok(receipt)) => prop_assert_eq!(receipt.amount_out(), quote),
            // A zero quote is the one case the swap additionally refuses.
            (Ok(quote), Err(_)) => prop_assert!(quote.is_zero()),
            (Err(_), Ok(_)) => prop_assert!(false, "swap succeeded where quote failed"),
            (Err(_), Err(_)) => {}
        }
    }

    // -----------------------------------------------------------------------
    // Property 5: Genesis bounds
    // -----------------------------------------------------------------------

    #[test]
    fn genesis_shares_are_floored_geometric_mean(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = seeded_pool(ra, rb);
        let raw = sqrt_product(ra, rb);
        prop_assert_eq!(pool.total_shares().get(), raw);
        prop_assert_eq!(
            pool.shares_of(&depositor()).get(),
            raw - MINIMUM_LIQUIDITY.get()
        );
        prop_assert_eq!(
            pool.shares_of(&AccountId::zero()),
            MINIMUM_LIQUIDITY
        );
    }
}
