//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the core invariants of the pool:
//!
//! 1. **Product monotonicity**: `reserve_a × reserve_b` never decreases
//!    across a swap.
//! 2. **Output bound**: a swap never pays out the full output reserve.
//! 3. **Liquidity round-trip**: a proportional add followed by the same
//!    remove restores reserves and owner balances exactly.
//! 4. **Ownership gate**: non-owner liquidity calls always fail, for any
//!    amounts.
//! 5. **Mirror consistency**: reserves equal custody balances when all
//!    movement goes through pool operations.
//! 6. **Price reciprocity**: `price(A) × price(B)` is `10^36` up to floor
//!    loss.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Price};
use crate::error::PoolError;
use crate::ledger::{AssetLedger, InMemoryLedger};
use crate::math::U256;
use crate::pool::Pool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn owner() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

fn custody() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

fn asset_a() -> AssetId {
    AssetId::from_bytes([10u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([11u8; 32])
}

fn make_pool(ra: u128, rb: u128) -> Pool<InMemoryLedger, InMemoryLedger> {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("valid pair");
    };
    let Ok(config) = PoolConfig::new(owner(), custody(), pair) else {
        panic!("valid config");
    };
    let ledger_a = InMemoryLedger::new(asset_a());
    let ledger_b = InMemoryLedger::new(asset_b());
    for account in [owner(), trader()] {
        let Ok(()) = ledger_a.mint(account, Amount::new(1 << 100)) else {
            panic!("mint A");
        };
        let Ok(()) = ledger_b.mint(account, Amount::new(1 << 100)) else {
            panic!("mint B");
        };
    }
    let Ok(mut pool) = Pool::new(config, ledger_a, ledger_b) else {
        panic!("valid pool");
    };
    let Ok(()) = pool.add_liquidity(owner(), Amount::new(ra), Amount::new(rb)) else {
        panic!("seed deposit");
    };
    pool
}

fn product(pool: &Pool<InMemoryLedger, InMemoryLedger>) -> U256 {
    U256::from(pool.reserve_a().get()) * U256::from(pool.reserve_b().get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 10^12] to avoid dust-only pools.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000u128
}

/// Swap inputs in range [1, 10^9].
fn swap_in_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000u128
}

/// Proportional-deposit multipliers in [1, 1_000].
fn multiplier_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Product Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_product_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in swap_in_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let mut pool = make_pool(ra, rb);
        let before = product(&pool);

        let result = if a_to_b {
            pool.swap_a_for_b(trader(), Amount::new(amount_in))
        } else {
            pool.swap_b_for_a(trader(), Amount::new(amount_in))
        };
        // Dust trades may be rejected with ZeroOutput; that leaves the
        // state untouched, which the comparison below still verifies.
        let _ = result;

        prop_assert!(product(&pool) >= before);
    }

    // -----------------------------------------------------------------------
    // Property 2: Output Bound
    // -----------------------------------------------------------------------

    #[test]
    fn prop_swap_never_drains_output_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in swap_in_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        if let Ok(out) = pool.swap_a_for_b(trader(), Amount::new(amount_in)) {
            prop_assert!(out.get() < rb);
            prop_assert!(!pool.reserve_b().is_zero());
        }
    }

    // -----------------------------------------------------------------------
    // Property 3: Liquidity Round-Trip
    // -----------------------------------------------------------------------

    #[test]
    fn prop_proportional_add_remove_round_trips(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        multiplier in multiplier_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let deposit_a = Amount::new(ra * multiplier);
        let deposit_b = Amount::new(rb * multiplier);
        let owner_a = pool.ledger_a().balance_of(owner());
        let owner_b = pool.ledger_b().balance_of(owner());

        prop_assert_eq!(pool.add_liquidity(owner(), deposit_a, deposit_b), Ok(()));
        prop_assert_eq!(pool.remove_liquidity(owner(), deposit_a, deposit_b), Ok(()));

        prop_assert_eq!(pool.reserve_a(), Amount::new(ra));
        prop_assert_eq!(pool.reserve_b(), Amount::new(rb));
        prop_assert_eq!(pool.ledger_a().balance_of(owner()), owner_a);
        prop_assert_eq!(pool.ledger_b().balance_of(owner()), owner_b);
    }

    // -----------------------------------------------------------------------
    // Property 4: Ownership Gate
    // -----------------------------------------------------------------------

    #[test]
    fn prop_non_owner_liquidity_calls_always_fail(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_a in 0u128..=1_000_000_000u128,
        amount_b in 0u128..=1_000_000_000u128,
    ) {
        let mut pool = make_pool(ra, rb);
        prop_assert_eq!(
            pool.add_liquidity(trader(), Amount::new(amount_a), Amount::new(amount_b)),
            Err(PoolError::Unauthorized)
        );
        prop_assert_eq!(
            pool.remove_liquidity(trader(), Amount::new(amount_a), Amount::new(amount_b)),
            Err(PoolError::Unauthorized)
        );
    }

    // -----------------------------------------------------------------------
    // Property 5: Mirror Consistency
    // -----------------------------------------------------------------------

    #[test]
    fn prop_reserves_mirror_custody_balances(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in proptest::collection::vec((swap_in_strategy(), any::<bool>()), 1..8),
    ) {
        let mut pool = make_pool(ra, rb);
        for (amount_in, a_to_b) in swaps {
            let result = if a_to_b {
                pool.swap_a_for_b(trader(), Amount::new(amount_in))
            } else {
                pool.swap_b_for_a(trader(), Amount::new(amount_in))
            };
            let _ = result;
            prop_assert_eq!(pool.reserve_a(), pool.ledger_a().balance_of(custody()));
            prop_assert_eq!(pool.reserve_b(), pool.ledger_b().balance_of(custody()));
        }
    }

    // -----------------------------------------------------------------------
    // Property 6: Price Reciprocity
    // -----------------------------------------------------------------------

    #[test]
    fn prop_price_reciprocity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let Ok(price_a) = pool.get_price(asset_a()) else {
            return Ok(());
        };
        let Ok(price_b) = pool.get_price(asset_b()) else {
            return Ok(());
        };
        let prod = U256::from(price_a.get()) * U256::from(price_b.get());
        let exact = U256::from(Price::SCALE) * U256::from(Price::SCALE);
        prop_assert!(prod <= exact);
        // Each factor is floored by less than one unit, so the product is
        // short by less than price_a + price_b + 1.
        let max_loss = U256::from(price_a.get()) + U256::from(price_b.get()) + U256::from(1u8);
        prop_assert!(exact - prod <= max_loss);
    }
}
