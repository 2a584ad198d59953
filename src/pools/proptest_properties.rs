//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Accounting**: after any operation sequence, share balances sum to
//!    the total and the custody account holds exactly the reserves.
//! 2. **Invariant preservation**: `reserve_a × reserve_b` never decreases
//!    across a swap.
//! 3. **Bounded output**: a swap never pays out the whole output reserve.
//! 4. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 5. **Liquidity conservation**: add then remove returns ≤ deposited.
//! 6. **Quote fidelity**: quotes are pure and match execution.

use proptest::prelude::*;

use crate::config::ConstantProductConfig;
use crate::domain::{
    Address, Amount, Asset, AssetPair, BasisPoints, CallContext, Decimals, FeeTier, Shares, Side,
    Timestamp,
};
use crate::ledger::InMemoryLedger;
use crate::pools::ConstantProductPool;
use crate::state::Reserves;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDS: u128 = 1 << 64;

fn asset_a() -> Asset {
    Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX)
}

fn asset_b() -> Asset {
    let Ok(d) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    Asset::new(Address::from_bytes([2u8; 32]), d)
}

fn custody() -> Address {
    Address::from_bytes([99u8; 32])
}

fn actor(i: u8) -> Address {
    Address::from_bytes([10 + i; 32])
}

fn ctx(who: Address) -> CallContext {
    CallContext::new(who, Timestamp::from_secs(1))
}

fn make_pool(fee_bps: u32) -> ConstantProductPool {
    let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
        panic!("valid pair");
    };
    let cfg = ConstantProductConfig::new(pair, custody())
        .with_fee_tier(FeeTier::new(BasisPoints::new(fee_bps)));
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn make_ledger() -> InMemoryLedger {
    let mut ledger = InMemoryLedger::new();
    for i in 0..3 {
        for asset in [asset_a(), asset_b()] {
            let Ok(()) = ledger.mint(&asset, actor(i), Amount::new(FUNDS)) else {
                panic!("mint");
            };
            ledger.approve(&asset, actor(i), custody(), Amount::new(FUNDS));
        }
    }
    ledger
}

fn seeded(fee_bps: u32, ra: u128, rb: u128) -> (ConstantProductPool, InMemoryLedger) {
    let mut pool = make_pool(fee_bps);
    let mut ledger = make_ledger();
    let Ok(_) = pool.add_liquidity(&mut ledger, &ctx(actor(0)), Amount::new(ra), Amount::new(rb))
    else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn custody_matches(pool: &ConstantProductPool, ledger: &InMemoryLedger) -> bool {
    ledger.balance_of(&asset_a(), &custody()) == pool.reserve_a()
        && ledger.balance_of(&asset_b(), &custody()) == pool.reserve_b()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(5u32), Just(30u32), Just(100u32)]
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::A), Just(Side::B)]
}

#[derive(Debug, Clone)]
enum Op {
    Deposit { who: u8, amount_a: u128, amount_b: u128 },
    Withdraw { who: u8, permille: u128 },
    Swap { who: u8, side: Side, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..3, 1u128..=1_000_000_000, 1u128..=1_000_000_000).prop_map(
            |(who, amount_a, amount_b)| Op::Deposit {
                who,
                amount_a,
                amount_b
            }
        ),
        (0u8..3, 1u128..=1_000).prop_map(|(who, permille)| Op::Withdraw { who, permille }),
        (0u8..3, side_strategy(), 1u128..=100_000_000)
            .prop_map(|(who, side, amount)| Op::Swap { who, side, amount }),
    ]
}

fn run(pool: &mut ConstantProductPool, ledger: &mut InMemoryLedger, op: &Op) {
    // Failures are allowed; the properties check that state stays sound.
    match *op {
        Op::Deposit {
            who,
            amount_a,
            amount_b,
        } => {
            let amount_a = Amount::new(amount_a);
            let amount_b = pool
                .quote_deposit(amount_a)
                .unwrap_or(Amount::new(amount_b));
            let _ = pool.add_liquidity(ledger, &ctx(actor(who)), amount_a, amount_b);
        }
        Op::Withdraw { who, permille } => {
            let held = pool.balance_of(&actor(who)).get();
            let shares = Shares::new(held * permille / 1_000);
            let _ = pool.remove_liquidity(ledger, &ctx(actor(who)), shares);
        }
        Op::Swap { who, side, amount } => {
            let _ = pool.swap(ledger, &ctx(actor(who)), side, Amount::new(amount));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 1: Accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_accounting_holds_across_sequences(
        fee in fee_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = make_pool(fee);
        let mut ledger = make_ledger();
        for op in &ops {
            run(&mut pool, &mut ledger, op);
            prop_assert!(pool.share_ledger().is_consistent(), "share sum drifted after {:?}", op);
            prop_assert!(custody_matches(&pool, &ledger), "custody drifted after {:?}", op);
            prop_assert_eq!(
                pool.total_shares().is_zero(),
                pool.reserves() == Reserves::EMPTY,
                "shares and reserves must be empty together"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2 & 3: Invariant preservation and bounded output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_k_non_decreasing_and_output_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        side in side_strategy(),
        amount in 1u128..=u128::from(u64::MAX),
    ) {
        let (mut pool, mut ledger) = seeded(fee, ra, rb);
        let k_before = pool.invariant_k();
        let reserve_out = pool.reserves().reserve(side.opposite());

        let Ok(record) = pool.swap(&mut ledger, &ctx(actor(1)), side, Amount::new(amount)) else {
            return Ok(());
        };
        prop_assert!(record.amount_out() < reserve_out, "output drained the reserve");
        prop_assert!(pool.invariant_k() >= k_before, "k decreased");
        prop_assert!(!pool.reserves().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded(fee, ra, rb);
        let swap_in = (ra / 1_000).max(1);

        let Ok(ab) = pool.swap_a_for_b(&mut ledger, &ctx(actor(1)), Amount::new(swap_in)) else {
            return Ok(());
        };
        if ab.amount_out().is_zero() {
            return Ok(());
        }
        let Ok(ba) = pool.swap_b_for_a(&mut ledger, &ctx(actor(1)), ab.amount_out()) else {
            return Ok(());
        };
        prop_assert!(
            ba.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            ba.amount_out(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        add_a in 1_000u128..=1_000_000_000,
    ) {
        let (mut pool, mut ledger) = seeded(0, ra, rb);
        let lp = actor(2);
        let Ok(add_b) = pool.quote_deposit(Amount::new(add_a)) else {
            return Ok(());
        };
        let Ok(dep) = pool.add_liquidity(&mut ledger, &ctx(lp), Amount::new(add_a), add_b) else {
            return Ok(());
        };
        prop_assert_eq!(pool.balance_of(&lp), dep.shares_minted);

        let Ok(w) = pool.remove_liquidity(&mut ledger, &ctx(lp), dep.shares_minted) else {
            return Ok(());
        };
        prop_assert!(w.amount_a <= dep.amount_a, "withdrew more A than deposited");
        prop_assert!(w.amount_b <= dep.amount_b, "withdrew more B than deposited");
        prop_assert_eq!(pool.balance_of(&lp), Shares::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Quote fidelity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quotes_are_pure_and_exact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        side in side_strategy(),
        amount in 1u128..=1_000_000_000,
    ) {
        let (mut pool, mut ledger) = seeded(fee, ra, rb);
        let snapshot = pool.clone();

        let first = pool.quote_swap(side, Amount::new(amount));
        let second = pool.quote_swap(side, Amount::new(amount));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&pool, &snapshot);

        let Ok(quote) = first else {
            return Ok(());
        };
        let Ok(record) = pool.swap(&mut ledger, &ctx(actor(1)), side, Amount::new(amount)) else {
            return Ok(());
        };
        prop_assert_eq!(record.amount_out(), quote.amount_out());
    }
}
