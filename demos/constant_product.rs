//! Constant Product AMM example (Uniswap V2 style).
//!
//! Demonstrates creating a constant product pool (`x · y = k`), seeding it,
//! swapping against it, and withdrawing liquidity, with assets held in an
//! [`InMemoryLedger`].
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use hydra_cpmm::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Define assets and accounts ───────────────────────────────────
    let usdc = Asset::new(Address::from_bytes([1u8; 32]), Decimals::new(6)?);
    let weth = Asset::new(Address::from_bytes([2u8; 32]), Decimals::new(18)?);
    let custody = Address::from_bytes([9u8; 32]);
    let lp = Address::from_bytes([10u8; 32]);
    let trader = Address::from_bytes([20u8; 32]);

    // ── 2. Configure an empty pool with a 0.30% fee ─────────────────────
    let config = ConstantProductConfig::new(AssetPair::new(usdc, weth)?, custody)
        .with_fee_tier(FeeTier::new(BasisPoints::new(30)));
    let mut pool = ConstantProductPool::from_config(&config)?;
    println!("Pool created");
    println!("  Fee tier:         {}", pool.fee_tier());
    println!("  Share precision:  {}", pool.share_precision());

    // ── 3. Fund accounts in the asset ledger ────────────────────────────
    let mut ledger = InMemoryLedger::new();
    for who in [lp, trader] {
        ledger.mint(&usdc, who, usdc.whole(10_000_000))?;
        ledger.mint(&weth, who, weth.whole(5_000))?;
        ledger.approve(&usdc, who, custody, usdc.whole(10_000_000));
        ledger.approve(&weth, who, custody, weth.whole(5_000));
    }

    // ── 4. Seed: 2 000 000 USDC against 1 000 WETH ──────────────────────
    let lp_ctx = CallContext::new(lp, Timestamp::from_secs(1_700_000_000));
    let seed = pool.add_liquidity(&mut ledger, &lp_ctx, usdc.whole(2_000_000), weth.whole(1_000))?;
    println!("\n--- Seed deposit ---");
    println!("  Shares minted:    {}", seed.shares_minted);
    println!("  Reserves:         {} / {}", pool.reserve_a(), pool.reserve_b());

    // ── 5. Quote and execute a swap: sell 10 000 USDC for WETH ──────────
    let trader_ctx = CallContext::new(trader, Timestamp::from_secs(1_700_000_060));
    let amount_in = usdc.whole(10_000);
    let quoted = pool.quote_swap_a_for_b(amount_in)?;
    let record = pool.swap_a_for_b(&mut ledger, &trader_ctx, amount_in)?;
    println!("\n--- Swap: sell 10 000 USDC ---");
    println!("  Quoted out:       {quoted}");
    println!("  {record}");
    println!("  k grew:           {}", pool.invariant_k());

    // ── 6. Swap back: sell the WETH received ────────────────────────────
    let back = pool.swap_b_for_a(&mut ledger, &trader_ctx, record.amount_out())?;
    println!("\n--- Swap back ---");
    println!("  USDC received:    {} (sent {amount_in})", back.amount_out());

    // ── 7. Withdraw half of the LP's shares ─────────────────────────────
    let half = Shares::new(pool.balance_of(&lp).get() / 2);
    let (expect_a, expect_b) = pool.quote_withdraw(half)?;
    let withdrawal = pool.remove_liquidity(&mut ledger, &lp_ctx, half)?;
    println!("\n--- Withdraw {half} shares ---");
    println!("  Quoted:           {expect_a} / {expect_b}");
    println!("  Received:         {} / {}", withdrawal.amount_a, withdrawal.amount_b);
    println!("  Shares left:      {}", pool.total_shares());
    println!(
        "  Custody holds:    {} / {}",
        ledger.balance_of(&usdc, &custody),
        ledger.balance_of(&weth, &custody)
    );

    println!("\n=== Done ===");
    Ok(())
}
