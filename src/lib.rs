//! # Hydra CPMM
//!
//! Core of a two-asset Constant Product Automated Market Maker.
//!
//! A pool holds reserves of two assets, **A** and **B**, and keeps
//! `reserve_a × reserve_b` from decreasing across swaps.  Liquidity
//! providers deposit both assets at the current ratio and receive pool
//! shares; burning shares returns a proportional slice of both reserves.
//!
//! The crate is a library of pure state transitions.  Moving assets is
//! delegated to an [`AssetLedger`](traits::AssetLedger) supplied by the
//! caller, and the caller identity and time arrive in a
//! [`CallContext`](domain::CallContext).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for configuration and values |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//!
//! // 1. Two 18-decimal assets and the pool's custody account
//! let usdc = Asset::new(Address::from_bytes([1u8; 32]), Decimals::MAX);
//! let weth = Asset::new(Address::from_bytes([2u8; 32]), Decimals::MAX);
//! let custody = Address::from_bytes([9u8; 32]);
//!
//! // 2. Configure and create an empty pool with a 0.30% fee
//! let pair = AssetPair::new(usdc, weth).expect("distinct assets");
//! let config = ConstantProductConfig::new(pair, custody)
//!     .with_fee_tier(FeeTier::new(BasisPoints::new(30)));
//! let mut pool = ConstantProductPool::from_config(&config).expect("valid config");
//!
//! // 3. Fund a provider in an in-memory ledger
//! let alice = Address::from_bytes([10u8; 32]);
//! let mut ledger = InMemoryLedger::new();
//! for asset in [usdc, weth] {
//!     ledger.mint(&asset, alice, asset.whole(1_000_000)).expect("mint");
//!     ledger.approve(&asset, alice, custody, asset.whole(1_000_000));
//! }
//! let ctx = CallContext::new(alice, Timestamp::from_secs(1_700_000_000));
//!
//! // 4. Seed the pool, then swap against it
//! pool.add_liquidity(&mut ledger, &ctx, usdc.whole(100_000), weth.whole(50))
//!     .expect("first deposit");
//! let quoted = pool.quote_swap_a_for_b(usdc.whole(1_000)).expect("quote");
//! let record = pool.swap_a_for_b(&mut ledger, &ctx, usdc.whole(1_000)).expect("swap");
//!
//! assert_eq!(record.amount_out(), quoted);
//! assert!(record.amount_out() < weth.whole(1));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ ConstantProductPool │  SwapPool + LiquidityPool
//! └──────────┬──────────┘
//!            │ stage ─► settle ─► commit
//!            ▼
//! ┌─────────────────────┐      ┌─────────────┐
//! │ pricing             │      │ AssetLedger │  external custody
//! └──────────┬──────────┘      └─────────────┘
//!            ▼
//! ┌─────────────────────┐
//! │ state               │  Reserves, ShareLedger
//! └──────────┬──────────┘
//!            ▼
//! ┌─────────────────────┐
//! │ domain + math       │  Amount, Shares, FeeTier, mul_div, …
//! └─────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`domain`] | Value types: amounts, shares, assets, fees, records |
//! | [`math`] | Checked arithmetic and 256-bit `mul_div` |
//! | [`state`] | Reserve counters and the share ledger |
//! | [`pricing`] | Side-effect-free deposit, swap and withdrawal quotes |
//! | [`traits`] | `SwapPool`, `LiquidityPool`, `FromConfig`, `AssetLedger` |
//! | [`config`] | Pool configuration and validation |
//! | [`pools`] | The Constant Product pool |
//! | [`ledger`] | In-memory asset ledger |
//! | [`error`] | `AmmError` and `LedgerError` |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricing;
pub mod state;
pub mod traits;
