//! # pairpool
//!
//! A two-asset liquidity pool implementing the constant-product market
//! maker invariant (`x · y = k`), with owner-gated liquidity provisioning
//! and public swap operations.
//!
//! The pool never holds asset balances itself: custody lives in two
//! external [`AssetLedger`](ledger::AssetLedger) instances, one per asset,
//! and the pool's reserve counters mirror the custody account's balances.
//! There is a single fixed pair, a single trusted liquidity provider, and
//! no fee, LP-share, or routing layer.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pairpool = "0.1"
//! ```
//!
//! ## Seed a pool and execute a swap
//!
//! ```rust
//! use pairpool::config::PoolConfig;
//! use pairpool::domain::{AccountId, Amount, AssetId, AssetPair};
//! use pairpool::ledger::InMemoryLedger;
//! use pairpool::pool::Pool;
//!
//! // 1. Identities: owner, a trader, and the pool's custody account
//! let owner = AccountId::from_bytes([1u8; 32]);
//! let trader = AccountId::from_bytes([2u8; 32]);
//! let custody = AccountId::from_bytes([9u8; 32]);
//!
//! // 2. The two assets and their ledgers
//! let asset_a = AssetId::from_bytes([10u8; 32]);
//! let asset_b = AssetId::from_bytes([11u8; 32]);
//! let ledger_a = InMemoryLedger::new(asset_a);
//! let ledger_b = InMemoryLedger::new(asset_b);
//! ledger_a.mint(owner, Amount::new(1_000)).expect("mint");
//! ledger_b.mint(owner, Amount::new(1_000)).expect("mint");
//! ledger_a.mint(trader, Amount::new(100)).expect("mint");
//!
//! // 3. Configure and create the pool
//! let pair = AssetPair::new(asset_a, asset_b).expect("distinct assets");
//! let config = PoolConfig::new(owner, custody, pair).expect("valid config");
//! let mut pool = Pool::new(config, ledger_a, ledger_b).expect("pool created");
//!
//! // 4. The first deposit fixes the price; swaps are public
//! pool.add_liquidity(owner, Amount::new(1_000), Amount::new(1_000))
//!     .expect("seeded");
//! let out = pool.swap_a_for_b(trader, Amount::new(100)).expect("swap");
//! assert_eq!(out, Amount::new(90)); // 1000 × 100 / 1100, floored
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  owner (add/remove liquidity) or trader (swaps)
//! └──────┬──────┘
//!        │ &mut self operations, strictly serialized
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  reserve counters + event log, all-or-nothing commits
//! └──────┬──────┘
//!        │ transfer_from / transfer
//!        ▼
//! ┌─────────────┐
//! │   Ledgers    │  one AssetLedger per asset, custody of real balances
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`AccountId`](domain::AccountId), [`PoolEvent`](domain::PoolEvent), … |
//! | [`ledger`] | The [`AssetLedger`](ledger::AssetLedger) seam and an [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): owner, custody account, asset pair |
//! | [`pool`]   | The [`Pool`](pool::Pool) state machine and its five operations |
//! | [`math`]   | 256-bit intermediate arithmetic for formulas |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;

#[cfg(test)]
mod proptest_properties;
