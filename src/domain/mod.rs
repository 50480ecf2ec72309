//! Fundamental domain value types used throughout the pool.
//!
//! This module contains the core value types that model the pool domain:
//! account and asset identities, raw amounts, fixed-point prices, and the
//! notifications emitted by state-changing operations. All types are
//! newtypes with validated constructors where an invariant exists.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod event;
mod price;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::{AssetPair, Side};
pub use event::PoolEvent;
pub use price::Price;
