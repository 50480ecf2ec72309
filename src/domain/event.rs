//! Notifications emitted by state-changing pool operations.

use super::{AccountId, Amount};

/// An observable notification recorded after a state-changing operation
/// commits.
///
/// Events are recorded only on the success path: a failed operation emits
/// nothing, matching the all-or-nothing commit semantics of the pool.
/// Swap events are tagged by direction via distinct variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolEvent {
    /// The owner deposited liquidity into the pool.
    LiquidityAdded {
        /// Identity of the liquidity provider (the pool owner).
        provider: AccountId,
        /// Asset-A quantity pulled into custody.
        amount_a: Amount,
        /// Asset-B quantity pulled into custody.
        amount_b: Amount,
    },
    /// A trader swapped asset A for asset B.
    SwapAForB {
        /// Identity of the trader.
        trader: AccountId,
        /// Asset-A quantity paid in.
        amount_in: Amount,
        /// Asset-B quantity paid out.
        amount_out: Amount,
    },
    /// A trader swapped asset B for asset A.
    SwapBForA {
        /// Identity of the trader.
        trader: AccountId,
        /// Asset-B quantity paid in.
        amount_in: Amount,
        /// Asset-A quantity paid out.
        amount_out: Amount,
    },
    /// The owner withdrew liquidity from the pool.
    LiquidityRemoved {
        /// Identity of the liquidity provider (the pool owner).
        provider: AccountId,
        /// Asset-A quantity pushed out of custody.
        amount_a: Amount,
        /// Asset-B quantity pushed out of custody.
        amount_b: Amount,
    },
}
