//! The asset-ledger capability the pool depends on for custody movements.
//!
//! The pool never tracks who owns what outside its own reserve counters;
//! actual balances live in two external ledgers, one per asset. This
//! module defines the [`AssetLedger`] trait the pool calls through, plus
//! an [`InMemoryLedger`] reference implementation used by tests and
//! documentation examples.
//!
//! # Atomicity Contract
//!
//! Ledger calls are call-and-check: any `Err` from a transfer is treated
//! by the pool exactly like an exception; the enclosing operation aborts
//! and any transfer already executed in the same operation is compensated
//! before the error is returned. The ledger's own atomicity (a single
//! transfer either moves the full amount or nothing) is assumed, not
//! enforced here.

mod in_memory;

pub use in_memory::InMemoryLedger;

use core::fmt;

use crate::domain::{AccountId, Amount, AssetId};

/// Failure reported by an asset-ledger call.
///
/// The pool maps every variant to
/// [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed);
/// the distinction only matters to ledger implementors and to tests that
/// assert on ledger behavior directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    /// The sending account does not hold the requested amount.
    InsufficientBalance,
    /// Crediting the recipient would overflow its balance counter.
    BalanceOverflow,
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientBalance => write!(f, "insufficient balance"),
            Self::BalanceOverflow => write!(f, "recipient balance overflow"),
        }
    }
}

impl std::error::Error for TransferError {}

/// Balance-tracking collaborator providing the transfer primitives the
/// pool relies on.
///
/// One instance exists per asset; the pool holds one handle per side and
/// checks at construction that each handle's [`asset_id`](Self::asset_id)
/// matches the configured pair.
///
/// Methods take `&self`: implementations that mutate state are expected
/// to use interior mutability, so a ledger can be shared between the pool
/// and other callers (every account holder is a potential caller of the
/// same ledger).
pub trait AssetLedger {
    /// Returns the identity of the asset this ledger tracks.
    fn asset_id(&self) -> AssetId;

    /// Moves `amount` from `from` to `to` on behalf of the pool.
    ///
    /// Used to pull deposits and swap inputs into pool custody. Prior
    /// authorization by `from` is assumed to be established out of band.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer cannot be applied; no
    /// partial movement is observable.
    fn transfer_from(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` out of `from` (pool custody) to `to`.
    ///
    /// Used to push swap outputs and withdrawals to the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the transfer cannot be applied; no
    /// partial movement is observable.
    fn transfer(&self, from: AccountId, to: AccountId, amount: Amount)
        -> Result<(), TransferError>;

    /// Returns the current balance of `account`, zero if unknown.
    fn balance_of(&self, account: AccountId) -> Amount;
}
