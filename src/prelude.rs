//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```
//!
//! This re-exports the domain types, the ledger seam, the pool itself,
//! and the error types so that consumers don't need to import from
//! individual submodules.

// Re-export domain types
pub use crate::domain::{AccountId, Amount, AssetId, AssetPair, PoolEvent, Price, Side};

// Re-export the ledger seam
pub use crate::ledger::{AssetLedger, InMemoryLedger, TransferError};

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export the pool
pub use crate::pool::Pool;

// Re-export error types
pub use crate::error::{PoolError, Result};
