//! Ledger-agnostic account identity.

use core::fmt;

/// A generic account identity: the pool owner, a trader, or the pool's
/// own custody account on the asset ledgers.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// considered valid identities, so construction is infallible.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AccountId;
///
/// let owner = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(owner.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// Abbreviated hex form for logs: `0x` plus the first four bytes.
impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}
