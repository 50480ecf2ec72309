//! Identity of a fungible-asset ledger.

/// The identity of one fungible asset, i.e. of the external ledger that
/// tracks balances for that asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// considered valid identities, so construction is infallible.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AssetId;
///
/// let asset = AssetId::from_bytes([7u8; 32]);
/// assert_eq!(asset.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
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
