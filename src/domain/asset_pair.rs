//! Positional pair of distinct assets.

use super::AssetId;
use crate::error::PoolError;

/// The two distinct assets a pool trades, in the order given at
/// construction.
///
/// Unlike registries that sort pairs canonically, the order here is
/// positional and meaningful: side A and side B name which ledger backs
/// which reserve, and the first deposit fixes the price of A in terms of
/// B. The pair never changes for the lifetime of the pool.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct assets");
/// assert_eq!(pair.asset_a(), a);
/// assert_eq!(pair.asset_b(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

/// Which positional side of a pair an asset occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl AssetPair {
    /// Creates a new `AssetPair` with positional sides A and B.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if both sides name the
    /// same asset.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, PoolError> {
        if asset_a == asset_b {
            return Err(PoolError::InvalidConfiguration(
                "pair requires two distinct assets",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the side-A asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the side-B asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns which side of the pair `asset` occupies.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnsupportedToken`] if `asset` is not in the
    /// pair.
    pub fn side_of(&self, asset: &AssetId) -> Result<Side, PoolError> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(PoolError::UnsupportedToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn preserves_positional_order() {
        let hi = asset(2);
        let lo = asset(1);
        let Ok(pair) = AssetPair::new(hi, lo) else {
            panic!("expected Ok");
        };
        // No canonical sorting: side A stays what the caller said.
        assert_eq!(pair.asset_a(), hi);
        assert_eq!(pair.asset_b(), lo);
    }

    #[test]
    fn rejects_duplicate_asset() {
        let a = asset(1);
        let Err(e) = AssetPair::new(a, a) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            PoolError::InvalidConfiguration("pair requires two distinct assets")
        );
    }

    #[test]
    fn side_of_identifies_each_side() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.side_of(&asset(1)), Ok(Side::A));
        assert_eq!(pair.side_of(&asset(2)), Ok(Side::B));
    }

    #[test]
    fn side_of_rejects_foreign_asset() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.side_of(&asset(3)), Err(PoolError::UnsupportedToken));
    }

    #[test]
    fn copy_semantics() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        let copy = pair;
        assert_eq!(pair, copy);
    }
}
