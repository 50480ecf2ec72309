//! Pool configuration.

use crate::domain::{AccountId, AssetPair};
use crate::error::PoolError;

/// Immutable parameters of a pool, fixed at construction.
///
/// The original deployment environment made the owner and custody account
/// ambient properties of the hosting process; here they are explicit,
/// constructor-injected values with no static state.
///
/// # Validation
///
/// - The asset pair is validated at [`AssetPair`] construction time.
/// - The custody account must differ from the owner: reserves mirror the
///   custody balance, and an owner doubling as custodian would fold
///   personal funds into that mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    owner: AccountId,
    account: AccountId,
    pair: AssetPair,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `owner` and
    /// `account` are the same identity.
    pub fn new(owner: AccountId, account: AccountId, pair: AssetPair) -> Result<Self, PoolError> {
        let config = Self {
            owner,
            account,
            pair,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the custody account
    /// equals the owner identity.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.owner == self.account {
            return Err(PoolError::InvalidConfiguration(
                "custody account must differ from the owner",
            ));
        }
        Ok(())
    }

    /// Returns the owner identity (the only permitted liquidity provider).
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the pool's custody account on both ledgers.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the asset pair the pool trades.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetId;

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(
            AssetId::from_bytes([1u8; 32]),
            AssetId::from_bytes([2u8; 32]),
        ) else {
            panic!("valid pair");
        };
        p
    }

    #[test]
    fn valid_config() {
        let owner = AccountId::from_bytes([1u8; 32]);
        let custody = AccountId::from_bytes([9u8; 32]);
        let Ok(config) = PoolConfig::new(owner, custody, pair()) else {
            panic!("expected Ok");
        };
        assert_eq!(config.owner(), owner);
        assert_eq!(config.account(), custody);
        assert_eq!(config.pair(), pair());
    }

    #[test]
    fn rejects_owner_as_custody() {
        let owner = AccountId::from_bytes([1u8; 32]);
        let Err(e) = PoolConfig::new(owner, owner, pair()) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            PoolError::InvalidConfiguration("custody account must differ from the owner")
        );
    }
}
