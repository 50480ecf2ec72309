//! In-memory asset ledger for tests and examples.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{AssetLedger, TransferError};
use crate::domain::{AccountId, Amount, AssetId};

/// A self-contained balance ledger backed by a `BTreeMap`.
///
/// Implements [`AssetLedger`] with interior mutability so the same
/// instance can be read by a test harness while the pool holds it. The
/// `mint` and `burn` helpers exist for test setup; `burn` in particular
/// lets a test force the pool's custody balance to diverge from its
/// reserve mirror and observe the rollback path.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AccountId, Amount, AssetId};
/// use pairpool::ledger::{AssetLedger, InMemoryLedger};
///
/// let ledger = InMemoryLedger::new(AssetId::from_bytes([1u8; 32]));
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let bob = AccountId::from_bytes([11u8; 32]);
///
/// ledger.mint(alice, Amount::new(100)).expect("mint");
/// ledger.transfer_from(alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(alice), Amount::new(60));
/// assert_eq!(ledger.balance_of(bob), Amount::new(40));
/// ```
#[derive(Debug)]
pub struct InMemoryLedger {
    asset: AssetId,
    balances: RefCell<BTreeMap<AccountId, u128>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger for the given asset.
    #[must_use]
    pub fn new(asset: AssetId) -> Self {
        Self {
            asset,
            balances: RefCell::new(BTreeMap::new()),
        }
    }

    /// Credits `amount` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::BalanceOverflow`] if the credit would
    /// overflow the account's balance counter.
    pub fn mint(&self, account: AccountId, amount: Amount) -> Result<(), TransferError> {
        let mut balances = self.balances.borrow_mut();
        let balance = balances.entry(account).or_insert(0);
        *balance = balance
            .checked_add(amount.get())
            .ok_or(TransferError::BalanceOverflow)?;
        Ok(())
    }

    /// Destroys `amount` held by `account`.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::InsufficientBalance`] if the account does
    /// not hold the requested amount.
    pub fn burn(&self, account: AccountId, amount: Amount) -> Result<(), TransferError> {
        let mut balances = self.balances.borrow_mut();
        let balance = balances.entry(account).or_insert(0);
        *balance = balance
            .checked_sub(amount.get())
            .ok_or(TransferError::InsufficientBalance)?;
        Ok(())
    }

    fn apply_transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut balances = self.balances.borrow_mut();

        let from_balance = balances.get(&from).copied().unwrap_or(0);
        let debited = from_balance
            .checked_sub(amount.get())
            .ok_or(TransferError::InsufficientBalance)?;

        let to_balance = balances.get(&to).copied().unwrap_or(0);
        let credited = to_balance
            .checked_add(amount.get())
            .ok_or(TransferError::BalanceOverflow)?;

        // Both sides validated; apply together so a failed transfer never
        // moves anything. Self-transfers would double-apply through two
        // inserts, so short-circuit them.
        if from == to {
            return Ok(());
        }
        balances.insert(from, debited);
        balances.insert(to, credited);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn asset_id(&self) -> AssetId {
        self.asset
    }

    fn transfer_from(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.apply_transfer(from, to, amount)
    }

    fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.apply_transfer(from, to, amount)
    }

    fn balance_of(&self, account: AccountId) -> Amount {
        Amount::new(self.balances.borrow().get(&account).copied().unwrap_or(0))
    }
}
