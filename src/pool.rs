//! Constant-product liquidity pool over two ledger-backed assets.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the two
//! reserves. No fee is charged: the only thing keeping the product
//! non-decreasing is the floor division in the output formula.
//!
//! # Swap Algorithm (asset A → asset B)
//!
//! 1. `amount_out = reserve_b × amount_in / (reserve_a + amount_in)` (floor)
//! 2. pull `amount_in` of asset A from the trader into custody
//! 3. push `amount_out` of asset B from custody to the trader
//! 4. `reserve_a += amount_in`, `reserve_b -= amount_out`
//!
//! # Atomicity
//!
//! Every operation either fully commits or leaves no observable effect.
//! Validation and output computation happen before any ledger call; if a
//! second transfer fails after a first one succeeded, the first is
//! compensated before the error is returned. Reserve counters are only
//! written once all transfers have succeeded.
//!
//! # Reserve Mirror
//!
//! Reserves are a cached mirror of the custody balances on the two
//! ledgers and are treated as the sole source of truth. A direct ledger
//! transfer into or out of the custody account bypasses the mirror; the
//! pool does not reconcile against actual balances, and pricing then
//! operates on stale state until the drift is corrected out of band.

use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, PoolEvent, Price, Side};
use crate::error::{PoolError, Result};
use crate::ledger::AssetLedger;
use crate::math;

/// A two-asset constant-product pool with owner-gated liquidity and
/// public swaps.
///
/// The pool is generic over its two ledger handles so that tests can use
/// [`InMemoryLedger`](crate::ledger::InMemoryLedger) while production
/// embeddings supply their own [`AssetLedger`] implementations. Both
/// handles and the [`PoolConfig`] are fixed at construction; reserves
/// start at zero and mutate only through the four state-changing
/// operations.
///
/// # Examples
///
/// ```
/// use pairpool::config::PoolConfig;
/// use pairpool::domain::{AccountId, Amount, AssetId, AssetPair};
/// use pairpool::ledger::InMemoryLedger;
/// use pairpool::pool::Pool;
///
/// let owner = AccountId::from_bytes([1u8; 32]);
/// let custody = AccountId::from_bytes([9u8; 32]);
/// let asset_a = AssetId::from_bytes([10u8; 32]);
/// let asset_b = AssetId::from_bytes([11u8; 32]);
///
/// let pair = AssetPair::new(asset_a, asset_b).expect("distinct assets");
/// let config = PoolConfig::new(owner, custody, pair).expect("valid config");
///
/// let ledger_a = InMemoryLedger::new(asset_a);
/// let ledger_b = InMemoryLedger::new(asset_b);
/// ledger_a.mint(owner, Amount::new(1_000)).expect("mint");
/// ledger_b.mint(owner, Amount::new(1_000)).expect("mint");
///
/// let mut pool = Pool::new(config, ledger_a, ledger_b).expect("pool created");
/// pool.add_liquidity(owner, Amount::new(1_000), Amount::new(1_000))
///     .expect("seeded");
/// assert_eq!(pool.reserve_a(), Amount::new(1_000));
/// ```
#[derive(Debug)]
pub struct Pool<LA, LB> {
    config: PoolConfig,
    ledger_a: LA,
    ledger_b: LB,
    reserve_a: Amount,
    reserve_b: Amount,
    events: Vec<PoolEvent>,
}

impl<LA: AssetLedger, LB: AssetLedger> Pool<LA, LB> {
    /// Creates a pool with zero reserves.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the config fails
    /// validation or either ledger's asset does not match its configured
    /// side of the pair.
    pub fn new(config: PoolConfig, ledger_a: LA, ledger_b: LB) -> Result<Self> {
        config.validate()?;
        if ledger_a.asset_id() != config.pair().asset_a() {
            return Err(PoolError::InvalidConfiguration(
                "ledger A does not track the configured side-A asset",
            ));
        }
        if ledger_b.asset_id() != config.pair().asset_b() {
            return Err(PoolError::InvalidConfiguration(
                "ledger B does not track the configured side-B asset",
            ));
        }
        Ok(Self {
            config,
            ledger_a,
            ledger_b,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            events: Vec::new(),
        })
    }

    /// Returns the current reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.config.owner()
    }

    /// Returns the pool's custody account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.config.account()
    }

    /// Returns the asset pair the pool trades.
    #[must_use]
    pub const fn asset_pair(&self) -> AssetPair {
        self.config.pair()
    }

    /// Returns the side-A ledger handle.
    pub const fn ledger_a(&self) -> &LA {
        &self.ledger_a
    }

    /// Returns the side-B ledger handle.
    pub const fn ledger_b(&self) -> &LB {
        &self.ledger_b
    }

    /// Returns the notifications emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains and returns the emitted notifications.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// Deposits liquidity in exact proportion to the current reserves.
    ///
    /// The first deposit (both reserves zero) accepts any positive pair
    /// and fixes the initial price ratio at the owner's discretion. Every
    /// later deposit must satisfy
    /// `reserve_a × amount_b == reserve_b × amount_a` exactly, with no
    /// slippage tolerance.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` is not the owner.
    /// - [`PoolError::InvalidAmount`] if either amount is zero.
    /// - [`PoolError::ProportionMismatch`] if the deposit ratio deviates
    ///   from the reserve ratio.
    /// - [`PoolError::Overflow`] if a reserve counter would overflow.
    /// - [`PoolError::TransferFailed`] if either pull fails; a completed
    ///   first pull is compensated before the error returns.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<()> {
        if caller != self.config.owner() {
            return Err(PoolError::Unauthorized);
        }
        if amount_a.is_zero() {
            return Err(PoolError::InvalidAmount("deposit of asset A must be positive"));
        }
        if amount_b.is_zero() {
            return Err(PoolError::InvalidAmount("deposit of asset B must be positive"));
        }

        let first_deposit = self.reserve_a.is_zero() && self.reserve_b.is_zero();
        if !first_deposit
            && !math::is_proportional(
                self.reserve_a.get(),
                self.reserve_b.get(),
                amount_a.get(),
                amount_b.get(),
            )
        {
            return Err(PoolError::ProportionMismatch);
        }

        // Reserve arithmetic is checked before any ledger call so that an
        // overflow never needs a compensating transfer.
        let new_reserve_a = self
            .reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::Overflow("reserve A overflow on deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&amount_b)
            .ok_or(PoolError::Overflow("reserve B overflow on deposit"))?;

        let custody = self.config.account();
        self.ledger_a
            .transfer_from(caller, custody, amount_a)
            .map_err(|_| PoolError::TransferFailed("asset A deposit transfer failed"))?;
        if self.ledger_b.transfer_from(caller, custody, amount_b).is_err() {
            // Custody received the A funds one call ago; the refund
            // cannot fail under serialized execution.
            let _ = self.ledger_a.transfer(custody, caller, amount_a);
            return Err(PoolError::TransferFailed("asset B deposit transfer failed"));
        }

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        debug!(%amount_a, %amount_b, "liquidity added");
        self.events.push(PoolEvent::LiquidityAdded {
            provider: caller,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    /// Swaps `amount_in` of asset A for asset B at the constant-product
    /// rate, with no fee.
    ///
    /// Returns the asset-B amount paid out.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is unseeded.
    /// - [`PoolError::ZeroOutput`] if the output floors to zero.
    /// - [`PoolError::Overflow`] if the input reserve would overflow.
    /// - [`PoolError::TransferFailed`] if a ledger call fails; an input
    ///   already pulled is refunded before the error returns.
    pub fn swap_a_for_b(&mut self, caller: AccountId, amount_in: Amount) -> Result<Amount> {
        let (amount_out, new_reserve_a) =
            Self::swap_output(self.reserve_a, self.reserve_b, amount_in)?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve B underflow on swap"))?;

        let custody = self.config.account();
        self.ledger_a
            .transfer_from(caller, custody, amount_in)
            .map_err(|_| PoolError::TransferFailed("asset A swap input transfer failed"))?;
        if self.ledger_b.transfer(custody, caller, amount_out).is_err() {
            // Roll the whole call back: the pulled input goes straight
            // back to the trader.
            let _ = self.ledger_a.transfer(custody, caller, amount_in);
            return Err(PoolError::TransferFailed("asset B payout transfer failed"));
        }

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        debug!(%amount_in, %amount_out, "swapped A for B");
        self.events.push(PoolEvent::SwapAForB {
            trader: caller,
            amount_in,
            amount_out,
        });
        Ok(amount_out)
    }

    /// Swaps `amount_in` of asset B for asset A, the mirror image of
    /// [`swap_a_for_b`](Self::swap_a_for_b).
    ///
    /// Returns the asset-A amount paid out.
    ///
    /// # Errors
    ///
    /// Same conditions as [`swap_a_for_b`](Self::swap_a_for_b) with the
    /// asset roles exchanged.
    pub fn swap_b_for_a(&mut self, caller: AccountId, amount_in: Amount) -> Result<Amount> {
        let (amount_out, new_reserve_b) =
            Self::swap_output(self.reserve_b, self.reserve_a, amount_in)?;
        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve A underflow on swap"))?;

        let custody = self.config.account();
        self.ledger_b
            .transfer_from(caller, custody, amount_in)
            .map_err(|_| PoolError::TransferFailed("asset B swap input transfer failed"))?;
        if self.ledger_a.transfer(custody, caller, amount_out).is_err() {
            let _ = self.ledger_b.transfer(custody, caller, amount_in);
            return Err(PoolError::TransferFailed("asset A payout transfer failed"));
        }

        self.reserve_b = new_reserve_b;
        self.reserve_a = new_reserve_a;
        debug!(%amount_in, %amount_out, "swapped B for A");
        self.events.push(PoolEvent::SwapBForA {
            trader: caller,
            amount_in,
            amount_out,
        });
        Ok(amount_out)
    }

    /// Withdraws liquidity in exact proportion to the current reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` is not the owner.
    /// - [`PoolError::InvalidAmount`] if either amount is zero.
    /// - [`PoolError::InsufficientReserves`] if either amount exceeds its
    ///   reserve.
    /// - [`PoolError::ProportionMismatch`] if the withdrawal ratio
    ///   deviates from the reserve ratio.
    /// - [`PoolError::TransferFailed`] if either push fails; a completed
    ///   first push is compensated before the error returns.
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<()> {
        if caller != self.config.owner() {
            return Err(PoolError::Unauthorized);
        }
        if amount_a.is_zero() {
            return Err(PoolError::InvalidAmount(
                "withdrawal of asset A must be positive",
            ));
        }
        if amount_b.is_zero() {
            return Err(PoolError::InvalidAmount(
                "withdrawal of asset B must be positive",
            ));
        }
        if amount_a > self.reserve_a || amount_b > self.reserve_b {
            return Err(PoolError::InsufficientReserves);
        }
        if !math::is_proportional(
            self.reserve_a.get(),
            self.reserve_b.get(),
            amount_a.get(),
            amount_b.get(),
        ) {
            return Err(PoolError::ProportionMismatch);
        }

        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::Overflow("reserve A underflow on withdrawal"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::Overflow("reserve B underflow on withdrawal"))?;

        let custody = self.config.account();
        self.ledger_a
            .transfer(custody, caller, amount_a)
            .map_err(|_| PoolError::TransferFailed("asset A withdrawal transfer failed"))?;
        if self.ledger_b.transfer(custody, caller, amount_b).is_err() {
            // The owner's deposit authorization backs the compensating
            // pull of the already-pushed A amount.
            let _ = self.ledger_a.transfer_from(caller, custody, amount_a);
            return Err(PoolError::TransferFailed(
                "asset B withdrawal transfer failed",
            ));
        }

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        debug!(%amount_a, %amount_b, "liquidity removed");
        self.events.push(PoolEvent::LiquidityRemoved {
            provider: caller,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    /// Returns the price of one unit of `asset` in units of the other
    /// asset, scaled by `10^18` and floored.
    ///
    /// Pure read: no state mutation, no ledger calls.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`PoolError::UnsupportedToken`] if `asset` is not in the pair.
    pub fn get_price(&self, asset: AssetId) -> Result<Price> {
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        match self.config.pair().side_of(&asset)? {
            Side::A => Price::from_ratio(self.reserve_b, self.reserve_a),
            Side::B => Price::from_ratio(self.reserve_a, self.reserve_b),
        }
    }

    /// Computes the constant-product output and the post-swap input
    /// reserve: `amount_out = reserve_out × amount_in / (reserve_in +
    /// amount_in)`, floor division.
    ///
    /// The floor bias is what keeps `reserve_a × reserve_b`
    /// non-decreasing across swaps, and it also bounds the output
    /// strictly below `reserve_out`, so the output reserve can never be
    /// drained to zero by a swap.
    fn swap_output(
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<(Amount, Amount)> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("swap input must be positive"));
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("input reserve overflow on swap"))?;
        let amount_out =
            math::mul_div_floor(reserve_out.get(), amount_in.get(), new_reserve_in.get())
                .ok_or(PoolError::Overflow("swap output does not fit in u128"))?;
        if amount_out == 0 {
            return Err(PoolError::ZeroOutput);
        }
        Ok((Amount::new(amount_out), new_reserve_in))
    }
}
