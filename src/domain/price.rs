//! Fixed-point exchange rate between the pool's two assets.

use core::fmt;

use super::Amount;
use crate::error::PoolError;
use crate::math;

/// Exchange rate scaled by `10^18` (one WAD), stored as an integer.
///
/// A `Price` of `2 × 10^18` means one unit of the base asset is worth two
/// units of the quote asset. Integer fixed-point is deliberate: floating
/// point would change the rounding behavior that price reciprocity tests
/// rely on.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, Price};
///
/// let price = Price::from_ratio(Amount::new(200), Amount::new(100)).expect("nonzero base");
/// assert_eq!(price.get(), 2 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Price(u128);

impl Price {
    /// Fixed-point scaling factor (`10^18`).
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Price ratio of exactly 1:1.
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `Price` from an already-scaled raw value.
    pub const fn from_raw(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw `10^18`-scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes `quote × 10^18 / base` with floor rounding.
    ///
    /// The multiplication is widened to 256 bits, so overflow can only
    /// occur when narrowing the final quotient back to `u128`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if `base` is zero.
    /// - [`PoolError::Overflow`] if the scaled quotient exceeds `u128`.
    pub fn from_ratio(quote: Amount, base: Amount) -> Result<Self, PoolError> {
        if base.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let scaled = math::mul_div_floor(quote.get(), Self::SCALE, base.get())
            .ok_or(PoolError::Overflow("scaled price does not fit in u128"))?;
        Ok(Self(scaled))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
