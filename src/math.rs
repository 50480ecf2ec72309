//! 256-bit intermediate arithmetic for pool formulas.
//!
//! Reserves and amounts are `u128`, so products such as
//! `reserve_out × amount_in` or `reserve × 10^18` can exceed 128 bits.
//! Every formula in the crate widens to [`U256`] before multiplying and
//! only narrows back after the division, which makes intermediate overflow
//! impossible by construction.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer for overflow-free intermediate products.
    pub struct U256(4);
}

/// Computes `a × b / divisor` with floor rounding and a 256-bit intermediate.
///
/// Returns `None` if `divisor` is zero or the quotient does not fit in
/// `u128`.
#[must_use]
pub fn mul_div_floor(a: u128, b: u128, divisor: u128) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    let quotient = U256::from(a) * U256::from(b) / U256::from(divisor);
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(quotient.as_u128())
}

/// Exact cross-product proportionality check:
/// `reserve_a × amount_b == reserve_b × amount_a`.
///
/// Both products are taken at 256 bits, so the comparison is exact for the
/// full `u128` range, with no tolerance, no truncation.
#[must_use]
pub fn is_proportional(reserve_a: u128, reserve_b: u128, amount_a: u128, amount_b: u128) -> bool {
    U256::from(reserve_a) * U256::from(amount_b) == U256::from(reserve_b) * U256::from(amount_a)
}
