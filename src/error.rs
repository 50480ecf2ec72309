//! Unified error type for the pairpool crate.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every failure aborts the enclosing pool operation with no partial effect;
//! no error is recovered from or retried inside the crate.

use core::fmt;

/// Convenience alias for results carrying a [`PoolError`].
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum covering every failure a pool operation can report.
///
/// Variants carrying a `&'static str` include a short detail message that
/// identifies the failing step without allocating.
///
/// # Examples
///
/// ```
/// use pairpool::error::PoolError;
///
/// let err = PoolError::ProportionMismatch;
/// assert_eq!(err.to_string(), "deposit or withdrawal ratio does not match current reserves");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Caller is not the pool owner on an owner-gated operation.
    Unauthorized,
    /// An input amount was zero where a positive amount is required.
    InvalidAmount(&'static str),
    /// A liquidity change violates exact proportionality against reserves.
    ProportionMismatch,
    /// Operation requires a seeded pool but one or both reserves are zero.
    InsufficientLiquidity,
    /// A withdrawal requested more than the pool currently holds.
    InsufficientReserves,
    /// The swap output rounds down to zero; the trade is rejected rather
    /// than committed as a free transfer to the pool.
    ZeroOutput,
    /// An external ledger call did not succeed; the whole operation was
    /// rolled back.
    TransferFailed(&'static str),
    /// Price query for an asset that is not part of the pool's pair.
    UnsupportedToken,
    /// Pool or pair construction parameters are inconsistent.
    InvalidConfiguration(&'static str),
    /// Checked arithmetic overflowed (or underflowed) during an operation.
    Overflow(&'static str),
    /// Division by zero during a price or quote calculation.
    DivisionByZero,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "caller is not the pool owner"),
            Self::InvalidAmount(detail) => write!(f, "invalid amount: {detail}"),
            Self::ProportionMismatch => write!(
                f,
                "deposit or withdrawal ratio does not match current reserves"
            ),
            Self::InsufficientLiquidity => write!(f, "pool reserves are empty"),
            Self::InsufficientReserves => {
                write!(f, "withdrawal exceeds current pool reserves")
            }
            Self::ZeroOutput => write!(f, "swap output rounds down to zero"),
            Self::TransferFailed(detail) => write!(f, "ledger transfer failed: {detail}"),
            Self::UnsupportedToken => write!(f, "asset is not part of the pool pair"),
            Self::InvalidConfiguration(detail) => {
                write!(f, "invalid configuration: {detail}")
            }
            Self::Overflow(detail) => write!(f, "arithmetic overflow: {detail}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for PoolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unauthorized() {
        assert_eq!(
            PoolError::Unauthorized.to_string(),
            "caller is not the pool owner"
        );
    }

    #[test]
    fn display_includes_detail() {
        let err = PoolError::InvalidAmount("swap input must be positive");
        assert_eq!(err.to_string(), "invalid amount: swap input must be positive");
    }

    #[test]
    fn display_transfer_failed() {
        let err = PoolError::TransferFailed("asset B payout transfer failed");
        assert_eq!(
            err.to_string(),
            "ledger transfer failed: asset B payout transfer failed"
        );
    }

    #[test]
    fn equality_discriminates_variants() {
        assert_ne!(PoolError::ZeroOutput, PoolError::InsufficientLiquidity);
        assert_eq!(PoolError::ProportionMismatch, PoolError::ProportionMismatch);
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_e: &E) {}
        assert_error(&PoolError::UnsupportedToken);
    }
}
