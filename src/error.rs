//! Unified error types for the adaptive AMM library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, so callers can match on a single enum whether the failure
//! came from the invariant math or from the pool state machine.

use thiserror::Error;

/// Every failure the crate can report.
///
/// Variants carrying a `&'static str` describe the offending operand or
/// computation step; they are meant for logs, not for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The requested reserve delta would leave the feasible region of the
    /// curve: no strictly positive partner reserve exists.
    #[error("infeasible trade: no positive partner reserve exists on the curve")]
    InfeasibleTrade,

    /// The curvature parameter cannot be represented or inverted.
    #[error("degenerate curvature parameter: {0}")]
    DegenerateParameter(&'static str),

    /// A reserve handed to the invariant math or the pool is not positive.
    #[error("invalid reserve: {0}")]
    InvalidReserve(&'static str),

    /// An invariant value is not positive.
    #[error("invalid invariant: {0}")]
    InvalidInvariant(&'static str),

    /// A trade quantity is not acceptable (for example, zero).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A pool configuration is malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A real power or logarithm was evaluated outside its domain.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// A result exceeded the decimal range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A non-zero result fell below the decimal resolution.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl AmmError {
    /// Returns `true` for [`AmmError::InfeasibleTrade`].
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleTrade)
    }

    /// Returns `true` if the error comes from exceeding the decimal range
    /// rather than from invalid input.
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::Overflow(_) | Self::Underflow(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
