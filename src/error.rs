//! Error taxonomy for fallible `BigInt` operations.

use thiserror::Error;

/// Errors produced by fallible `BigInt` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// Division or modulus with a zero divisor.
    #[error("division by zero")]
    DivideByZero,
    /// Text parsing failed: bad radix prefix, empty digit run, or an
    /// out-of-alphabet digit.
    #[error("invalid BigInt literal: {reason}")]
    ParseError { reason: String },
}

impl BigIntError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        BigIntError::ParseError {
            reason: reason.into(),
        }
    }
}
