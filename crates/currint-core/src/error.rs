//! Error types for currency and amount operations.

use std::convert::Infallible;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CurrencyError>;

/// Error returned by currency and amount operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Invalid currency definition.
    #[error("invalid currency definition: {0}")]
    Configuration(String),
    /// Currency code not present in the registry.
    #[error("invalid currency code {0}")]
    UnknownCurrency(String),
    /// Two real amounts of different currencies were combined or ordered.
    #[error("cannot combine amounts of different currencies ({left} and {right})")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },
    /// A major-unit value has no exact minor-unit representation.
    #[error(
        "cannot convert major amount {value} to minor amount of {code}; \
         would result in fractional amount of minor unit"
    )]
    Precision {
        /// The major-unit value as given.
        value: String,
        /// Currency code.
        code: String,
    },
    /// Input that is not an exact number, or not a usable rate.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Integral division left a remainder.
    #[error("{value} is not evenly divisible by {divisor}")]
    InexactDivision {
        /// Minor-unit value being divided.
        value: i64,
        /// Divisor.
        divisor: i64,
    },
    /// Integral division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Result does not fit in a 64-bit minor-unit value.
    #[error("amount overflow: {0}")]
    Overflow(String),
    /// Operation not supported on this kind of amount.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl CurrencyError {
    pub(crate) fn mismatch(left: &str, right: &str) -> Self {
        Self::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub(crate) fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }
}

impl From<Infallible> for CurrencyError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CurrencyError::UnknownCurrency("XYZ".into()).to_string(),
            "invalid currency code XYZ"
        );
        assert_eq!(
            CurrencyError::mismatch("GBP", "USD").to_string(),
            "cannot combine amounts of different currencies (GBP and USD)"
        );
        assert_eq!(
            CurrencyError::InexactDivision {
                value: 10,
                divisor: 3
            }
            .to_string(),
            "10 is not evenly divisible by 3"
        );
    }
}
