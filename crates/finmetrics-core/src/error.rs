//! Error types for the Finmetrics core crate.
//!
//! This module defines the errors raised while constructing domain values
//! and formatting numbers.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building or formatting core values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A string argument did not name one of the accepted values.
    #[error("Invalid {name} '{value}': must be one of {expected}")]
    InvalidArgument {
        /// Name of the argument.
        name: String,
        /// The rejected value.
        value: String,
        /// Human-readable list of accepted values.
        expected: String,
    },

    /// Holding data failed validation.
    #[error("Invalid holding '{ticker}': {reason}")]
    InvalidHolding {
        /// The holding ticker.
        ticker: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A floating point input was NaN or infinite.
    #[error("Non-finite value in {context}: {value}")]
    NonFiniteValue {
        /// Where the value was supplied.
        context: String,
        /// The offending value.
        value: f64,
    },

    /// A decimal result did not fit the representable range.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: String,
    },
}

impl CoreError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a non-finite value error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteValue {
            context: context.into(),
            value,
        }
    }

    /// Create an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }
}
