//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use finmetrics_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
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

    /// Empty portfolio.
    #[error("Portfolio has no holdings")]
    EmptyPortfolio,

    /// Error raised by a core value type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
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
}
