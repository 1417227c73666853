//! Error types for risk calculations.

use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// An input series contained NaN or an infinite value.
    #[error("Non-finite value in {context} at index {index}")]
    NonFiniteInput {
        /// Name of the input series.
        context: String,
        /// Position of the first offending value.
        index: usize,
    },

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
}

impl RiskError {
    /// Create a non-finite input error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>, index: usize) -> Self {
        Self::NonFiniteInput {
            context: context.into(),
            index,
        }
    }

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

/// Fails on the first NaN or infinite value in `values`.
pub(crate) fn ensure_finite(context: &str, values: &[f64]) -> RiskResult<()> {
    match finmetrics_core::stats::first_non_finite(values) {
        Some(index) => Err(RiskError::non_finite(context, index)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RiskError::non_finite("prices", 3);
        assert_eq!(err.to_string(), "Non-finite value in prices at index 3");

        let err = RiskError::invalid_argument("format", "brief", "summary, detailed");
        assert!(err.to_string().contains("brief"));
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("returns", &[0.1, -0.2]).is_ok());
        assert_eq!(
            ensure_finite("returns", &[0.1, f64::NAN]),
            Err(RiskError::non_finite("returns", 1))
        );
    }
}
