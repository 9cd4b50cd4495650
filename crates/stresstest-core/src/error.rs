//! Error types for stress analytics.
//!
//! This module defines the error types used throughout the core crate.

use thiserror::Error;

/// Result type for stress operations.
pub type StressResult<T> = Result<T, StressError>;

/// Errors that can occur while valuing a portfolio or applying scenarios.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StressError {
    /// The request carried no holdings.
    #[error("Portfolio is empty")]
    EmptyPortfolio,

    /// Invalid holding data.
    #[error("Invalid holding '{ticker}': {reason}")]
    InvalidHolding {
        /// The holding ticker as supplied.
        ticker: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// No holding could be priced, so there is nothing to stress.
    #[error("Unable to fetch stock data")]
    NoPricedHoldings,

    /// Percentages are undefined against a non-positive base value.
    #[error("Portfolio value must be positive, got {value}")]
    NonPositiveValue {
        /// The offending portfolio value.
        value: f64,
    },

    /// A scenario moved the portfolio value out of the representable range.
    #[error("Scenario '{scenario}' produces a non-finite portfolio value")]
    ValueOverflow {
        /// Name of the offending scenario.
        scenario: String,
    },

    /// Generated scenario text could not be turned into scenarios.
    #[error("Malformed scenario response: {reason}")]
    MalformedScenarios {
        /// What was wrong with the response.
        reason: String,
    },
}

impl StressError {
    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed scenario response error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedScenarios {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyPortfolio | Self::InvalidHolding { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StressError::EmptyPortfolio.to_string(), "Portfolio is empty");
        assert_eq!(
            StressError::NoPricedHoldings.to_string(),
            "Unable to fetch stock data"
        );

        let err = StressError::invalid_holding("AAPL", "shares must be positive");
        assert!(err.to_string().contains("AAPL"));
        assert!(err.to_string().contains("shares must be positive"));
    }

    #[test]
    fn test_client_errors() {
        assert!(StressError::EmptyPortfolio.is_client_error());
        assert!(StressError::invalid_holding("X", "bad").is_client_error());
        assert!(!StressError::NoPricedHoldings.is_client_error());
        assert!(!StressError::malformed("not json").is_client_error());
        assert!(!StressError::ValueOverflow {
            scenario: "Moon".into()
        }
        .is_client_error());
    }
}
