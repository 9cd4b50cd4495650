//! Error types for trait operations.

use thiserror::Error;

/// Common error type for collaborator operations.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Connection to external service failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Requested resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// The service answered but the payload was unusable
    #[error("parse error: {0}")]
    ParseError(String),

    /// The service answered with a non-success status
    #[error("upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Collaborator is not configured
    #[error("source not available: {0}")]
    SourceNotAvailable(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rate limited
    #[error("rate limited")]
    RateLimited,
}

impl TraitError {
    /// Maps an HTTP status and body to an error.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            404 => TraitError::NotFound(message.into()),
            429 => TraitError::RateLimited,
            _ => TraitError::Upstream {
                status,
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(TraitError::from_status(404, "AAPLX"), TraitError::NotFound(_)));
        assert!(matches!(TraitError::from_status(429, ""), TraitError::RateLimited));

        let err = TraitError::from_status(503, "down");
        assert_eq!(err.to_string(), "upstream error (503): down");
    }
}
