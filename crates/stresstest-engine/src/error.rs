//! Engine error types.

use stresstest_core::StressError;
use thiserror::Error;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Valuation or scenario error
    #[error(transparent)]
    Stress(#[from] StressError),
}

impl EngineError {
    /// Returns true if the error was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            EngineError::Stress(e) => e.is_client_error(),
            EngineError::ConfigError(_) => false,
        }
    }
}
