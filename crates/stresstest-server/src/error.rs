//! API error types.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stresstest_engine::EngineError;
use thiserror::Error;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (invalid input).
    #[error("{0}")]
    BadRequest(String),

    /// Unknown route.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

// Conversions from domain errors
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stresstest_core::StressError;

    #[test]
    fn test_engine_error_mapping() {
        let empty: ApiError = EngineError::from(StressError::EmptyPortfolio).into();
        assert!(matches!(empty, ApiError::BadRequest(ref m) if m == "Portfolio is empty"));

        let unpriced: ApiError = EngineError::from(StressError::NoPricedHoldings).into();
        assert!(matches!(unpriced, ApiError::Internal(ref m) if m == "Unable to fetch stock data"));

        let config: ApiError = EngineError::ConfigError("no quotes".into()).into();
        assert!(matches!(config, ApiError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
