//! Ticker validation and search endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use stresstest_engine::TickerValidation;

use crate::dto::{SearchQuery, SearchResponse, ValidateTickerRequest};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Validates a ticker against the quote source.
///
/// An unknown ticker is a successful response with `valid: false`.
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateTickerRequest>, JsonRejection>,
) -> ApiResult<Json<TickerValidation>> {
    let Json(request) = payload?;

    if request.ticker.trim().is_empty() {
        return Err(ApiError::BadRequest("Ticker is required".to_string()));
    }

    Ok(Json(state.engine.validate_ticker(&request.ticker).await))
}

/// Searches the symbol directory.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(query) = query?;

    Ok(Json(SearchResponse {
        results: state.engine.search_stocks(&query.q).await,
    }))
}
