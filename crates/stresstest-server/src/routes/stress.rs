//! Stress test endpoint.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use chrono::Utc;

use crate::dto::{StressTestRequest, StressTestResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Runs a stress test over the posted portfolio.
pub async fn run(
    State(state): State<AppState>,
    payload: Result<Json<StressTestRequest>, JsonRejection>,
) -> ApiResult<Json<StressTestResponse>> {
    let Json(request) = payload?;
    let portfolio = request.portfolio.unwrap_or_default();

    let run = state.engine.run_stress_test(&portfolio).await?;
    tracing::debug!(
        "Stress test over {} holdings used {:?} scenarios",
        run.report.holding_count(),
        run.scenario_origin
    );

    Ok(Json(StressTestResponse {
        results: run.report,
        ai_insights: run.ai_insights,
        timestamp: Utc::now(),
    }))
}
