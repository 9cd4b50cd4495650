//! Static scenario list.

use axum::Json;
use stresstest_core::stress::fallback_scenarios;

use crate::dto::ScenariosResponse;

/// Lists the scenarios used when none can be generated.
pub async fn list() -> Json<ScenariosResponse> {
    Json(ScenariosResponse {
        scenarios: fallback_scenarios(),
    })
}
