//! Data Transfer Objects for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stresstest_core::stress::{Scenario, StressTestReport};
use stresstest_core::types::Holding;
use stresstest_engine::StockMatch;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Stress test request body.
#[derive(Debug, Deserialize)]
pub struct StressTestRequest {
    /// Holdings to test; a missing or `null` list is treated as empty.
    #[serde(default)]
    pub portfolio: Option<Vec<Holding>>,
}

/// Stress test response body.
#[derive(Debug, Serialize)]
pub struct StressTestResponse {
    pub results: StressTestReport,
    pub ai_insights: String,
    pub timestamp: DateTime<Utc>,
}

/// Ticker validation request body.
#[derive(Debug, Deserialize)]
pub struct ValidateTickerRequest {
    #[serde(default)]
    pub ticker: String,
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search response body.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<StockMatch>,
}

/// Scenario list response body.
#[derive(Debug, Serialize)]
pub struct ScenariosResponse {
    pub scenarios: Vec<Scenario>,
}
