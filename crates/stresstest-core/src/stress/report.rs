//! The assembled stress test report.

use serde::{Deserialize, Serialize};

use super::impact::{run_scenarios, ScenarioResult};
use super::scenarios::Scenario;
use crate::error::StressResult;
use crate::types::PricedHolding;
use crate::valuation::PortfolioValuation;

/// Complete numeric result of a stress test.
///
/// Built fresh per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestReport {
    /// Current portfolio value.
    pub current_value: f64,

    /// Minimum value across the baseline and all scenarios.
    pub worst_case_value: f64,

    /// Maximum value across the baseline and all scenarios.
    pub best_case_value: f64,

    /// `current_value - worst_case_value`.
    pub potential_loss: f64,

    /// Potential loss as a percentage of current value.
    pub loss_percentage: f64,

    /// `best_case_value - current_value`.
    pub potential_gain: f64,

    /// Potential gain as a percentage of current value.
    pub gain_percentage: f64,

    /// Per-scenario outcomes.
    pub scenario_results: Vec<ScenarioResult>,

    /// Holdings that were priced and included in the value.
    pub priced_holdings: Vec<PricedHolding>,
}

impl StressTestReport {
    /// Runs `scenarios` against a valuation and assembles the report.
    ///
    /// # Errors
    ///
    /// Fails when the valuation total is not positive.
    pub fn build(valuation: PortfolioValuation, scenarios: &[Scenario]) -> StressResult<Self> {
        let outcome = run_scenarios(valuation.current_value, scenarios)?;

        Ok(Self {
            current_value: outcome.current_value,
            worst_case_value: outcome.worst_case_value,
            best_case_value: outcome.best_case_value,
            potential_loss: outcome.potential_loss,
            loss_percentage: outcome.loss_percentage,
            potential_gain: outcome.potential_gain,
            gain_percentage: outcome.gain_percentage,
            scenario_results: outcome.scenario_results,
            priced_holdings: valuation.priced_holdings,
        })
    }

    /// Number of holdings included in the valuation.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.priced_holdings.len()
    }
}
