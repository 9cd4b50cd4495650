//! Stress impact calculations.
//!
//! Applies percentage scenarios to a current portfolio value and tracks the
//! worst and best outcomes. The baseline participates in both bounds so a
//! one-sided scenario set still yields a sensible range.

use serde::{Deserialize, Serialize};

use super::scenarios::Scenario;
use crate::error::{StressError, StressResult};

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The applied scenario.
    #[serde(flatten)]
    pub scenario: Scenario,

    /// Portfolio value after the move.
    pub portfolio_value: f64,

    /// `portfolio_value - current_value`.
    pub gain_or_loss: f64,

    /// True when the scenario does not lose money.
    pub is_positive: bool,
}

/// Aggregate outcome of a scenario set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressOutcome {
    /// Value before any scenario.
    pub current_value: f64,

    /// Minimum of the baseline and all scenario values.
    pub worst_case_value: f64,

    /// Maximum of the baseline and all scenario values.
    pub best_case_value: f64,

    /// `current_value - worst_case_value`.
    pub potential_loss: f64,

    /// Loss as a percentage of current value.
    pub loss_percentage: f64,

    /// `best_case_value - current_value`.
    pub potential_gain: f64,

    /// Gain as a percentage of current value.
    pub gain_percentage: f64,

    /// Per-scenario outcomes, in scenario order.
    pub scenario_results: Vec<ScenarioResult>,
}

/// Value of the portfolio after a scenario.
///
/// ```text
/// scenario_value = current_value × (1 + impact / 100)
/// ```
#[must_use]
pub fn scenario_value(current_value: f64, scenario: &Scenario) -> f64 {
    current_value * (1.0 + scenario.impact_decimal())
}

/// Applies one scenario.
#[must_use]
pub fn apply_scenario(current_value: f64, scenario: &Scenario) -> ScenarioResult {
    let portfolio_value = scenario_value(current_value, scenario);
    let gain_or_loss = portfolio_value - current_value;

    ScenarioResult {
        scenario: scenario.clone(),
        portfolio_value,
        gain_or_loss,
        is_positive: gain_or_loss >= 0.0,
    }
}

/// Runs a scenario set against a current portfolio value.
///
/// # Errors
///
/// Returns [`StressError::NonPositiveValue`] when `current_value` is not a
/// positive finite number, since the percentages would be undefined, and
/// [`StressError::ValueOverflow`] when a scenario value is not finite.
pub fn run_scenarios(current_value: f64, scenarios: &[Scenario]) -> StressResult<StressOutcome> {
    if !current_value.is_finite() || current_value <= 0.0 {
        return Err(StressError::NonPositiveValue {
            value: current_value,
        });
    }

    let scenario_results: Vec<ScenarioResult> = scenarios
        .iter()
        .map(|s| apply_scenario(current_value, s))
        .collect();

    if let Some(r) = scenario_results
        .iter()
        .find(|r| !r.portfolio_value.is_finite())
    {
        return Err(StressError::ValueOverflow {
            scenario: r.scenario.name.clone(),
        });
    }

    let (worst_case_value, best_case_value) = scenario_results.iter().fold(
        (current_value, current_value),
        |(worst, best), r| (worst.min(r.portfolio_value), best.max(r.portfolio_value)),
    );

    let potential_loss = current_value - worst_case_value;
    let potential_gain = best_case_value - current_value;

    Ok(StressOutcome {
        current_value,
        worst_case_value,
        best_case_value,
        potential_loss,
        loss_percentage: 100.0 * potential_loss / current_value,
        potential_gain,
        gain_percentage: 100.0 * potential_gain / current_value,
        scenario_results,
    })
}

impl StressOutcome {
    /// The scenario with the lowest resulting value, if any.
    #[must_use]
    pub fn worst_scenario(&self) -> Option<&ScenarioResult> {
        self.scenario_results
            .iter()
            .min_by(|a, b| a.portfolio_value.total_cmp(&b.portfolio_value))
    }

    /// The scenario with the highest resulting value, if any.
    #[must_use]
    pub fn best_scenario(&self) -> Option<&ScenarioResult> {
        self.scenario_results
            .iter()
            .max_by(|a, b| a.portfolio_value.total_cmp(&b.portfolio_value))
    }
}
