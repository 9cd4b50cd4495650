//! Scenario generation with a static fallback.

use serde::Serialize;
use stresstest_core::prompt::{build_scenario_prompt, parse_scenarios};
use stresstest_core::stress::{fallback_scenarios, Scenario};
use stresstest_core::valuation::PortfolioValuation;
use stresstest_traits::TextGenerator;
use tracing::{info, warn};

/// Where a scenario set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioOrigin {
    /// Produced by the text generator for this portfolio.
    Generated,
    /// The fixed fallback list.
    Fallback,
}

/// Scenarios selected for a stress test.
#[derive(Debug, Clone)]
pub struct ScenarioSet {
    /// The scenarios to apply.
    pub scenarios: Vec<Scenario>,
    /// Where they came from.
    pub origin: ScenarioOrigin,
}

impl ScenarioSet {
    /// The fixed fallback set.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            scenarios: fallback_scenarios(),
            origin: ScenarioOrigin::Fallback,
        }
    }
}

/// Asks the generator for portfolio-specific scenarios.
///
/// One attempt only. Any failure, including a missing generator, yields
/// [`ScenarioSet::fallback`]; this function never fails.
pub async fn generate_scenarios(
    generator: Option<&dyn TextGenerator>,
    valuation: &PortfolioValuation,
) -> ScenarioSet {
    let Some(generator) = generator else {
        info!("No text generator configured, using fallback scenarios");
        return ScenarioSet::fallback();
    };

    let prompt = build_scenario_prompt(valuation);
    let text = match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Scenario generation via {} failed: {}", generator.model(), e);
            return ScenarioSet::fallback();
        }
    };

    match parse_scenarios(&text) {
        Ok(scenarios) => {
            info!(
                "Generated {} scenarios via {}",
                scenarios.len(),
                generator.model()
            );
            ScenarioSet {
                scenarios,
                origin: ScenarioOrigin::Generated,
            }
        }
        Err(e) => {
            warn!("Discarding generated scenarios: {}", e);
            ScenarioSet::fallback()
        }
    }
}
