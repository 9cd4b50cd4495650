//! Prompt construction and response parsing for generated text.
//!
//! The generator is asked for a bare JSON array of scenarios. Models often
//! wrap JSON in code fences anyway, so [`extract_json`] strips those before
//! parsing. Replace that function if the response format changes.

use serde::Deserialize;

use crate::error::{StressError, StressResult};
use crate::stress::{Scenario, StressTestReport};
use crate::valuation::PortfolioValuation;

/// Number of scenarios requested from the generator.
pub const REQUESTED_SCENARIOS: usize = 6;

/// Lowest impact accepted from a generated scenario (a total loss).
pub const MIN_IMPACT_PERCENT: f64 = -100.0;

/// Highest impact accepted from a generated scenario.
pub const MAX_IMPACT_PERCENT: f64 = 1000.0;

/// Builds the prompt asking for portfolio-specific scenarios.
#[must_use]
pub fn build_scenario_prompt(valuation: &PortfolioValuation) -> String {
    let holdings: String = valuation
        .priced_holdings
        .iter()
        .map(|h| {
            format!(
                "- {} ({}): {} shares at ${:.2}, sector {}\n",
                h.ticker, h.name, h.shares, h.current_price, h.sector
            )
        })
        .collect();

    let sectors: String = valuation
        .sector_mix()
        .iter()
        .map(|w| format!("- {}: {:.1}%\n", w.sector, w.weight_percent))
        .collect();

    format!(
        "You are a risk analyst. Design {REQUESTED_SCENARIOS} hypothetical market stress \
         scenarios for the equity portfolio below: 3 downside and 3 upside.\n\n\
         Holdings:\n{holdings}\n\
         Sector mix:\n{sectors}\n\
         Current value: ${current:.2}\n\n\
         Each scenario's impact is the percentage change of total portfolio value \
         (negative for losses, between {MIN_IMPACT_PERCENT} and {MAX_IMPACT_PERCENT}). \
         Tailor the scenarios to the sectors held.\n\
         Respond ONLY with a JSON array, no prose, in this exact shape:\n\
         [{{\"name\": \"string\", \"description\": \"one sentence\", \"impact\": -25.0}}]",
        current = valuation.current_value,
    )
}

/// Builds the prompt asking for a short advisory summary of a report.
#[must_use]
pub fn build_insight_prompt(report: &StressTestReport) -> String {
    let holdings: String = report
        .priced_holdings
        .iter()
        .map(|h| {
            format!(
                "- {}: {} shares at ${:.2} ({})\n",
                h.ticker, h.shares, h.current_price, h.sector
            )
        })
        .collect();

    let scenarios: String = report
        .scenario_results
        .iter()
        .map(|r| {
            format!(
                "- {} ({:+.1}%): portfolio ${:.2}, change ${:+.2}\n",
                r.scenario.name, r.scenario.impact_percent, r.portfolio_value, r.gain_or_loss
            )
        })
        .collect();

    format!(
        "Analyze this portfolio stress test:\n\n\
         Portfolio:\n{holdings}\n\
         Current Value: ${:.2}\n\
         Worst Case Value: ${:.2} (potential loss ${:.2}, {:.2}%)\n\
         Best Case Value: ${:.2} (potential gain ${:.2}, {:.2}%)\n\n\
         Scenarios:\n{scenarios}\n\
         Provide a brief 2-3 sentence analysis of the portfolio's risk profile and \
         concrete recommendations.",
        report.current_value,
        report.worst_case_value,
        report.potential_loss,
        report.loss_percentage,
        report.best_case_value,
        report.potential_gain,
        report.gain_percentage,
    )
}

/// Strips code-fence markup surrounding a JSON payload.
///
/// Handles ```` ```json ```` / ```` ``` ```` fences and leading prose before
/// the fence. Text without fences is returned trimmed.
#[must_use]
pub fn extract_json(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(start) = body.find("```") {
        body = &body[start + 3..];
        // Drop the language tag on the opening fence line.
        body = match body.find('\n') {
            Some(newline) if !body[..newline].trim_start().starts_with(['[', '{']) => {
                &body[newline + 1..]
            }
            _ => body.trim_start_matches("json"),
        };
        if let Some(end) = body.rfind("```") {
            body = &body[..end];
        }
    }

    body.trim()
}

#[derive(Debug, Deserialize)]
struct GeneratedScenario {
    name: String,
    description: String,
    impact: f64,
}

/// Parses generator output into scenarios.
///
/// # Errors
///
/// [`StressError::MalformedScenarios`] when the text is not a JSON array of
/// `{name, description, impact}` objects, the array is empty, or an impact is
/// not a finite number between [`MIN_IMPACT_PERCENT`] and [`MAX_IMPACT_PERCENT`].
pub fn parse_scenarios(text: &str) -> StressResult<Vec<Scenario>> {
    let generated: Vec<GeneratedScenario> = serde_json::from_str(extract_json(text))
        .map_err(|e| StressError::malformed(e.to_string()))?;

    if generated.is_empty() {
        return Err(StressError::malformed("no scenarios in response"));
    }

    generated
        .into_iter()
        .map(|g| {
            if !(MIN_IMPACT_PERCENT..=MAX_IMPACT_PERCENT).contains(&g.impact) {
                return Err(StressError::malformed(format!(
                    "impact {} out of range for '{}'",
                    g.impact, g.name
                )));
            }
            Ok(Scenario::new(g.name, g.description, g.impact))
        })
        .collect()
}
