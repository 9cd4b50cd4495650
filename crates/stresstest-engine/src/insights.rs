//! Advisory text with a templated fallback.

use stresstest_core::insights::templated_insights;
use stresstest_core::prompt::build_insight_prompt;
use stresstest_core::stress::StressTestReport;
use stresstest_traits::TextGenerator;
use tracing::warn;

/// Produces the advisory summary for a report.
///
/// The generator's text is returned unmodified. A missing generator, a failed
/// call or a blank response falls back to [`templated_insights`].
pub async fn generate_insights(
    generator: Option<&dyn TextGenerator>,
    report: &StressTestReport,
) -> String {
    let Some(generator) = generator else {
        return templated_insights(report);
    };

    match generator.generate(&build_insight_prompt(report)).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Insight generation via {} returned no text", generator.model());
            templated_insights(report)
        }
        Err(e) => {
            warn!("Insight generation via {} failed: {}", generator.model(), e);
            templated_insights(report)
        }
    }
}
