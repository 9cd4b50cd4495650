//! Templated advisory text.
//!
//! Used when generated insights are unavailable. The text is derived from the
//! report only and has no effect on the numbers in it.

use serde::{Deserialize, Serialize};

use crate::stress::StressTestReport;

/// Loss percentage above which the portfolio is considered high risk.
pub const HIGH_RISK_LOSS_PCT: f64 = 40.0;

/// Loss percentage above which the portfolio is considered moderate risk.
pub const MODERATE_RISK_LOSS_PCT: f64 = 25.0;

/// Risk band derived from the worst-case loss percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Loss above 40%.
    High,
    /// Loss above 25%.
    Moderate,
    /// Everything else.
    Low,
}

impl RiskBand {
    /// Classifies a worst-case loss percentage.
    #[must_use]
    pub fn from_loss_percentage(loss_percentage: f64) -> Self {
        if loss_percentage > HIGH_RISK_LOSS_PCT {
            Self::High
        } else if loss_percentage > MODERATE_RISK_LOSS_PCT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Lower-case label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }

    fn recommendation(&self) -> &'static str {
        match self {
            Self::High => {
                "Consider reducing concentration, adding defensive sectors or bonds, \
                 and hedging against severe drawdowns."
            }
            Self::Moderate => {
                "Consider rebalancing toward less correlated sectors to soften \
                 the impact of a broad correction."
            }
            Self::Low => {
                "The portfolio looks resilient; keep monitoring sector concentration \
                 as positions grow."
            }
        }
    }
}

/// Builds the deterministic fallback insight text for a report.
#[must_use]
pub fn templated_insights(report: &StressTestReport) -> String {
    let band = RiskBand::from_loss_percentage(report.loss_percentage);

    format!(
        "Your portfolio carries {} risk: the worst-case scenario implies a potential loss of {:.1}% \
         (${:.2}), while the best case suggests a potential gain of {:.1}% (${:.2}). \
         The portfolio contains {} priced position{} with a current value of ${:.2}. {}",
        band.label(),
        report.loss_percentage,
        report.potential_loss,
        report.gain_percentage,
        report.potential_gain,
        report.holding_count(),
        if report.holding_count() == 1 { "" } else { "s" },
        report.current_value,
        band.recommendation(),
    )
}
