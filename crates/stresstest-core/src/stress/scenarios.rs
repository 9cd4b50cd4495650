//! Stress scenario definitions.

use serde::{Deserialize, Serialize};

/// Direction of a scenario's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSign {
    /// Portfolio value falls.
    Downside,
    /// Portfolio value rises or is unchanged.
    Upside,
}

impl ScenarioSign {
    /// Classifies an impact percentage.
    #[must_use]
    pub fn from_impact(impact_percent: f64) -> Self {
        if impact_percent < 0.0 {
            Self::Downside
        } else {
            Self::Upside
        }
    }
}

/// A hypothetical market move applied uniformly to portfolio value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,

    /// Short narrative of the scenario.
    pub description: String,

    /// Percentage move of total portfolio value (e.g. -40.0 for a 40% drop).
    #[serde(rename = "impact", alias = "impact_percent")]
    pub impact_percent: f64,

    /// Direction of the move.
    pub sign: ScenarioSign,
}

impl Scenario {
    /// Creates a scenario; the sign follows the impact.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, impact_percent: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            impact_percent,
            sign: ScenarioSign::from_impact(impact_percent),
        }
    }

    /// Impact as a decimal multiplier offset (e.g. -40% = -0.40).
    #[must_use]
    pub fn impact_decimal(&self) -> f64 {
        self.impact_percent / 100.0
    }

    /// Returns true for a downside scenario.
    #[must_use]
    pub fn is_downside(&self) -> bool {
        self.sign == ScenarioSign::Downside
    }
}

/// The fixed scenario set used when generated scenarios are unavailable.
///
/// Three downside and three upside moves.
#[must_use]
pub fn fallback_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Market Crash",
            "Severe market downturn similar to the 2008 financial crisis",
            -40.0,
        ),
        Scenario::new(
            "Tech Sector Correction",
            "Technology stocks experience a significant correction",
            -25.0,
        ),
        Scenario::new(
            "Interest Rate Shock",
            "Federal Reserve raises rates aggressively to fight inflation",
            -15.0,
        ),
        Scenario::new(
            "Economic Recovery",
            "Steady growth lifts earnings across most sectors",
            15.0,
        ),
        Scenario::new(
            "Tech Rally",
            "Strong technology earnings drive a broad rally in growth stocks",
            25.0,
        ),
        Scenario::new(
            "Bull Market Surge",
            "Sustained risk-on sentiment pushes equities sharply higher",
            35.0,
        ),
    ]
}
