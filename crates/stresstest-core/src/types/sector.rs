//! Sector mix of a priced portfolio.

use serde::{Deserialize, Serialize};

use super::PricedHolding;

/// Portfolio value held in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorWeight {
    /// Sector name.
    pub sector: String,

    /// Total value held in the sector.
    pub value: f64,

    /// Share of total portfolio value, in percent.
    pub weight_percent: f64,
}

/// Aggregates priced holdings by sector.
///
/// Sectors appear in order of first occurrence. Weights are zero when the
/// total value is not positive.
#[must_use]
pub fn sector_mix(holdings: &[PricedHolding]) -> Vec<SectorWeight> {
    let mut mix: Vec<SectorWeight> = Vec::new();

    for holding in holdings {
        match mix.iter_mut().find(|w| w.sector == holding.sector) {
            Some(weight) => weight.value += holding.value,
            None => mix.push(SectorWeight {
                sector: holding.sector.clone(),
                value: holding.value,
                weight_percent: 0.0,
            }),
        }
    }

    let total: f64 = mix.iter().map(|w| w.value).sum();
    if total > 0.0 {
        for weight in &mut mix {
            weight.weight_percent = weight.value / total * 100.0;
        }
    }

    mix
}
