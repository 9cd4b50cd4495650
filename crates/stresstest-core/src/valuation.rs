//! Portfolio valuation.
//!
//! ```text
//! value = Σ price(ticker) × shares
//! ```
//!
//! Holdings that could not be priced never reach this module; the caller
//! drops them. Duplicate tickers are summed independently.

use serde::{Deserialize, Serialize};

use crate::error::{StressError, StressResult};
use crate::types::{sector_mix, Holding, PricedHolding, SectorWeight};

/// Checks a requested portfolio before any pricing is attempted.
///
/// # Errors
///
/// [`StressError::EmptyPortfolio`] for no holdings, otherwise the first
/// holding validation failure.
pub fn validate_portfolio(holdings: &[Holding]) -> StressResult<()> {
    if holdings.is_empty() {
        return Err(StressError::EmptyPortfolio);
    }
    holdings.iter().try_for_each(Holding::validate)
}

/// Current value of the priced part of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Sum of all priced holding values.
    pub current_value: f64,

    /// Holdings included in the total, in request order.
    pub priced_holdings: Vec<PricedHolding>,
}

impl PortfolioValuation {
    /// Totals a list of priced holdings.
    #[must_use]
    pub fn from_priced(priced_holdings: Vec<PricedHolding>) -> Self {
        let current_value: f64 = priced_holdings.iter().map(|h| h.value).sum();
        Self {
            current_value,
            priced_holdings,
        }
    }

    /// Returns true if nothing could be priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priced_holdings.is_empty() || self.current_value <= 0.0
    }

    /// Rejects a valuation that has nothing to stress.
    ///
    /// # Errors
    ///
    /// [`StressError::NoPricedHoldings`] when the total is zero.
    pub fn require_priced(self) -> StressResult<Self> {
        if self.is_empty() {
            Err(StressError::NoPricedHoldings)
        } else {
            Ok(self)
        }
    }

    /// Sector mix of the priced holdings.
    #[must_use]
    pub fn sector_mix(&self) -> Vec<SectorWeight> {
        sector_mix(&self.priced_holdings)
    }
}
