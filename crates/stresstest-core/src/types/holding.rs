//! Holding representation before and after pricing.

use serde::{Deserialize, Serialize};

use crate::error::{StressError, StressResult};

/// Normalizes a ticker symbol for lookup (trimmed, upper-case).
#[must_use]
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_ascii_uppercase()
}

/// A single requested position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol as supplied by the caller.
    pub ticker: String,

    /// Number of shares (must be positive).
    pub shares: f64,
}

impl Holding {
    /// Creates a new holding.
    #[must_use]
    pub fn new(ticker: impl Into<String>, shares: f64) -> Self {
        Self {
            ticker: ticker.into(),
            shares,
        }
    }

    /// The normalized ticker used for price lookup.
    #[must_use]
    pub fn symbol(&self) -> String {
        normalize_ticker(&self.ticker)
    }

    /// Checks that the holding can be priced at all.
    pub fn validate(&self) -> StressResult<()> {
        if self.ticker.trim().is_empty() {
            return Err(StressError::invalid_holding(
                &self.ticker,
                "ticker must not be blank",
            ));
        }
        if !self.shares.is_finite() || self.shares <= 0.0 {
            return Err(StressError::invalid_holding(
                &self.ticker,
                format!("shares must be a positive number, got {}", self.shares),
            ));
        }
        Ok(())
    }

    /// Attaches market data to this holding.
    ///
    /// Returns `None` when the price cannot be used for valuation
    /// (non-finite or not strictly positive) or the position value overflows.
    #[must_use]
    pub fn priced(
        &self,
        current_price: f64,
        name: impl Into<String>,
        sector: impl Into<String>,
    ) -> Option<PricedHolding> {
        if !current_price.is_finite() || current_price <= 0.0 {
            return None;
        }
        let value = current_price * self.shares;
        if !value.is_finite() {
            return None;
        }

        Some(PricedHolding {
            ticker: self.symbol(),
            shares: self.shares,
            current_price,
            name: name.into(),
            sector: sector.into(),
            value,
        })
    }
}

/// A holding with its current market value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedHolding {
    /// Normalized ticker symbol.
    pub ticker: String,

    /// Number of shares.
    pub shares: f64,

    /// Current unit price.
    pub current_price: f64,

    /// Display name of the instrument.
    pub name: String,

    /// Sector classification ("Unknown" when unavailable).
    pub sector: String,

    /// Position value (`current_price × shares`).
    pub value: f64,
}
