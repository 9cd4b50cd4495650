//! Ticker validation and symbol search.

use serde::Serialize;
use stresstest_core::symbols::{self, SymbolEntry};
use stresstest_core::types::normalize_ticker;
use stresstest_traits::QuoteSource;
use tracing::debug;

use crate::pricing::resolve_sector;

/// Result of validating one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerValidation {
    /// Whether the ticker resolved to a usable price.
    pub valid: bool,
    /// Normalized ticker.
    pub ticker: String,
    /// Display name, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current price, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Sector, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Reason the ticker is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TickerValidation {
    fn invalid(ticker: String, error: impl Into<String>) -> Self {
        Self {
            valid: false,
            ticker,
            name: None,
            current_price: None,
            sector: None,
            error: Some(error.into()),
        }
    }
}

/// Checks that a ticker resolves to a positive price.
pub async fn validate_ticker(quotes: &dyn QuoteSource, ticker: &str) -> TickerValidation {
    let ticker = normalize_ticker(ticker);

    match quotes.get_quote(&ticker).await {
        Ok(quote) if quote.price.is_finite() && quote.price > 0.0 => {
            let sector = resolve_sector(&quote);
            TickerValidation {
                valid: true,
                ticker,
                name: Some(quote.name),
                current_price: Some(quote.price),
                sector: Some(sector),
                error: None,
            }
        }
        Ok(quote) => TickerValidation::invalid(ticker, format!("No valid price ({})", quote.price)),
        Err(e) => TickerValidation::invalid(ticker, format!("Ticker not found: {e}")),
    }
}

/// One search hit enriched with a live price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockMatch {
    /// Ticker symbol.
    pub ticker: String,
    /// Display name.
    pub name: String,
    /// Current price, or `None` when the lookup failed.
    pub price: Option<f64>,
    /// Sector.
    pub sector: String,
}

/// Searches `directory` and prices each hit, sequentially.
pub async fn search_stocks(
    quotes: &dyn QuoteSource,
    directory: &[SymbolEntry],
    query: &str,
) -> Vec<StockMatch> {
    let mut results = Vec::new();

    for entry in symbols::search_in(directory, query) {
        let price = match quotes.get_quote(entry.ticker).await {
            Ok(quote) if quote.price.is_finite() && quote.price > 0.0 => Some(quote.price),
            Ok(_) => None,
            Err(e) => {
                debug!("No price for search hit {}: {}", entry.ticker, e);
                None
            }
        };

        results.push(StockMatch {
            ticker: entry.ticker.to_string(),
            name: entry.name.to_string(),
            price,
            sector: entry.sector.to_string(),
        });
    }

    results
}
