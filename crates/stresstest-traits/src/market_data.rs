//! Market data source traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;

/// Spot quote for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Symbol as requested by the caller (before any alias mapping).
    pub symbol: String,
    /// Last price
    pub price: f64,
    /// Display name
    pub name: String,
    /// Sector ("Unknown" when the source has none)
    pub sector: String,
}

/// Trait for spot price lookup.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &str;

    /// Get the current quote for a normalized ticker.
    async fn get_quote(&self, symbol: &str) -> Result<MarketQuote, TraitError>;
}
