//! Static quote table.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use stresstest_traits::{MarketQuote, QuoteSource, TraitError};

/// Quote source backed by a fixed table.
///
/// Records every requested symbol so tests can check lookup order.
#[derive(Default)]
pub struct InMemoryQuoteSource {
    quotes: HashMap<String, MarketQuote>,
    requests: Mutex<Vec<String>>,
}

impl InMemoryQuoteSource {
    /// Create an empty source; every lookup fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quote.
    pub fn with_quote(mut self, symbol: &str, price: f64, name: &str, sector: &str) -> Self {
        self.quotes.insert(
            symbol.to_string(),
            MarketQuote {
                symbol: symbol.to_string(),
                price,
                name: name.to_string(),
                sector: sector.to_string(),
            },
        );
        self
    }

    /// A table of representative prices for offline mode.
    pub fn demo() -> Self {
        Self::new()
            .with_quote("AAPL", 150.0, "Apple Inc.", "Technology")
            .with_quote("MSFT", 300.0, "Microsoft Corporation", "Technology")
            .with_quote("GOOGL", 140.0, "Alphabet Inc. Class A", "Communication Services")
            .with_quote("AMZN", 175.0, "Amazon.com Inc.", "Consumer Cyclical")
            .with_quote("NVDA", 120.0, "NVIDIA Corporation", "Technology")
            .with_quote("META", 480.0, "Meta Platforms Inc.", "Communication Services")
            .with_quote("TSLA", 210.0, "Tesla Inc.", "Consumer Cyclical")
            .with_quote("JPM", 200.0, "JPMorgan Chase & Co.", "Financial Services")
            .with_quote("V", 275.0, "Visa Inc.", "Financial Services")
            .with_quote("JNJ", 155.0, "Johnson & Johnson", "Healthcare")
            .with_quote("WMT", 68.0, "Walmart Inc.", "Consumer Defensive")
            .with_quote("XOM", 115.0, "Exxon Mobil Corporation", "Energy")
            .with_quote("SPY", 520.0, "SPDR S&P 500 ETF Trust", "ETF")
            .with_quote("QQQ", 445.0, "Invesco QQQ Trust", "ETF")
    }

    /// Symbols requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Number of quotes in the table.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[async_trait]
impl QuoteSource for InMemoryQuoteSource {
    fn name(&self) -> &str {
        "in-memory"
    }

    async fn get_quote(&self, symbol: &str) -> Result<MarketQuote, TraitError> {
        self.requests.lock().push(symbol.to_string());

        self.quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| TraitError::NotFound(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_and_request_log() {
        let source = InMemoryQuoteSource::new().with_quote("AAPL", 150.0, "Apple Inc.", "Technology");

        let quote = source.get_quote("AAPL").await.unwrap();
        assert_eq!(quote.price, 150.0);

        let err = source.get_quote("NOPE").await.unwrap_err();
        assert!(matches!(err, TraitError::NotFound(_)));

        assert_eq!(source.requests(), vec!["AAPL".to_string(), "NOPE".to_string()]);
    }

    #[test]
    fn test_demo_table() {
        let source = InMemoryQuoteSource::demo();
        assert!(!source.is_empty());
        assert!(source.len() >= 10);
    }
}
