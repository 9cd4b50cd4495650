//! Portfolio pricing through a [`QuoteSource`].

use stresstest_core::symbols;
use stresstest_core::types::Holding;
use stresstest_core::valuation::PortfolioValuation;
use stresstest_traits::{MarketQuote, QuoteSource};
use tracing::{debug, warn};

/// Sector used when neither the quote nor the directory knows one.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Prices holdings one at a time, in request order.
///
/// Holdings whose quote fails or whose price is unusable are dropped and
/// logged; the rest are valued normally.
pub async fn price_portfolio(quotes: &dyn QuoteSource, holdings: &[Holding]) -> PortfolioValuation {
    let mut priced = Vec::with_capacity(holdings.len());

    for holding in holdings {
        let symbol = holding.symbol();
        let quote = match quotes.get_quote(&symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Dropping {} from valuation: {}", symbol, e);
                continue;
            }
        };

        let sector = resolve_sector(&quote);
        match holding.priced(quote.price, quote.name, sector) {
            Some(p) => {
                debug!("Priced {} x {} at {}", p.ticker, p.shares, p.current_price);
                priced.push(p);
            }
            None => warn!(
                "Dropping {} from valuation: unusable price {} for {} shares",
                symbol, quote.price, holding.shares
            ),
        }
    }

    PortfolioValuation::from_priced(priced)
}

/// Sector from the quote, falling back to the symbol directory.
pub(crate) fn resolve_sector(quote: &MarketQuote) -> String {
    if !quote.sector.is_empty() && quote.sector != UNKNOWN_SECTOR {
        return quote.sector.clone();
    }
    symbols::lookup(&quote.symbol)
        .map(|e| e.sector.to_string())
        .unwrap_or_else(|| UNKNOWN_SECTOR.to_string())
}
