//! Yahoo Finance chart API quote source.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use stresstest_traits::{MarketQuote, QuoteSource, TraitError};
use tracing::debug;

use crate::transport_error;

/// Default chart API endpoint.
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

const USER_AGENT: &str = concat!("stresstest/", env!("CARGO_PKG_VERSION"));

/// Yahoo quote source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YahooConfig {
    /// Chart endpoint; `/{symbol}` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_YAHOO_BASE_URL.to_string()
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Maps display aliases to Yahoo instrument codes.
///
/// Unknown symbols are returned unchanged.
#[must_use]
pub fn provider_symbol(symbol: &str) -> &str {
    match symbol {
        "SPX" | "SP500" => "^GSPC",
        "NDX" | "NASDAQ" => "^NDX",
        "DJI" | "DOW" => "^DJI",
        "VIX" => "^VIX",
        "ES" => "ES=F",
        "NQ" => "NQ=F",
        "GOLD" => "GC=F",
        "OIL" => "CL=F",
        other => other,
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
    long_name: Option<String>,
    short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

/// Parses a chart API response body into a quote for `symbol`.
///
/// The price is `regularMarketPrice`, falling back to `previousClose` and
/// then `chartPreviousClose`. The name is `longName`, then `shortName`, then
/// the symbol. Yahoo's chart endpoint carries no sector, so it is left as
/// `"Unknown"` for the engine to resolve.
pub fn parse_chart_response(symbol: &str, body: &str) -> Result<MarketQuote, TraitError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| TraitError::ParseError(format!("yahoo: {e}")))?;

    if let Some(err) = envelope.chart.error {
        let message = err
            .description
            .or(err.code)
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(TraitError::NotFound(format!("{symbol}: {message}")));
    }

    let meta = envelope
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .map(|r| r.meta)
        .ok_or_else(|| TraitError::NotFound(format!("{symbol}: empty chart result")))?;

    let price = meta
        .regular_market_price
        .or(meta.previous_close)
        .or(meta.chart_previous_close)
        .ok_or_else(|| TraitError::NotFound(format!("{symbol}: no price in response")))?;

    Ok(MarketQuote {
        symbol: symbol.to_string(),
        price,
        name: meta
            .long_name
            .or(meta.short_name)
            .unwrap_or_else(|| symbol.to_string()),
        sector: "Unknown".to_string(),
    })
}

/// Quote source backed by the Yahoo Finance chart API.
///
/// The chart endpoint has no sector field, so quotes always carry
/// `"Unknown"`. The engine replaces it from the static symbol directory;
/// tickers outside that directory stay `"Unknown"` in the sector mix.
pub struct YahooQuoteSource {
    client: Client,
    config: YahooConfig,
}

impl YahooQuoteSource {
    /// Create a new source.
    pub fn new(config: YahooConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a source sharing an existing client.
    pub fn with_client(client: Client, config: YahooConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, symbol: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            provider_symbol(symbol)
        )
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn get_quote(&self, symbol: &str) -> Result<MarketQuote, TraitError> {
        if symbol.is_empty() {
            return Err(TraitError::InvalidInput("empty symbol".into()));
        }

        let url = self.url(symbol);
        debug!("Fetching quote {} from {}", symbol, url);

        let response = self
            .client
            .get(&url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error("yahoo", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("yahoo", e))?;

        // Yahoo reports unknown symbols as 404 with a chart error body.
        if !status.is_success() && status.as_u16() != 404 {
            return Err(TraitError::from_status(status.as_u16(), body));
        }

        parse_chart_response(symbol, &body)
    }
}
