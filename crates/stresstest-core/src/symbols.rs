//! Static symbol directory used for ticker autocomplete.

use serde::{Deserialize, Serialize};

use crate::types::normalize_ticker;

/// Maximum number of search results returned.
pub const MAX_SEARCH_RESULTS: usize = 8;

/// One entry of the symbol directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    /// Ticker symbol.
    pub ticker: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Sector classification.
    pub sector: &'static str,
}

const fn entry(ticker: &'static str, name: &'static str, sector: &'static str) -> SymbolEntry {
    SymbolEntry {
        ticker,
        name,
        sector,
    }
}

/// Well-known symbols, in display order.
pub const SYMBOLS: &[SymbolEntry] = &[
    entry("AAPL", "Apple Inc.", "Technology"),
    entry("MSFT", "Microsoft Corporation", "Technology"),
    entry("GOOGL", "Alphabet Inc. Class A", "Communication Services"),
    entry("GOOG", "Alphabet Inc. Class C", "Communication Services"),
    entry("AMZN", "Amazon.com Inc.", "Consumer Cyclical"),
    entry("NVDA", "NVIDIA Corporation", "Technology"),
    entry("META", "Meta Platforms Inc.", "Communication Services"),
    entry("TSLA", "Tesla Inc.", "Consumer Cyclical"),
    entry("BRK-B", "Berkshire Hathaway Inc. Class B", "Financial Services"),
    entry("JPM", "JPMorgan Chase & Co.", "Financial Services"),
    entry("V", "Visa Inc.", "Financial Services"),
    entry("MA", "Mastercard Incorporated", "Financial Services"),
    entry("BAC", "Bank of America Corporation", "Financial Services"),
    entry("WFC", "Wells Fargo & Company", "Financial Services"),
    entry("GS", "The Goldman Sachs Group Inc.", "Financial Services"),
    entry("JNJ", "Johnson & Johnson", "Healthcare"),
    entry("UNH", "UnitedHealth Group Incorporated", "Healthcare"),
    entry("PFE", "Pfizer Inc.", "Healthcare"),
    entry("ABBV", "AbbVie Inc.", "Healthcare"),
    entry("LLY", "Eli Lilly and Company", "Healthcare"),
    entry("MRK", "Merck & Co. Inc.", "Healthcare"),
    entry("WMT", "Walmart Inc.", "Consumer Defensive"),
    entry("PG", "The Procter & Gamble Company", "Consumer Defensive"),
    entry("KO", "The Coca-Cola Company", "Consumer Defensive"),
    entry("PEP", "PepsiCo Inc.", "Consumer Defensive"),
    entry("COST", "Costco Wholesale Corporation", "Consumer Defensive"),
    entry("HD", "The Home Depot Inc.", "Consumer Cyclical"),
    entry("MCD", "McDonald's Corporation", "Consumer Cyclical"),
    entry("NKE", "NIKE Inc.", "Consumer Cyclical"),
    entry("DIS", "The Walt Disney Company", "Communication Services"),
    entry("NFLX", "Netflix Inc.", "Communication Services"),
    entry("XOM", "Exxon Mobil Corporation", "Energy"),
    entry("CVX", "Chevron Corporation", "Energy"),
    entry("AMD", "Advanced Micro Devices Inc.", "Technology"),
    entry("INTC", "Intel Corporation", "Technology"),
    entry("CRM", "Salesforce Inc.", "Technology"),
    entry("ORCL", "Oracle Corporation", "Technology"),
    entry("ADBE", "Adobe Inc.", "Technology"),
    entry("CSCO", "Cisco Systems Inc.", "Technology"),
    entry("AVGO", "Broadcom Inc.", "Technology"),
    entry("QCOM", "QUALCOMM Incorporated", "Technology"),
    entry("IBM", "International Business Machines Corporation", "Technology"),
    entry("BA", "The Boeing Company", "Industrials"),
    entry("CAT", "Caterpillar Inc.", "Industrials"),
    entry("GE", "GE Aerospace", "Industrials"),
    entry("UPS", "United Parcel Service Inc.", "Industrials"),
    entry("NEE", "NextEra Energy Inc.", "Utilities"),
    entry("AMT", "American Tower Corporation", "Real Estate"),
    entry("LIN", "Linde plc", "Basic Materials"),
    entry("SPY", "SPDR S&P 500 ETF Trust", "ETF"),
    entry("QQQ", "Invesco QQQ Trust", "ETF"),
    entry("VTI", "Vanguard Total Stock Market ETF", "ETF"),
    entry("IWM", "iShares Russell 2000 ETF", "ETF"),
    entry("GLD", "SPDR Gold Shares", "ETF"),
    entry("TLT", "iShares 20+ Year Treasury Bond ETF", "ETF"),
    entry("SPX", "S&P 500 Index", "Index"),
    entry("NDX", "NASDAQ-100 Index", "Index"),
    entry("DJI", "Dow Jones Industrial Average", "Index"),
];

/// Looks up a directory entry by exact (normalized) ticker.
#[must_use]
pub fn lookup(ticker: &str) -> Option<&'static SymbolEntry> {
    let ticker = normalize_ticker(ticker);
    SYMBOLS.iter().find(|e| e.ticker == ticker)
}

/// Searches the directory.
///
/// Ticker prefix matches come first, then entries whose ticker or name
/// contains the query. Matching is case-insensitive; a blank query matches
/// nothing. At most [`MAX_SEARCH_RESULTS`] entries are returned.
#[must_use]
pub fn search(query: &str) -> Vec<&'static SymbolEntry> {
    search_in(SYMBOLS, query)
}

/// [`search`] over an arbitrary directory.
#[must_use]
pub fn search_in<'a>(directory: &'a [SymbolEntry], query: &str) -> Vec<&'a SymbolEntry> {
    let query = normalize_ticker(query);
    if query.is_empty() {
        return Vec::new();
    }

    let (prefix, rest): (Vec<&SymbolEntry>, Vec<&SymbolEntry>) = directory
        .iter()
        .partition(|e| e.ticker.starts_with(&query));

    let substring = rest.into_iter().filter(|e| {
        e.ticker.contains(&query) || e.name.to_ascii_uppercase().contains(&query)
    });

    prefix
        .into_iter()
        .chain(substring)
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
