//! # Stresstest Engine
//!
//! Orchestrates a portfolio stress test over injected collaborators.
//!
//! ## Flow
//!
//! ```text
//! Holdings ─> price_portfolio (QuoteSource, sequential) ─> PortfolioValuation
//!                                                              │
//!             generate_scenarios (TextGenerator | fallback) ───┤
//!                                                              v
//!                                                      StressTestReport
//!                                                              │
//!             generate_insights (TextGenerator | template) ────┘─> advisory text
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let engine = StressEngineBuilder::new()
//!     .with_quotes(Arc::new(YahooQuoteSource::new(config)))
//!     .with_optional_generator(gemini.map(|g| Arc::new(g) as Arc<dyn TextGenerator>))
//!     .build()?;
//!
//! let run = engine.run_stress_test(&holdings).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod error;
pub mod insights;
pub mod lookup;
pub mod pricing;
pub mod scenario_source;

// Re-exports
pub use builder::StressEngineBuilder;
pub use error::EngineError;
pub use lookup::{StockMatch, TickerValidation};
pub use scenario_source::{ScenarioOrigin, ScenarioSet};

use std::sync::Arc;

use stresstest_core::stress::StressTestReport;
use stresstest_core::symbols::SymbolEntry;
use stresstest_core::types::Holding;
use stresstest_core::valuation::{validate_portfolio, PortfolioValuation};
use stresstest_traits::{QuoteSource, TextGenerator};
use tracing::{info, warn};

/// Result of a full stress test run.
#[derive(Debug, Clone)]
pub struct StressTestRun {
    /// Numeric report.
    pub report: StressTestReport,
    /// Advisory text (generated or templated).
    pub ai_insights: String,
    /// Where the scenarios came from.
    pub scenario_origin: ScenarioOrigin,
}

/// The stress test engine.
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct StressEngine {
    /// Market data source
    quotes: Arc<dyn QuoteSource>,

    /// Text generator, if configured
    generator: Option<Arc<dyn TextGenerator>>,

    /// Symbol directory for search
    directory: &'static [SymbolEntry],
}

impl StressEngine {
    /// Create a new stress engine.
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        generator: Option<Arc<dyn TextGenerator>>,
        directory: &'static [SymbolEntry],
    ) -> Self {
        Self {
            quotes,
            generator,
            directory,
        }
    }

    /// Name of the configured quote source.
    pub fn quote_source_name(&self) -> &str {
        self.quotes.name()
    }

    /// Model of the configured text generator, if any.
    pub fn generator_model(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.model())
    }

    /// Prices holdings, dropping those that cannot be priced.
    pub async fn price_portfolio(&self, holdings: &[Holding]) -> PortfolioValuation {
        pricing::price_portfolio(self.quotes.as_ref(), holdings).await
    }

    /// Selects scenarios for a valuation (generated, else fallback).
    pub async fn generate_scenarios(&self, valuation: &PortfolioValuation) -> ScenarioSet {
        scenario_source::generate_scenarios(self.generator.as_deref(), valuation).await
    }

    /// Produces advisory text for a report (generated, else templated).
    pub async fn generate_insights(&self, report: &StressTestReport) -> String {
        insights::generate_insights(self.generator.as_deref(), report).await
    }

    /// Runs a full stress test.
    ///
    /// # Errors
    ///
    /// - empty portfolio or invalid holding (client errors)
    /// - no holding could be priced
    pub async fn run_stress_test(&self, holdings: &[Holding]) -> Result<StressTestRun, EngineError> {
        validate_portfolio(holdings)?;

        let valuation = self.price_portfolio(holdings).await.require_priced()?;
        info!(
            "Valued {} of {} holdings at {:.2}",
            valuation.priced_holdings.len(),
            holdings.len(),
            valuation.current_value
        );

        let mut scenario_set = self.generate_scenarios(&valuation).await;
        let report = match StressTestReport::build(valuation.clone(), &scenario_set.scenarios) {
            Err(e) if scenario_set.origin == ScenarioOrigin::Generated => {
                warn!("Discarding generated scenarios: {}", e);
                scenario_set = ScenarioSet::fallback();
                StressTestReport::build(valuation, &scenario_set.scenarios)?
            }
            result => result?,
        };
        let ai_insights = self.generate_insights(&report).await;

        Ok(StressTestRun {
            report,
            ai_insights,
            scenario_origin: scenario_set.origin,
        })
    }

    /// Validates a single ticker against the quote source.
    pub async fn validate_ticker(&self, ticker: &str) -> TickerValidation {
        lookup::validate_ticker(self.quotes.as_ref(), ticker).await
    }

    /// Searches the symbol directory and prices the hits.
    pub async fn search_stocks(&self, query: &str) -> Vec<StockMatch> {
        lookup::search_stocks(self.quotes.as_ref(), self.directory, query).await
    }
}
