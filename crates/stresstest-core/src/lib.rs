//! # Stresstest Core
//!
//! Valuation and scenario analytics for equity portfolio stress tests.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Prices supplied by the caller**: Market data lookup lives in the engine
//! - **Uniform scenarios**: A scenario moves total portfolio value by a percentage
//!
//! ## Quick Start
//!
//! ```rust
//! use stresstest_core::prelude::*;
//!
//! let valuation = PortfolioValuation::from_priced(vec![
//!     Holding::new("AAPL", 10.0).priced(150.0, "Apple Inc.", "Technology").unwrap(),
//!     Holding::new("MSFT", 5.0).priced(300.0, "Microsoft", "Technology").unwrap(),
//! ]);
//!
//! let report = StressTestReport::build(valuation, &fallback_scenarios()).unwrap();
//! assert_eq!(report.current_value, 3000.0);
//! assert!(report.worst_case_value <= report.current_value);
//! ```
//!
//! ## Module Overview
//!
//! - [`types`] - Holdings before and after pricing, sector mix
//! - [`valuation`] - Portfolio totals and request validation
//! - [`stress`] - Scenarios, scenario application and the report
//! - [`insights`] - Templated advisory text and risk bands
//! - [`prompt`] - Prompt construction and generated-response parsing
//! - [`symbols`] - Static symbol directory search

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod insights;
pub mod prompt;
pub mod stress;
pub mod symbols;
pub mod types;
pub mod valuation;

pub use error::{StressError, StressResult};

/// Commonly used types.
pub mod prelude {
    pub use crate::error::{StressError, StressResult};
    pub use crate::insights::{templated_insights, RiskBand};
    pub use crate::stress::{
        apply_scenario, fallback_scenarios, run_scenarios, Scenario, ScenarioResult,
        ScenarioSign, StressOutcome, StressTestReport,
    };
    pub use crate::symbols::SymbolEntry;
    pub use crate::types::{normalize_ticker, Holding, PricedHolding, SectorWeight};
    pub use crate::valuation::{validate_portfolio, PortfolioValuation};
}
