//! # Stresstest Traits
//!
//! Trait definitions for the external collaborators of the stress test engine.
//!
//! This crate contains ONLY trait definitions and their shared value types.
//! All implementations are in separate extension crates.
//!
//! ## Module Structure
//!
//! - [`market_data`]: Spot price, name and sector lookup by ticker
//! - [`text_generation`]: Prompt in, free text out
//!
//! ## Dependency Injection
//!
//! ```ignore
//! StressEngineBuilder::new()
//!     .with_quotes(Arc::new(impl QuoteSource))
//!     .with_generator(Arc::new(impl TextGenerator))
//!     .build()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod market_data;
pub mod text_generation;

// Re-export commonly used types
pub use error::TraitError;
pub use market_data::{MarketQuote, QuoteSource};
pub use text_generation::TextGenerator;
