//! Builder pattern for the stress engine.

use std::sync::Arc;

use stresstest_core::symbols::{SymbolEntry, SYMBOLS};
use stresstest_traits::{QuoteSource, TextGenerator};

use crate::error::EngineError;
use crate::StressEngine;

/// Builder for constructing a [`StressEngine`].
pub struct StressEngineBuilder {
    quotes: Option<Arc<dyn QuoteSource>>,
    generator: Option<Arc<dyn TextGenerator>>,
    directory: &'static [SymbolEntry],
}

impl StressEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            quotes: None,
            generator: None,
            directory: SYMBOLS,
        }
    }

    /// Set the market data source.
    pub fn with_quotes(mut self, quotes: Arc<dyn QuoteSource>) -> Self {
        self.quotes = Some(quotes);
        self
    }

    /// Set the text generator. Without one, fallbacks are always used.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Set an optional text generator.
    pub fn with_optional_generator(mut self, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        self.generator = generator;
        self
    }

    /// Replace the symbol directory used for search.
    pub fn with_directory(mut self, directory: &'static [SymbolEntry]) -> Self {
        self.directory = directory;
        self
    }

    /// Build the stress engine.
    pub fn build(self) -> Result<StressEngine, EngineError> {
        let quotes = self
            .quotes
            .ok_or_else(|| EngineError::ConfigError("quote source not configured".into()))?;

        Ok(StressEngine::new(quotes, self.generator, self.directory))
    }
}

impl Default for StressEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
