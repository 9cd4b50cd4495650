//! Application state.

use std::sync::Arc;

use stresstest_engine::{EngineError, StressEngine, StressEngineBuilder};
use stresstest_ext_http::{GeminiTextGenerator, YahooQuoteSource};
use stresstest_ext_memory::InMemoryQuoteSource;
use stresstest_traits::{QuoteSource, TextGenerator};

use crate::config::ServerConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Stress engine.
    pub engine: Arc<StressEngine>,
}

impl AppState {
    /// Wrap an engine.
    pub fn new(engine: StressEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Build the engine described by `config`.
    ///
    /// Offline mode uses the static quote table and no generator. Otherwise
    /// quotes come from Yahoo and the generator is enabled when an API key is
    /// configured.
    pub fn from_config(config: &ServerConfig, offline: bool) -> Result<Self, EngineError> {
        let (quotes, generator): (Arc<dyn QuoteSource>, Option<Arc<dyn TextGenerator>>) =
            if offline {
                (Arc::new(InMemoryQuoteSource::demo()), None)
            } else {
                let generator = GeminiTextGenerator::from_config(config.generator.clone())
                    .map(|g| Arc::new(g) as Arc<dyn TextGenerator>);
                (
                    Arc::new(YahooQuoteSource::new(config.market_data.clone())),
                    generator,
                )
            };

        let engine = StressEngineBuilder::new()
            .with_quotes(quotes)
            .with_optional_generator(generator)
            .build()?;

        tracing::info!(
            "Engine ready: quotes from {}, generator {}",
            engine.quote_source_name(),
            engine.generator_model().unwrap_or("disabled")
        );

        Ok(Self::new(engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stresstest_ext_http::GeminiConfig;

    #[test]
    fn test_offline_state() {
        let state = AppState::from_config(&ServerConfig::default(), true).unwrap();
        assert_eq!(state.engine.quote_source_name(), "in-memory");
        assert!(state.engine.generator_model().is_none());
    }

    #[test]
    fn test_online_state_without_key() {
        let state = AppState::from_config(&ServerConfig::default(), false).unwrap();
        assert_eq!(state.engine.quote_source_name(), "yahoo");
        assert!(state.engine.generator_model().is_none());
    }

    #[test]
    fn test_online_state_with_key() {
        let config = ServerConfig {
            generator: GeminiConfig {
                api_key: Some("key".into()),
                ..GeminiConfig::default()
            },
            ..ServerConfig::default()
        };
        let state = AppState::from_config(&config, false).unwrap();
        assert_eq!(state.engine.generator_model(), Some("gemini-1.5-flash"));
    }

    #[test]
    fn test_state_is_clone() {
        let state = AppState::from_config(&ServerConfig::default(), true).unwrap();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.engine, &cloned.engine));
    }
}
