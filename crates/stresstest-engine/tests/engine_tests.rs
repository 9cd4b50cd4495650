//! Engine tests over in-memory collaborators.

use std::sync::Arc;

use approx::assert_relative_eq;
use stresstest_core::prelude::*;
use stresstest_engine::{EngineError, ScenarioOrigin, StressEngine, StressEngineBuilder};
use stresstest_ext_memory::{FailingTextGenerator, InMemoryQuoteSource, ScriptedTextGenerator};

const GENERATED: &str = r#"```json
[
  {"name": "AI Capex Pullback", "description": "Hyperscalers cut spending", "impact": -30},
  {"name": "Rate Cuts", "description": "Fed eases faster than expected", "impact": 12.5}
]
```"#;

fn quotes() -> Arc<InMemoryQuoteSource> {
    Arc::new(
        InMemoryQuoteSource::new()
            .with_quote("AAPL", 150.0, "Apple Inc.", "Technology")
            .with_quote("MSFT", 300.0, "Microsoft Corporation", "Technology")
            .with_quote("ZERO", 0.0, "Delisted Corp", "Unknown"),
    )
}

fn engine_with(generator: Option<Arc<dyn stresstest_traits::TextGenerator>>) -> StressEngine {
    StressEngineBuilder::new()
        .with_quotes(quotes())
        .with_optional_generator(generator)
        .build()
        .unwrap()
}

fn sample_portfolio() -> Vec<Holding> {
    vec![Holding::new("AAPL", 10.0), Holding::new("msft", 5.0)]
}

// =============================================================================
// BUILDER
// =============================================================================

#[test]
fn test_builder_requires_quotes() {
    let result = StressEngineBuilder::new().build();
    assert!(matches!(result, Err(EngineError::ConfigError(_))));
}

// =============================================================================
// VALUATION
// =============================================================================

#[tokio::test]
async fn test_price_portfolio_sums_holdings() {
    let engine = engine_with(None);
    let valuation = engine.price_portfolio(&sample_portfolio()).await;

    assert_relative_eq!(valuation.current_value, 3000.0);
    assert_eq!(valuation.priced_holdings[1].ticker, "MSFT");
    assert_eq!(valuation.priced_holdings[1].name, "Microsoft Corporation");
}

#[tokio::test]
async fn test_unpriceable_holdings_dropped() {
    let engine = engine_with(None);
    let holdings = vec![
        Holding::new("AAPL", 10.0),
        Holding::new("TYPO", 100.0),
        Holding::new("ZERO", 50.0),
        Holding::new("MSFT", 5.0),
    ];

    let valuation = engine.price_portfolio(&holdings).await;

    let tickers: Vec<_> = valuation.priced_holdings.iter().map(|h| h.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    assert_relative_eq!(valuation.current_value, 3000.0);
}

#[tokio::test]
async fn test_lookups_are_sequential_in_request_order() {
    let source = quotes();
    let engine = StressEngineBuilder::new().with_quotes(source.clone()).build().unwrap();

    engine
        .price_portfolio(&[
            Holding::new("MSFT", 1.0),
            Holding::new("TYPO", 1.0),
            Holding::new("AAPL", 1.0),
        ])
        .await;

    assert_eq!(source.requests(), vec!["MSFT", "TYPO", "AAPL"]);
}

#[tokio::test]
async fn test_sector_falls_back_to_directory() {
    let source = Arc::new(InMemoryQuoteSource::new().with_quote("NVDA", 120.0, "NVIDIA", "Unknown"));
    let engine = StressEngineBuilder::new().with_quotes(source).build().unwrap();

    let valuation = engine.price_portfolio(&[Holding::new("NVDA", 1.0)]).await;
    assert_eq!(valuation.priced_holdings[0].sector, "Technology");
}

// =============================================================================
// FULL RUN
// =============================================================================

#[tokio::test]
async fn test_run_without_generator_uses_fallbacks() {
    let engine = engine_with(None);
    let run = engine.run_stress_test(&sample_portfolio()).await.unwrap();

    assert_eq!(run.scenario_origin, ScenarioOrigin::Fallback);
    assert_eq!(run.report.scenario_results.len(), 6);
    assert_relative_eq!(run.report.worst_case_value, 1800.0, epsilon = 1e-9);
    assert_relative_eq!(run.report.loss_percentage, 40.0, epsilon = 1e-9);
    assert_eq!(run.ai_insights, templated_insights(&run.report));
}

#[tokio::test]
async fn test_run_with_generated_scenarios() {
    let generator = Arc::new(
        ScriptedTextGenerator::new()
            .respond(GENERATED)
            .respond("Concentrated in technology; diversify."),
    );
    let engine = engine_with(Some(generator.clone()));

    let run = engine.run_stress_test(&sample_portfolio()).await.unwrap();

    assert_eq!(run.scenario_origin, ScenarioOrigin::Generated);
    assert_eq!(run.report.scenario_results.len(), 2);
    assert_eq!(run.report.scenario_results[0].scenario.name, "AI Capex Pullback");
    assert_relative_eq!(run.report.worst_case_value, 2100.0, epsilon = 1e-9);
    assert_relative_eq!(run.report.best_case_value, 3375.0, epsilon = 1e-9);
    assert_eq!(run.ai_insights, "Concentrated in technology; diversify.");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Technology: 100.0%"));
    assert!(prompts[1].contains("AI Capex Pullback"));
}

#[tokio::test]
async fn test_generator_failure_yields_exact_fallback() {
    let engine = engine_with(Some(Arc::new(FailingTextGenerator)));
    let valuation = engine.price_portfolio(&sample_portfolio()).await;

    let set = engine.generate_scenarios(&valuation).await;
    assert_eq!(set.origin, ScenarioOrigin::Fallback);
    assert_eq!(set.scenarios, fallback_scenarios());

    let run = engine.run_stress_test(&sample_portfolio()).await.unwrap();
    assert_eq!(run.ai_insights, templated_insights(&run.report));
}

#[tokio::test]
async fn test_malformed_generation_is_not_retried() {
    let generator = Arc::new(
        ScriptedTextGenerator::new()
            .respond("Sorry, I can't produce JSON today.")
            .respond("   "),
    );
    let engine = engine_with(Some(generator.clone()));

    let run = engine.run_stress_test(&sample_portfolio()).await.unwrap();

    assert_eq!(run.scenario_origin, ScenarioOrigin::Fallback);
    assert_eq!(run.ai_insights, templated_insights(&run.report));
    // One scenario attempt plus one insight attempt.
    assert_eq!(generator.prompts().len(), 2);
}

#[tokio::test]
async fn test_out_of_range_generated_impact_uses_fallback() {
    let generator = Arc::new(
        ScriptedTextGenerator::new()
            .respond(r#"[{"name": "Moon", "description": "x", "impact": 1e308}]"#),
    );
    let engine = engine_with(Some(generator));

    let run = engine
        .run_stress_test(&[Holding::new("AAPL", 10.0)])
        .await
        .unwrap();

    assert_eq!(run.scenario_origin, ScenarioOrigin::Fallback);
    assert_eq!(run.report.scenario_results.len(), 6);
    assert!(run.report.best_case_value.is_finite());
    assert!(run.report.gain_percentage.is_finite());
    assert!(run.report.best_case_value >= run.report.current_value);
}

#[tokio::test]
async fn test_generated_scenario_overflow_uses_fallback() {
    let generator = Arc::new(
        ScriptedTextGenerator::new()
            .respond(r#"[{"name": "Melt-up", "description": "x", "impact": 1000}]"#),
    );
    let engine = engine_with(Some(generator));

    // 2e305 x 150 is finite; eleven times that is not.
    let run = engine
        .run_stress_test(&[Holding::new("AAPL", 2e305)])
        .await
        .unwrap();

    assert_eq!(run.scenario_origin, ScenarioOrigin::Fallback);
    assert!(run.report.best_case_value.is_finite());
}

#[tokio::test]
async fn test_overflowing_holding_value_is_dropped() {
    let engine = engine_with(None);

    let valuation = engine
        .price_portfolio(&[Holding::new("AAPL", 1e307), Holding::new("MSFT", 5.0)])
        .await;
    assert_eq!(valuation.priced_holdings.len(), 1);
    assert_relative_eq!(valuation.current_value, 1500.0, epsilon = 1e-9);

    let result = engine.run_stress_test(&[Holding::new("AAPL", 1e307)]).await;
    assert!(matches!(
        result,
        Err(EngineError::Stress(StressError::NoPricedHoldings))
    ));
}

#[tokio::test]
async fn test_run_rejects_empty_portfolio() {
    let engine = engine_with(None);
    let err = engine.run_stress_test(&[]).await.unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "Portfolio is empty");
}

#[tokio::test]
async fn test_run_rejects_invalid_shares() {
    let engine = engine_with(None);
    let err = engine
        .run_stress_test(&[Holding::new("AAPL", -1.0)])
        .await
        .unwrap_err();

    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_run_fails_when_nothing_priced() {
    let engine = engine_with(None);
    let err = engine
        .run_stress_test(&[Holding::new("TYPO", 1.0), Holding::new("ZERO", 3.0)])
        .await
        .unwrap_err();

    assert!(!err.is_client_error());
    assert!(matches!(err, EngineError::Stress(StressError::NoPricedHoldings)));
}

// =============================================================================
// LOOKUP
// =============================================================================

#[tokio::test]
async fn test_validate_ticker() {
    let engine = engine_with(None);

    let ok = engine.validate_ticker(" aapl ").await;
    assert!(ok.valid);
    assert_eq!(ok.ticker, "AAPL");
    assert_eq!(ok.current_price, Some(150.0));
    assert!(ok.error.is_none());

    let missing = engine.validate_ticker("TYPO").await;
    assert!(!missing.valid);
    assert!(missing.error.is_some());
    assert!(missing.current_price.is_none());

    let zero = engine.validate_ticker("ZERO").await;
    assert!(!zero.valid);
}

#[tokio::test]
async fn test_search_stocks_enriches_prices() {
    let engine = engine_with(None);
    let results = engine.search_stocks("AAP").await;

    assert_eq!(results[0].ticker, "AAPL");
    assert_eq!(results[0].price, Some(150.0));
    assert_eq!(results[0].sector, "Technology");

    let unpriced = engine.search_stocks("NVDA").await;
    assert_eq!(unpriced[0].ticker, "NVDA");
    assert_eq!(unpriced[0].price, None);
}
