//! Property-based tests for stress test invariants.
//!
//! These tests verify properties that should always hold:
//! - Worst case never exceeds current value, best case never falls below it
//! - Loss and gain percentages match their absolute values
//! - Dropping an unpriced holding leaves the others' contribution unchanged

use proptest::prelude::*;
use stresstest_core::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (-100.0f64..200.0).prop_map(|impact| Scenario::new("Generated", "property test", impact))
}

fn priced_strategy() -> impl Strategy<Value = PricedHolding> {
    ("[A-Z]{1,5}", 0.01f64..10_000.0, 0.01f64..5_000.0).prop_map(|(ticker, shares, price)| {
        Holding::new(ticker, shares)
            .priced(price, "Generated Corp", "Technology")
            .unwrap()
    })
}

proptest! {
    // =========================================================================
    // PROPERTY: BOUNDS BRACKET CURRENT VALUE
    // =========================================================================

    #[test]
    fn property_bounds_bracket_current_value(
        current in 1.0f64..1e9,
        scenarios in prop::collection::vec(scenario_strategy(), 1..12),
    ) {
        let outcome = run_scenarios(current, &scenarios).unwrap();

        prop_assert!(outcome.worst_case_value <= outcome.current_value);
        prop_assert!(outcome.best_case_value >= outcome.current_value);
        prop_assert!(outcome.potential_loss >= 0.0);
        prop_assert!(outcome.potential_gain >= 0.0);
        prop_assert_eq!(outcome.scenario_results.len(), scenarios.len());
    }

    // =========================================================================
    // PROPERTY: PERCENTAGES CONSISTENT WITH VALUES
    // =========================================================================

    #[test]
    fn property_percentages_consistent(
        current in 1.0f64..1e9,
        scenarios in prop::collection::vec(scenario_strategy(), 1..12),
    ) {
        let o = run_scenarios(current, &scenarios).unwrap();

        prop_assert_eq!(
            o.loss_percentage,
            100.0 * (o.current_value - o.worst_case_value) / o.current_value
        );
        prop_assert_eq!(
            o.gain_percentage,
            100.0 * (o.best_case_value - o.current_value) / o.current_value
        );
    }

    // =========================================================================
    // PROPERTY: WORST/BEST ARE ATTAINED
    // =========================================================================

    #[test]
    fn property_bounds_are_attained(
        current in 1.0f64..1e9,
        scenarios in prop::collection::vec(scenario_strategy(), 1..12),
    ) {
        let o = run_scenarios(current, &scenarios).unwrap();

        let candidates: Vec<f64> = std::iter::once(current)
            .chain(o.scenario_results.iter().map(|r| r.portfolio_value))
            .collect();
        prop_assert!(candidates.contains(&o.worst_case_value));
        prop_assert!(candidates.contains(&o.best_case_value));
    }

    // =========================================================================
    // PROPERTY: VALUE IS ADDITIVE OVER HOLDINGS
    // =========================================================================

    #[test]
    fn property_dropping_holding_is_additive(
        holdings in prop::collection::vec(priced_strategy(), 2..10),
        drop_index in any::<prop::sample::Index>(),
    ) {
        let full = PortfolioValuation::from_priced(holdings.clone());

        let dropped = drop_index.index(holdings.len());
        let mut partial_holdings = holdings.clone();
        let removed = partial_holdings.remove(dropped);
        let partial = PortfolioValuation::from_priced(partial_holdings);

        // Each surviving holding keeps its own value.
        for h in &partial.priced_holdings {
            prop_assert_eq!(h.value, h.current_price * h.shares);
        }

        let tolerance = 1e-9 * full.current_value.max(1.0);
        prop_assert!((full.current_value - removed.value - partial.current_value).abs() <= tolerance);
    }
}

// =============================================================================
// EXAMPLE-BASED PROPERTIES
// =============================================================================

#[test]
fn property_fallback_scenarios_stable() {
    let first = fallback_scenarios();
    for _ in 0..10 {
        assert_eq!(fallback_scenarios(), first);
    }
}

#[test]
fn property_reference_example() {
    let valuation = PortfolioValuation::from_priced(vec![
        Holding::new("AAPL", 10.0)
            .priced(150.0, "Apple Inc.", "Technology")
            .unwrap(),
        Holding::new("MSFT", 5.0)
            .priced(300.0, "Microsoft Corporation", "Technology")
            .unwrap(),
    ]);
    assert_eq!(valuation.current_value, 3000.0);

    let crash = Scenario::new("Market Crash", "Severe downturn", -40.0);
    let report = StressTestReport::build(valuation, &[crash]).unwrap();

    assert!((report.scenario_results[0].portfolio_value - 1800.0).abs() < 1e-9);
    assert!((report.potential_loss - 1200.0).abs() < 1e-9);
    assert!((report.loss_percentage - 40.0).abs() < 1e-9);
}
