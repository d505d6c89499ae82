use approx::assert_relative_eq;
use mkt_solver::{
    AnalysisError, FitError, ProfitError, analyze, demand_observations, models::*,
    supply_observations,
};
use rstest::*;
use rstest_reuse::{self, *};

use schemes::all_schemes;

// Buyers priced at 500 - rank, sellers offering 10 tons each at 100 + cumulative tons.
// Both are exactly linear, so the fitted curves are known in closed form:
// - Rank: demand p = 500 - q
// - Proportional (1000 tons over 400 buyers): demand p = 500 - 0.4q
// - Supply: p = 100 + q
#[fixture]
pub fn market() -> MarketData {
    // Interleave the inputs so the analysis has to do its own sorting
    let buyers = (1..=400)
        .map(|i| (i * 7) % 401)
        .map(|rank| Buyer::new(Some(format!("buyer {rank}")), 500.0 - rank as f64).unwrap())
        .collect();

    let sellers = (1..=100)
        .rev()
        .map(|j| Seller::new(None, 10.0, 100.0 + 10.0 * j as f64).unwrap())
        .collect();

    MarketData { buyers, sellers }
}

#[fixture]
pub fn config() -> AnalysisConfig {
    AnalysisConfig {
        resolution: 11,
        ..Default::default()
    }
}

#[rstest]
fn rank_scheme_matches_closed_form(market: MarketData, config: AnalysisConfig) {
    let result = analyze(&market.buyers, &market.sellers, &config).unwrap();

    assert_eq!(result.total_supply, 1000.0);
    assert_eq!(result.marginal_cost, 200.0);
    assert_eq!(result.demand.domain, (1.0, 400.0));
    assert_eq!(result.demand.observations, 400);
    assert_relative_eq!(result.demand.line.slope, -1.0, epsilon = 1e-9);
    assert_relative_eq!(result.demand.line.intercept, 500.0, epsilon = 1e-9);

    let supply = result.supply.value().unwrap();
    assert_eq!(supply.domain, (10.0, 1000.0));
    assert_relative_eq!(supply.line.slope, 1.0, epsilon = 1e-9);
    assert_relative_eq!(supply.line.intercept, 100.0, epsilon = 1e-9);

    let equilibrium = result.equilibrium.value().unwrap();
    assert_relative_eq!(equilibrium.quantity, 200.0, epsilon = 1e-6);
    assert_relative_eq!(equilibrium.price, 300.0, epsilon = 1e-6);

    assert_relative_eq!(result.profit.quantity, 150.0, epsilon = 1e-6);
    assert_relative_eq!(result.profit.price, 350.0, epsilon = 1e-6);
    assert_relative_eq!(result.profit.profit, 22500.0, epsilon = 1e-6);
}

#[rstest]
fn proportional_scheme_matches_closed_form(market: MarketData, mut config: AnalysisConfig) {
    config.quantity_scheme = QuantityScheme::Proportional;
    let result = analyze(&market.buyers, &market.sellers, &config).unwrap();

    assert_eq!(result.demand.domain, (2.5, 1000.0));
    assert_relative_eq!(result.demand.line.slope, -0.4, epsilon = 1e-9);
    assert_relative_eq!(result.demand.line.intercept, 500.0, epsilon = 1e-9);

    let equilibrium = result.equilibrium.value().unwrap();
    assert_relative_eq!(equilibrium.quantity, 400.0 / 1.4, epsilon = 1e-6);
    assert_relative_eq!(equilibrium.price, 100.0 + 400.0 / 1.4, epsilon = 1e-6);

    assert_relative_eq!(result.profit.quantity, 375.0, epsilon = 1e-6);
    assert_relative_eq!(result.profit.profit, 56250.0, epsilon = 1e-6);
}

#[apply(all_schemes)]
fn optimum_is_consistent(
    #[case] scheme: QuantityScheme,
    market: MarketData,
    mut config: AnalysisConfig,
) {
    config.quantity_scheme = scheme;
    let result = analyze(&market.buyers, &market.sellers, &config).unwrap();

    // Both schemes describe the same buyers, so the optimal price agrees
    assert_relative_eq!(result.profit.price, 350.0, epsilon = 1e-6);
    assert_eq!(
        result.profit.price,
        result.demand.line.price_at(result.profit.quantity)
    );
    assert!(result.profit.profit >= 0.0);
    assert!(result.profit.quantity <= result.total_supply);

    // And so does the elasticity at that price: -150 / 350
    let elasticity = result.elasticity.value().unwrap();
    assert_relative_eq!(*elasticity, -3.0 / 7.0, epsilon = 1e-9);
}

#[apply(all_schemes)]
fn profit_curve_spans_supply(
    #[case] scheme: QuantityScheme,
    market: MarketData,
    mut config: AnalysisConfig,
) {
    config.quantity_scheme = scheme;
    let result = analyze(&market.buyers, &market.sellers, &config).unwrap();

    assert_eq!(result.profit_curve.len(), 11);
    assert_eq!(result.profit_curve.first().unwrap().quantity, 0.0);
    assert_eq!(result.profit_curve.last().unwrap().quantity, 1000.0);
    for sample in &result.profit_curve {
        assert!(sample.profit >= 0.0);
        assert!(sample.profit <= result.profit.profit + 1e-6);
    }
}

#[apply(all_schemes)]
fn display_flags_do_not_change_results(
    #[case] scheme: QuantityScheme,
    market: MarketData,
    mut config: AnalysisConfig,
) {
    config.quantity_scheme = scheme;
    let shown = analyze(&market.buyers, &market.sellers, &config).unwrap();

    config.display = DisplayFlags {
        buyer_data: false,
        seller_data: false,
        marginal_cost_line: true,
        supply_curve_1: false,
        supply_curve_2: true,
        equilibrium: true,
        max_profit_area: true,
    };
    let hidden = analyze(&market.buyers, &market.sellers, &config).unwrap();

    assert_eq!(shown, hidden);
}

#[rstest]
fn alternate_supply_is_display_only(market: MarketData, mut config: AnalysisConfig) {
    let baseline = analyze(&market.buyers, &market.sellers, &config).unwrap();
    assert!(baseline.alternate_supply.is_none());

    config.alternate_supply = Some(SupplyFilter::CostRange {
        min: 136.0,
        max: 401.0,
    });
    let result = analyze(&market.buyers, &market.sellers, &config).unwrap();

    // Costs 140 through 400 sit at cumulative quantities 40 through 300
    let alternate = result.alternate_supply.as_ref().unwrap().value().unwrap();
    assert_eq!(alternate.domain, (40.0, 300.0));
    assert_eq!(alternate.observations, 27);
    assert_relative_eq!(alternate.line.slope, 1.0, epsilon = 1e-9);

    assert_eq!(result.equilibrium, baseline.equilibrium);
}

#[rstest]
fn sparse_supply_leaves_equilibrium_undefined(market: MarketData, mut config: AnalysisConfig) {
    config.supply = SupplyFilter::CumulativeCap { max_quantity: 10.0 };
    let result = analyze(&market.buyers, &market.sellers, &config).unwrap();

    assert_eq!(
        result.supply.reason(),
        Some(FitError::TooFewObservations(1).to_string().as_str())
    );
    assert!(!result.equilibrium.is_defined());

    // The profit side does not depend on the supply fit
    assert_relative_eq!(result.profit.quantity, 150.0, epsilon = 1e-6);
    assert!(result.elasticity.is_defined());
}

#[rstest]
fn flat_curves_are_parallel(config: AnalysisConfig) {
    let buyers: Vec<Buyer> = (0..5).map(|_| Buyer::new(None, 300.0).unwrap()).collect();
    let sellers: Vec<Seller> = (0..5)
        .map(|_| Seller::new(None, 10.0, 250.0).unwrap())
        .collect();

    let result = analyze(&buyers, &sellers, &config).unwrap();
    assert!(result.supply.is_defined());
    assert!(result.equilibrium.reason().unwrap().contains("parallel"));

    // Flat demand above cost: sell everything
    assert_eq!(result.profit.quantity, 50.0);
    assert_eq!(result.profit.profit, 5000.0);
}

#[rstest]
fn negative_equilibrium_is_reported(config: AnalysisConfig) {
    // Demand p = 90 - q never reaches supply p = 100 + q for q >= 0
    let buyers: Vec<Buyer> = (1..=10)
        .map(|i| Buyer::new(None, 90.0 - i as f64).unwrap())
        .collect();
    let sellers: Vec<Seller> = (1..=10)
        .map(|j| Seller::new(None, 10.0, 100.0 + 10.0 * j as f64).unwrap())
        .collect();

    let result = analyze(&buyers, &sellers, &config).unwrap();
    let reason = result.equilibrium.reason().unwrap();
    assert!(reason.contains("negative quantity"), "{reason}");

    // Nobody is willing to pay the marginal cost
    assert_eq!(result.profit.quantity, 0.0);
    assert_eq!(result.profit.profit, 0.0);
    assert_relative_eq!(result.profit.price, 90.0, epsilon = 1e-9);
    assert_eq!(result.elasticity, Estimate::Defined(-0.0));
}

#[rstest]
fn equilibrium_beyond_supply_is_reported(config: AnalysisConfig) {
    // Demand p = 500 - q meets supply p = 100 + q at q = 200, but only 50 tons are offered
    let buyers: Vec<Buyer> = (1..=10)
        .map(|i| Buyer::new(None, 500.0 - i as f64).unwrap())
        .collect();
    let sellers: Vec<Seller> = (1..=5)
        .map(|j| Seller::new(None, 10.0, 100.0 + 10.0 * j as f64).unwrap())
        .collect();

    let result = analyze(&buyers, &sellers, &config).unwrap();
    assert_eq!(result.total_supply, 50.0);
    assert!(result.supply.is_defined());
    let reason = result.equilibrium.reason().unwrap();
    assert!(reason.contains("beyond the total supply of 50.00"), "{reason}");
}

#[rstest]
fn equilibrium_outside_fitted_supply_is_reported(mut config: AnalysisConfig) {
    // Demand p = 180 - q meets supply p = 100 + q at q = 40, past the 30 tons admitted to the fit
    config.supply = SupplyFilter::CumulativeCap { max_quantity: 30.0 };
    let buyers: Vec<Buyer> = (1..=10)
        .map(|i| Buyer::new(None, 180.0 - i as f64).unwrap())
        .collect();
    let sellers: Vec<Seller> = (1..=5)
        .map(|j| Seller::new(None, 10.0, 100.0 + 10.0 * j as f64).unwrap())
        .collect();

    let result = analyze(&buyers, &sellers, &config).unwrap();
    assert_eq!(result.supply.value().unwrap().domain, (10.0, 30.0));
    let reason = result.equilibrium.reason().unwrap();
    assert!(
        reason.contains("outside the fitted supply range [10.00, 30.00]"),
        "{reason}"
    );
}

#[rstest]
fn oversized_resolution_is_an_error(market: MarketData, mut config: AnalysisConfig) {
    config.resolution = usize::MAX;
    assert_eq!(
        analyze(&market.buyers, &market.sellers, &config).unwrap_err(),
        AnalysisError::Profit(ProfitError::InvalidResolution(usize::MAX))
    );
}

#[rstest]
fn no_buyers_is_an_error(market: MarketData, config: AnalysisConfig) {
    assert_eq!(
        analyze(&[], &market.sellers, &config).unwrap_err(),
        AnalysisError::Demand(FitError::TooFewObservations(0))
    );
}

#[rstest]
fn proportional_without_supply_is_degenerate(market: MarketData, mut config: AnalysisConfig) {
    config.quantity_scheme = QuantityScheme::Proportional;
    assert_eq!(
        analyze(&market.buyers, &[], &config).unwrap_err(),
        AnalysisError::Demand(FitError::DegenerateQuantities(0.0))
    );
}

#[rstest]
fn rank_without_supply_produces_nothing(market: MarketData, config: AnalysisConfig) {
    let result = analyze(&market.buyers, &[], &config).unwrap();
    assert_eq!(result.total_supply, 0.0);
    assert!(!result.supply.is_defined());
    assert!(!result.equilibrium.is_defined());
    assert_eq!(result.profit.quantity, 0.0);
    assert_eq!(result.profit.profit, 0.0);
}

#[rstest]
fn bad_marginal_cost_is_an_error(market: MarketData, mut config: AnalysisConfig) {
    config.marginal_cost = f64::NAN;
    assert!(matches!(
        analyze(&market.buyers, &market.sellers, &config).unwrap_err(),
        AnalysisError::Profit(ProfitError::NonFiniteCost(_))
    ));
}

#[test]
fn demand_ranking_is_stable() {
    let buyers: Vec<Buyer> = [120.0, 300.0, 120.0, 410.0]
        .into_iter()
        .map(|p| Buyer::new(None, p).unwrap())
        .collect();

    let ranked = demand_observations(&buyers, QuantityScheme::Rank, 0.0);
    assert_eq!(
        ranked,
        vec![
            Observation::new(1.0, 410.0),
            Observation::new(2.0, 300.0),
            Observation::new(3.0, 120.0),
            Observation::new(4.0, 120.0),
        ]
    );

    let spread = demand_observations(&buyers, QuantityScheme::Proportional, 200.0);
    let quantities: Vec<f64> = spread.iter().map(|obs| obs.quantity).collect();
    assert_eq!(quantities, vec![50.0, 100.0, 150.0, 200.0]);
}

#[test]
fn supply_is_cumulative() {
    let sellers = vec![
        Seller::new(Some("c".into()), 5.0, 300.0).unwrap(),
        Seller::new(Some("a".into()), 20.0, 150.0).unwrap(),
        Seller::new(Some("b".into()), 0.0, 200.0).unwrap(),
    ];

    assert_eq!(
        supply_observations(&sellers),
        vec![
            Observation::new(20.0, 150.0),
            Observation::new(20.0, 200.0),
            Observation::new(25.0, 300.0),
        ]
    );
}
