use crate::{
    FitError, ProfitError, ProfitOptimizer, elasticity_at, fit_with_domain, solve,
};
use mkt_core::models::{
    AnalysisConfig, AnalysisResult, Buyer, EquilibriumPoint, Estimate, FittedCurve, Observation,
    QuantityScheme, Seller, SupplyFilter,
};
use tracing::{debug, warn};

/// Rank buyers by descending willingness to pay and place them on the quantity axis.
///
/// Ties keep their input order. The placement follows `scheme`; for
/// [`QuantityScheme::Proportional`] the buyers are spread over `(0, total_supply]`.
pub fn demand_observations(
    buyers: &[Buyer],
    scheme: QuantityScheme,
    total_supply: f64,
) -> Vec<Observation> {
    let mut prices: Vec<f64> = buyers.iter().map(Buyer::willingness_to_pay).collect();
    prices.sort_by(|a, b| b.total_cmp(a));

    let count = prices.len();
    prices
        .into_iter()
        .enumerate()
        .map(|(index, price)| Observation {
            quantity: scheme.position(index, count, total_supply),
            price,
        })
        .collect()
}

/// Rank sellers by ascending cost and pair each cost with the cumulative quantity
/// offered up to and including that seller.
pub fn supply_observations(sellers: &[Seller]) -> Vec<Observation> {
    let mut sorted: Vec<&Seller> = sellers.iter().collect();
    sorted.sort_by(|a, b| a.cost_to_sell().total_cmp(&b.cost_to_sell()));

    sorted
        .into_iter()
        .scan(0.0, |cumulative, seller| {
            *cumulative += seller.tons_to_sell();
            Some(Observation {
                quantity: *cumulative,
                price: seller.cost_to_sell(),
            })
        })
        .collect()
}

/// Fit a supply curve through the observations admitted by `filter`.
pub fn fit_supply(
    observations: &[Observation],
    filter: &SupplyFilter,
) -> Result<FittedCurve, FitError> {
    let admitted: Vec<Observation> = observations
        .iter()
        .filter(|obs| filter.admits(obs))
        .copied()
        .collect();
    fit_with_domain(&admitted)
}

/// Run the full analysis: demand and supply fits, equilibrium, profit optimum,
/// and the elasticity at that optimum.
///
/// Only failures that leave nothing to report are returned as errors, namely
/// an unfittable demand side or an unusable marginal cost. Everything that
/// depends on the supply side, or on a numerically fragile division, is reported
/// through [`Estimate`] instead. The display flags in `config` have no
/// influence on what is computed.
#[tracing::instrument(skip_all, fields(buyers = buyers.len(), sellers = sellers.len()))]
pub fn analyze(
    buyers: &[Buyer],
    sellers: &[Seller],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let total_supply: f64 = sellers.iter().map(Seller::tons_to_sell).sum();

    let demand_observations = demand_observations(buyers, config.quantity_scheme, total_supply);
    let demand = fit_with_domain(&demand_observations).map_err(AnalysisError::Demand)?;
    debug!(
        slope = demand.line.slope,
        intercept = demand.line.intercept,
        "fitted demand curve"
    );

    let supply_observations = supply_observations(sellers);
    let supply: Estimate<FittedCurve> = fit_supply(&supply_observations, &config.supply).into();
    match &supply {
        Estimate::Defined(curve) => debug!(
            slope = curve.line.slope,
            intercept = curve.line.intercept,
            "fitted supply curve"
        ),
        Estimate::Undefined { reason } => warn!(%reason, "supply curve is undefined"),
    }

    let alternate_supply = config
        .alternate_supply
        .as_ref()
        .map(|filter| Estimate::from(fit_supply(&supply_observations, filter)));

    let equilibrium = supply
        .clone()
        .and_then(|supply| locate_equilibrium(&demand, &supply, total_supply));
    if let Some(reason) = equilibrium.reason() {
        warn!(%reason, "equilibrium is undefined");
    }

    let optimizer = ProfitOptimizer::new(config.resolution);
    let profit = optimizer.maximize(&demand.line, config.marginal_cost, total_supply)?;
    let profit_curve = optimizer.sample(&demand.line, config.marginal_cost, total_supply)?;

    let elasticity: Estimate<f64> = elasticity_at(&demand.line, profit.quantity).into();
    if let Some(reason) = elasticity.reason() {
        warn!(%reason, "elasticity at the profit optimum is undefined");
    }

    Ok(AnalysisResult {
        demand_observations,
        supply_observations,
        total_supply,
        marginal_cost: config.marginal_cost,
        demand,
        supply,
        alternate_supply,
        equilibrium,
        profit,
        elasticity,
        profit_curve,
    })
}

// Intersections at a negative quantity, outside the fitted supply domain, or
// beyond what sellers can deliver are reported as undefined
fn locate_equilibrium(
    demand: &FittedCurve,
    supply: &FittedCurve,
    total_supply: f64,
) -> Estimate<EquilibriumPoint> {
    match solve(&demand.line, &supply.line) {
        Ok(point) if point.quantity < 0.0 => Estimate::undefined(format!(
            "curves intersect at negative quantity {:.2} (price {:.2})",
            point.quantity, point.price
        )),
        Ok(point) if point.quantity > total_supply => Estimate::undefined(format!(
            "curves intersect at quantity {:.2} (price {:.2}), beyond the total supply of {:.2}",
            point.quantity, point.price, total_supply
        )),
        Ok(point) if !supply.covers(point.quantity) => Estimate::undefined(format!(
            "curves intersect at quantity {:.2} (price {:.2}), outside the fitted supply range [{:.2}, {:.2}]",
            point.quantity, point.price, supply.domain.0, supply.domain.1
        )),
        Ok(point) => Estimate::Defined(point),
        Err(error) => Estimate::undefined(error),
    }
}

/// Failures that prevent an analysis from producing any result
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The buyer data cannot support a demand curve
    #[error("unable to fit demand curve: {0}")]
    Demand(#[source] FitError),
    /// The profit search was given unusable inputs
    #[error("unable to optimize profit: {0}")]
    Profit(#[from] ProfitError),
}
