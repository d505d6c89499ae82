use crate::models::{EquilibriumPoint, Estimate, FittedCurve, Observation, ProfitResult};

/// Everything derived from one analysis run, ready for a presentation layer.
///
/// The demand curve and the profit optimum are always present; values that
/// depend on the supply side, or that can break down numerically, are
/// [`Estimate`]s so that a renderer can show "undefined" instead of a
/// meaningless number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// Buyers ranked by descending willingness to pay, placed on the quantity axis
    pub demand_observations: Vec<Observation>,
    /// Sellers ranked by ascending cost, at their cumulative quantity
    pub supply_observations: Vec<Observation>,
    /// The total quantity offered by all sellers
    pub total_supply: f64,
    /// The marginal cost the profit optimum was computed against
    pub marginal_cost: f64,
    /// The best-fit demand curve
    pub demand: FittedCurve,
    /// The best-fit supply curve over the configured sub-selection of sellers
    pub supply: Estimate<FittedCurve>,
    /// A second supply curve for display, if one was requested
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alternate_supply: Option<Estimate<FittedCurve>>,
    /// Where the demand and supply curves cross
    pub equilibrium: Estimate<EquilibriumPoint>,
    /// The profit-maximizing quantity over `[0, total_supply]`
    pub profit: ProfitResult,
    /// The price elasticity of demand at the profit-maximizing quantity
    pub elasticity: Estimate<f64>,
    /// Profit sampled across `[0, total_supply]`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub profit_curve: Vec<ProfitResult>,
}
