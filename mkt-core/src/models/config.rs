use crate::models::Observation;

/// Every analysis takes place within a context. This config describes this context.
///
/// The `Default` implementation mirrors the classroom corn market the tool was
/// first used for: a marginal cost of 200, supply fit over the first 1000
/// cumulative tons, and buyers placed at their rank.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnalysisConfig {
    /// The constant per-unit production cost assumed by the profit model
    pub marginal_cost: f64,
    /// Which sellers feed the supply curve used for the equilibrium
    pub supply: SupplyFilter,
    /// An optional second supply curve, fitted for display only
    pub alternate_supply: Option<SupplyFilter>,
    /// How ranked buyers are placed along the quantity axis
    pub quantity_scheme: QuantityScheme,
    /// The number of samples in the displayed profit curve (zero disables sampling)
    pub resolution: usize,
    /// Which elements a presentation layer should render
    pub display: DisplayFlags,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            marginal_cost: 200.0,
            supply: SupplyFilter::default(),
            alternate_supply: None,
            quantity_scheme: QuantityScheme::default(),
            resolution: 10_000,
            display: DisplayFlags::default(),
        }
    }
}

/// A sub-selection of the (cost-sorted, cumulative) supply observations.
///
/// Seller data is rarely linear end-to-end, so a supply curve is usually fit
/// over a well-behaved stretch of it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum SupplyFilter {
    /// Use every seller
    All,
    /// Keep observations whose cumulative quantity does not exceed the cap
    CumulativeCap {
        /// The largest cumulative quantity to include
        max_quantity: f64,
    },
    /// Keep observations whose cost lies in the closed interval [min, max]
    CostRange {
        /// The smallest cost to include
        min: f64,
        /// The largest cost to include
        max: f64,
    },
}

impl Default for SupplyFilter {
    fn default() -> Self {
        Self::CumulativeCap {
            max_quantity: 1000.0,
        }
    }
}

impl SupplyFilter {
    /// Whether a cumulative supply observation passes the filter
    pub fn admits(&self, observation: &Observation) -> bool {
        match *self {
            Self::All => true,
            Self::CumulativeCap { max_quantity } => observation.quantity <= max_quantity,
            Self::CostRange { min, max } => min <= observation.price && observation.price <= max,
        }
    }
}

/// The scheme for assigning quantities to buyers once sorted by descending willingness to pay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum QuantityScheme {
    /// The i-th buyer (1-based) sits at quantity i
    #[default]
    Rank,
    /// The i-th of n buyers (1-based) sits at quantity i * total_supply / n
    Proportional,
}

impl QuantityScheme {
    /// The quantity of the buyer at the 0-based `index` among `count` buyers
    pub fn position(&self, index: usize, count: usize, total_supply: f64) -> f64 {
        let rank = (index + 1) as f64;
        match self {
            Self::Rank => rank,
            Self::Proportional => rank * total_supply / count as f64,
        }
    }
}

/// Presentation toggles; these never affect what gets computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DisplayFlags {
    /// Show the ranked buyer observations
    pub buyer_data: bool,
    /// Show the cumulative seller observations
    pub seller_data: bool,
    /// Show the marginal cost as a horizontal line
    pub marginal_cost_line: bool,
    /// Show the primary supply curve
    pub supply_curve_1: bool,
    /// Show the alternate supply curve
    pub supply_curve_2: bool,
    /// Show the equilibrium point
    pub equilibrium: bool,
    /// Show the maximum profit region
    pub max_profit_area: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            buyer_data: true,
            seller_data: true,
            marginal_cost_line: false,
            supply_curve_1: true,
            supply_curve_2: false,
            equilibrium: false,
            max_profit_area: false,
        }
    }
}
