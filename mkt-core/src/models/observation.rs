/// A single (quantity, price) observation on one side of the market
///
/// For buyers, the price is a willingness to pay and the quantity is the
/// position assigned after ranking. For sellers, the price is a cost to sell
/// and the quantity is the cumulative supply up to and including that seller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// The quantity coordinate (typically the independent variable)
    pub quantity: f64,
    /// The price coordinate (typically the dependent variable)
    pub price: f64,
}

impl Observation {
    /// Construct an observation from its coordinates
    pub fn new(quantity: f64, price: f64) -> Self {
        Self { quantity, price }
    }

    /// Whether both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.quantity.is_finite() && self.price.is_finite()
    }
}

impl From<(f64, f64)> for Observation {
    fn from((quantity, price): (f64, f64)) -> Self {
        Self { quantity, price }
    }
}
