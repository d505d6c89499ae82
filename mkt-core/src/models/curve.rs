use crate::models::Observation;
use std::fmt;

/// A line in (quantity, price) space: `price = slope * quantity + intercept`
///
/// A `LinearCurve` carries no notion of where it is valid. Curves produced by
/// fitting are only meaningful over the quantities they were fit on, which is
/// what [`FittedCurve`] tracks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearCurve {
    /// Change in price per unit of quantity (nonpositive for typical demand)
    pub slope: f64,
    /// The price at zero quantity
    pub intercept: f64,
}

impl LinearCurve {
    /// Construct a curve from its slope and price-intercept
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the curve at the given quantity
    pub fn price_at(&self, quantity: f64) -> f64 {
        self.slope * quantity + self.intercept
    }

    /// Evaluate the curve at the given quantity, returning the observation
    pub fn observe(&self, quantity: f64) -> Observation {
        Observation {
            quantity,
            price: self.price_at(quantity),
        }
    }
}

impl fmt::Display for LinearCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.intercept < 0.0 { '-' } else { '+' };
        write!(
            f,
            "p = {:.4} * q {} {:.4}",
            self.slope,
            sign,
            self.intercept.abs()
        )
    }
}

/// A curve together with the quantity interval it was fit on
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedCurve {
    /// The best-fit line
    pub line: LinearCurve,
    /// The (min, max) quantity among the fitted observations
    pub domain: (f64, f64),
    /// How many observations contributed to the fit
    pub observations: usize,
}

impl FittedCurve {
    /// Whether the quantity lies within the fitted domain
    pub fn covers(&self, quantity: f64) -> bool {
        self.domain.0 <= quantity && quantity <= self.domain.1
    }

    /// The endpoints of the fitted line segment, suitable for drawing
    pub fn endpoints(&self) -> (Observation, Observation) {
        (
            self.line.observe(self.domain.0),
            self.line.observe(self.domain.1),
        )
    }
}
