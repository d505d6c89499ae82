/// The intersection of a demand curve and a supply curve
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquilibriumPoint {
    /// The quantity at which demand and supply prices coincide
    pub quantity: f64,
    /// The common price at that quantity
    pub price: f64,
}

/// The profit-maximizing production decision against a demand curve
///
/// Invariants: `quantity >= 0`, `profit >= 0`, and `price` is the demand
/// curve evaluated at `quantity`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfitResult {
    /// The quantity to produce
    pub quantity: f64,
    /// The price buyers pay at that quantity
    pub price: f64,
    /// The total profit, `(price - marginal_cost) * quantity`
    pub profit: f64,
}

/// A derived value that may not be computable for the given inputs.
///
/// Rather than failing an entire analysis (or reporting a meaningless number)
/// when, say, the supply and demand curves are parallel, the affected value is
/// reported as `Undefined` along with a human-readable reason.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Estimate<T> {
    /// The value was computed
    Defined(T),
    /// The value could not be computed
    Undefined {
        /// Why the value is undefined
        reason: String,
    },
}

impl<T> Estimate<T> {
    /// Construct an undefined estimate from anything displayable
    pub fn undefined(reason: impl ToString) -> Self {
        Self::Undefined {
            reason: reason.to_string(),
        }
    }

    /// Borrow the value, if defined
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined { .. } => None,
        }
    }

    /// Whether a value is present
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// The reason the value is undefined, if it is
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Defined(_) => None,
            Self::Undefined { reason } => Some(reason),
        }
    }

    /// Chain a fallible computation on the defined value
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Estimate<U>) -> Estimate<U> {
        match self {
            Self::Defined(value) => f(value),
            Self::Undefined { reason } => Estimate::Undefined { reason },
        }
    }
}

impl<T, E: std::error::Error> From<Result<T, E>> for Estimate<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Defined(value),
            Err(error) => Self::undefined(error),
        }
    }
}
