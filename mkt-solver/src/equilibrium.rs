use mkt_core::models::{EquilibriumPoint, LinearCurve};

/// Slopes closer than this are treated as parallel
pub const PARALLEL_TOLERANCE: f64 = 1e-12;

/// Solve `demand(q) = supply(q)` for the unique intersection of two lines.
///
/// The result is not clamped to any domain: a negative quantity is returned
/// as-is, and it is up to the caller to decide whether it is plausible.
pub fn solve(
    demand: &LinearCurve,
    supply: &LinearCurve,
) -> Result<EquilibriumPoint, EquilibriumError> {
    let coefficients = [
        demand.slope,
        demand.intercept,
        supply.slope,
        supply.intercept,
    ];
    if coefficients.iter().any(|x| !x.is_finite()) {
        return Err(EquilibriumError::NonFinite);
    }

    let dslope = demand.slope - supply.slope;
    if dslope.abs() < PARALLEL_TOLERANCE {
        return Err(EquilibriumError::ParallelCurves {
            demand: demand.slope,
            supply: supply.slope,
        });
    }

    let quantity = (supply.intercept - demand.intercept) / dslope;
    Ok(EquilibriumPoint {
        quantity,
        price: demand.price_at(quantity),
    })
}

/// Reasons an equilibrium may not exist
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EquilibriumError {
    /// The curves have (numerically) equal slopes, so there is no unique intersection
    #[error("demand slope {demand} and supply slope {supply} are parallel")]
    ParallelCurves {
        /// The demand slope
        demand: f64,
        /// The supply slope
        supply: f64,
    },
    /// One of the curves has a NaN or infinite coefficient
    #[error("curve coefficients must be finite")]
    NonFinite,
}
