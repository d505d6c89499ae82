use mkt_core::models::LinearCurve;

/// Compute the point price-elasticity of a linear demand curve at `quantity`:
/// `(slope * quantity) / demand(quantity)`.
///
/// Elasticity is undefined where the demand price vanishes, and for negative quantities.
/// Prices within a relative `f64::EPSILON` of zero (scaled by the intercept) count as vanishing.
pub fn elasticity_at(demand: &LinearCurve, quantity: f64) -> Result<f64, ElasticityError> {
    if !quantity.is_finite() || !demand.slope.is_finite() || !demand.intercept.is_finite() {
        return Err(ElasticityError::NonFinite);
    }
    if quantity < 0.0 {
        return Err(ElasticityError::NegativeQuantity(quantity));
    }

    let price = demand.price_at(quantity);
    if price.abs() <= f64::EPSILON * demand.intercept.abs().max(1.0) {
        return Err(ElasticityError::ZeroPrice(quantity));
    }

    Ok(demand.slope * quantity / price)
}

/// Reasons the elasticity may be undefined
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ElasticityError {
    /// The demand price is zero at the requested quantity
    #[error("demand price is zero at quantity {0}")]
    ZeroPrice(f64),
    /// The requested quantity is negative
    #[error("quantity {0} is negative")]
    NegativeQuantity(f64),
    /// The quantity or the curve is not finite
    #[error("quantity and curve coefficients must be finite")]
    NonFinite,
}
