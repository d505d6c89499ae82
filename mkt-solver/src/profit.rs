use mkt_core::models::{LinearCurve, ProfitResult};
use tracing::debug;

/// The largest number of samples [`ProfitOptimizer::sample`] will produce
pub const MAX_RESOLUTION: usize = 1_000_000;

/// Finds the production quantity that maximizes `(demand(q) - marginal_cost) * q`
/// over `0 ≤ q ≤ upper`.
///
/// With linear demand, profit is a quadratic in q, so the optimum is one of the
/// two boundaries or the vertex of the parabola. No sampling is involved in
/// [`ProfitOptimizer::maximize`]; the resolution only controls
/// [`ProfitOptimizer::sample`], which produces a profit curve for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfitOptimizer {
    resolution: usize,
}

impl Default for ProfitOptimizer {
    fn default() -> Self {
        Self { resolution: 10_000 }
    }
}

impl ProfitOptimizer {
    /// Create an optimizer that samples `resolution` points for display
    pub fn new(resolution: usize) -> Self {
        Self { resolution }
    }

    /// Compute the exact profit-maximizing quantity, price and profit.
    ///
    /// When no quantity yields positive profit, the result is zero production at
    /// `demand(0)` with zero profit.
    pub fn maximize(
        &self,
        demand: &LinearCurve,
        marginal_cost: f64,
        upper: f64,
    ) -> Result<ProfitResult, ProfitError> {
        validate(demand, marginal_cost, upper)?;

        // Not producing is always feasible, which floors the profit at zero
        let mut best = ProfitResult {
            quantity: 0.0,
            price: demand.intercept,
            profit: 0.0,
        };

        // Profit is only concave for downward-sloping demand; otherwise the
        // maximum sits on a boundary
        let vertex = if demand.slope < 0.0 {
            let q = (marginal_cost - demand.intercept) / (2.0 * demand.slope);
            Some(q.clamp(0.0, upper))
        } else {
            None
        };

        for quantity in vertex.into_iter().chain(std::iter::once(upper)) {
            let candidate = evaluate(demand, marginal_cost, quantity);
            if candidate.profit > best.profit {
                best = candidate;
            }
        }

        debug!(
            quantity = best.quantity,
            price = best.price,
            profit = best.profit,
            "found profit-maximizing quantity"
        );
        Ok(best)
    }

    /// Evaluate the profit at evenly spaced quantities spanning `[0, upper]`,
    /// flooring each profit at zero.
    ///
    /// Fails for resolutions above [`MAX_RESOLUTION`].
    pub fn sample(
        &self,
        demand: &LinearCurve,
        marginal_cost: f64,
        upper: f64,
    ) -> Result<Vec<ProfitResult>, ProfitError> {
        validate(demand, marginal_cost, upper)?;

        let n = self.resolution;
        if n > MAX_RESOLUTION {
            return Err(ProfitError::InvalidResolution(n));
        }
        let step = if n > 1 { upper / (n - 1) as f64 } else { 0.0 };

        Ok((0..n)
            .map(|i| {
                // Pin the final sample to the bound to avoid accumulating rounding
                let quantity = if i + 1 == n && n > 1 {
                    upper
                } else {
                    i as f64 * step
                };
                let mut sample = evaluate(demand, marginal_cost, quantity);
                sample.profit = sample.profit.max(0.0);
                sample
            })
            .collect())
    }
}

fn evaluate(demand: &LinearCurve, marginal_cost: f64, quantity: f64) -> ProfitResult {
    let price = demand.price_at(quantity);
    ProfitResult {
        quantity,
        price,
        profit: (price - marginal_cost) * quantity,
    }
}

fn validate(demand: &LinearCurve, marginal_cost: f64, upper: f64) -> Result<(), ProfitError> {
    if !demand.slope.is_finite() || !demand.intercept.is_finite() {
        return Err(ProfitError::NonFiniteCurve);
    }
    if !marginal_cost.is_finite() {
        return Err(ProfitError::NonFiniteCost(marginal_cost));
    }
    if !upper.is_finite() || upper < 0.0 {
        return Err(ProfitError::InvalidUpperBound(upper));
    }
    Ok(())
}

/// The ways in which the profit search can be misconfigured
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ProfitError {
    /// The quantity bound is negative, NaN, or infinite
    #[error("quantity upper bound must be finite and nonnegative, got {0}")]
    InvalidUpperBound(f64),
    /// The marginal cost is NaN or infinite
    #[error("marginal cost must be finite, got {0}")]
    NonFiniteCost(f64),
    /// The demand curve has a NaN or infinite coefficient
    #[error("demand curve coefficients must be finite")]
    NonFiniteCurve,
    /// The requested number of profit curve samples exceeds [`MAX_RESOLUTION`]
    #[error("profit curve resolution {0} exceeds the maximum of {max}", max = MAX_RESOLUTION)]
    InvalidResolution(usize),
}
