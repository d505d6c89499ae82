use mkt_core::models::{FittedCurve, LinearCurve, Observation};

/// Fit the ordinary least-squares line `price = slope * quantity + intercept`
/// through the observations.
///
/// The observations are taken as given: any filtering (e.g. restricting seller
/// data to a cost range) is the caller's responsibility. The result does not
/// depend on the order of the observations beyond floating-point rounding.
pub fn fit(observations: &[Observation]) -> Result<LinearCurve, FitError> {
    let n = observations.len();
    if n < 2 {
        return Err(FitError::TooFewObservations(n));
    }

    if let Some(bad) = observations.iter().find(|obs| !obs.is_finite()) {
        return Err(FitError::NonFinite {
            quantity: bad.quantity,
            price: bad.price,
        });
    }

    // Rounding can leave a tiny nonzero variance when every quantity is equal
    let q0 = observations[0].quantity;
    if observations.iter().all(|obs| obs.quantity == q0) {
        return Err(FitError::DegenerateQuantities(q0));
    }

    let count = n as f64;
    let (sum_q, sum_p) = observations
        .iter()
        .fold((0.0, 0.0), |(q, p), obs| (q + obs.quantity, p + obs.price));
    let (mean_q, mean_p) = (sum_q / count, sum_p / count);
    if !mean_q.is_finite() || !mean_p.is_finite() {
        return Err(FitError::Overflow);
    }

    // Centered sums
    let (sxx, sxy) = observations.iter().fold((0.0, 0.0), |(xx, xy), obs| {
        let dq = obs.quantity - mean_q;
        let dp = obs.price - mean_p;
        (xx + dq * dq, xy + dq * dp)
    });

    if !sxx.is_finite() || !sxy.is_finite() {
        return Err(FitError::Overflow);
    }
    if sxx <= 0.0 {
        return Err(FitError::DegenerateQuantities(mean_q));
    }

    let slope = sxy / sxx;
    let intercept = mean_p - slope * mean_q;

    if slope.is_finite() && intercept.is_finite() {
        Ok(LinearCurve { slope, intercept })
    } else {
        Err(FitError::Overflow)
    }
}

/// Fit a line as in [`fit`], additionally recording the quantity domain of the data.
pub fn fit_with_domain(observations: &[Observation]) -> Result<FittedCurve, FitError> {
    let line = fit(observations)?;

    // fit() has already verified there are at least two finite observations
    let domain = observations
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), obs| {
            (lo.min(obs.quantity), hi.max(obs.quantity))
        });

    Ok(FittedCurve {
        line,
        domain,
        observations: observations.len(),
    })
}

/// The ways in which a set of observations cannot support a line fit
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Fewer than two observations were provided
    #[error("at least 2 observations are required, got {0}")]
    TooFewObservations(usize),
    /// Every observation has the same quantity, so the slope is undefined
    #[error("all observations share the quantity {0}")]
    DegenerateQuantities(f64),
    /// An observation has a NaN or infinite coordinate
    #[error("observation ({quantity}, {price}) is not finite")]
    NonFinite {
        /// The offending quantity
        quantity: f64,
        /// The offending price
        price: f64,
    },
    /// The sums or the fitted coefficients overflowed
    #[error("fitted coefficients are not finite")]
    Overflow,
}
