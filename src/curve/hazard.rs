//! Hazard transform: annual spreads to cumulative default probabilities.
//!
//! `PD(t) = 1 - exp(-t * spread(t) / LGD)`, with `t` in years.
//!
//! The result is not clamped: an extrapolated negative spread produces a
//! negative cumulative PD, and a falling `t * spread(t)` produces a falling PD.

use crate::curve::spreads::AnnualSpreadCurve;
use crate::domain::{LossGivenDefault, YearPoint};
use crate::error::AppError;

/// Cumulative PD per integer year, index-aligned with `AnnualSpreadCurve`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualPdCurve {
    points: Vec<YearPoint>,
}

impl AnnualPdCurve {
    pub fn points(&self) -> &[YearPoint] {
        &self.points
    }

    pub fn pd_at(&self, year: u32) -> Option<f64> {
        self.points.get(year as usize).map(|p| p.value)
    }
}

/// Apply the hazard transform to every point of the annual spread curve.
///
/// Fails with a degenerate-input error when `LGD = 0` (RR = 1) or when a value
/// overflows to a non-finite number.
pub fn cumulative_pd(spreads: &AnnualSpreadCurve, lgd: LossGivenDefault) -> Result<AnnualPdCurve, AppError> {
    if lgd.is_zero() {
        return Err(AppError::degenerate(
            "Hazard transform: loss given default is 0 (recovery rate = 1); cumulative PD is undefined.",
        ));
    }

    let mut points = Vec::with_capacity(spreads.points().len());
    for p in spreads.points() {
        let t = f64::from(p.year);
        let pd = 1.0 - (-t * p.value / lgd.value()).exp();
        if !pd.is_finite() {
            return Err(AppError::degenerate(format!(
                "Hazard transform: non-finite cumulative PD at year {} (spread={}, lgd={}).",
                p.year,
                p.value,
                lgd.value()
            )));
        }
        points.push(YearPoint { year: p.year, value: pd });
    }

    tracing::debug!(stage = "hazard", lgd = lgd.value(), points = points.len(), "annual cumulative PD computed");
    Ok(AnnualPdCurve { points })
}
