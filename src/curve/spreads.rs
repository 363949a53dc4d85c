//! Annual spread curve builder.
//!
//! The year-0 anchor is synthetic (spread 0); the 2y/5y/10y anchors come from
//! the caller. The curve is evaluated at every integer year `0..=HORIZON_YEARS`,
//! extrapolating the 5y-10y slope beyond year 10.

use crate::domain::{SpreadAnchor, SpreadQuotes, YearPoint};
use crate::error::AppError;
use crate::math::LinearInterpolator;

/// Anchor tenors in years. Index 0 is the synthetic zero-spread anchor.
pub const ANCHOR_YEARS: [u32; 4] = [0, 2, 5, 10];

/// Last year of the annual curve (inclusive).
pub const HORIZON_YEARS: u32 = 20;

/// Spread per integer year, `HORIZON_YEARS + 1` points starting at year 0.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSpreadCurve {
    points: Vec<YearPoint>,
}

impl AnnualSpreadCurve {
    pub fn build(spreads: &SpreadQuotes) -> Result<Self, AppError> {
        let anchors = anchors(spreads);
        let xs = anchors.iter().map(|a| f64::from(a.years)).collect();
        let ys = anchors.iter().map(|a| a.spread).collect();
        let interp = LinearInterpolator::new(xs, ys)?;

        let points: Vec<YearPoint> = (0..=HORIZON_YEARS)
            .map(|year| YearPoint {
                year,
                value: interp.eval(f64::from(year)),
            })
            .collect();

        tracing::debug!(stage = "spreads", points = points.len(), "annual spread curve built");
        Ok(Self { points })
    }

    pub fn points(&self) -> &[YearPoint] {
        &self.points
    }

    /// Spread at an integer year, if within the horizon.
    pub fn spread_at(&self, year: u32) -> Option<f64> {
        self.points.get(year as usize).map(|p| p.value)
    }
}

/// The four anchors `{(0, 0), (2, s2), (5, s5), (10, s10)}`.
pub fn anchors(spreads: &SpreadQuotes) -> [SpreadAnchor; 4] {
    let values = [0.0, spreads.s2, spreads.s5, spreads.s10];
    let mut out = [SpreadAnchor { years: 0, spread: 0.0 }; 4];
    for (slot, (&years, &spread)) in out.iter_mut().zip(ANCHOR_YEARS.iter().zip(values.iter())) {
        *slot = SpreadAnchor { years, spread };
    }
    out
}
