//! Tenor regridder: annual cumulative PD onto the business-day grid.
//!
//! Annual tenors are mapped to business days (`year * 264`) and the cumulative
//! PD is linearly interpolated at each stopping time. Grid points outside the
//! annual span are extrapolated from the edge segment.

use crate::curve::hazard::AnnualPdCurve;
use crate::curve::tenor_grid::{TenorGrid, years_to_days};
use crate::error::AppError;
use crate::math::LinearInterpolator;

/// Holds the process-wide grid. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct TenorRegridder {
    grid: TenorGrid,
}

impl TenorRegridder {
    pub fn new(grid: TenorGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &TenorGrid {
        &self.grid
    }

    /// Cumulative PD at each grid tenor, in grid order.
    pub fn regrid(&self, annual: &AnnualPdCurve) -> Result<Vec<f64>, AppError> {
        let xs = annual
            .points()
            .iter()
            .map(|p| f64::from(years_to_days(p.year)))
            .collect();
        let ys = annual.points().iter().map(|p| p.value).collect();
        let interp = LinearInterpolator::new(xs, ys)?;

        let at: Vec<f64> = self.grid.days().iter().map(|&d| f64::from(d)).collect();
        let out = interp.eval_many(&at);

        tracing::debug!(stage = "regrid", points = out.len(), last_tenor = self.grid.last(), "cumulative PD regridded");
        Ok(out)
    }
}

impl Default for TenorRegridder {
    fn default() -> Self {
        Self::new(TenorGrid::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::hazard::cumulative_pd;
    use crate::curve::lgd::loss_given_default;
    use crate::curve::spreads::AnnualSpreadCurve;
    use crate::domain::SpreadQuotes;

    fn annual(rr: f64, s2: f64, s5: f64, s10: f64) -> AnnualPdCurve {
        let spreads = AnnualSpreadCurve::build(&SpreadQuotes::new(s2, s5, s10).unwrap()).unwrap();
        cumulative_pd(&spreads, loss_given_default(rr).unwrap()).unwrap()
    }

    #[test]
    fn standard_grid_output_is_aligned() {
        let regridder = TenorRegridder::default();
        let out = regridder.regrid(&annual(0.4, 0.01, 0.02, 0.03)).unwrap();
        assert_eq!(out.len(), regridder.grid().len());
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn exact_year_tenors_reproduce_annual_values() {
        let pd = annual(0.4, 0.01, 0.02, 0.03);
        let grid = TenorGrid::new(vec![0, 264, 528, 1320, 2640, 5016, 5280]).unwrap();
        let out = TenorRegridder::new(grid).regrid(&pd).unwrap();
        for (i, year) in [0u32, 1, 2, 5, 10, 19, 20].into_iter().enumerate() {
            let expected = pd.pd_at(year).unwrap();
            assert!((out[i] - expected).abs() < 1e-14, "year {year}: {} vs {expected}", out[i]);
        }
    }

    #[test]
    fn between_years_is_linear() {
        let pd = annual(0.4, 0.01, 0.02, 0.03);
        let grid = TenorGrid::new(vec![0, 132, 396]).unwrap();
        let out = TenorRegridder::new(grid).regrid(&pd).unwrap();
        let y1 = pd.pd_at(1).unwrap();
        let y2 = pd.pd_at(2).unwrap();
        assert!((out[1] - y1 / 2.0).abs() < 1e-14);
        assert!((out[2] - (y1 + y2) / 2.0).abs() < 1e-14);
    }

    #[test]
    fn beyond_annual_span_extrapolates() {
        let pd = annual(0.4, 0.01, 0.02, 0.03);
        let grid = TenorGrid::new(vec![0, 5280, 5544]).unwrap();
        let out = TenorRegridder::new(grid).regrid(&pd).unwrap();
        let slope = pd.pd_at(20).unwrap() - pd.pd_at(19).unwrap();
        assert!((out[2] - (out[1] + slope)).abs() < 1e-12);
    }
}
