//! Shared domain types.
//!
//! Inputs are validated on construction; curve types are built once per request
//! and never mutated afterwards. Output types are serializable so they can be
//! exported as-is.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fraction of exposure recovered after default, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecoveryRate(f64);

impl RecoveryRate {
    pub fn new(value: f64) -> Result<Self, AppError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(AppError::domain(format!(
                "Input normalizer: recovery rate must be within [0, 1], got {value}."
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Fraction of exposure lost on default: `1 - RR`, full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LossGivenDefault(f64);

impl LossGivenDefault {
    pub fn from_recovery(rr: RecoveryRate) -> Self {
        Self(1.0 - rr.value())
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// LGD rounded to two decimals. Presentation only.
    pub fn display_rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// The three user-supplied spreads (decimal, e.g. `0.01` for 100bp).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadQuotes {
    pub s2: f64,
    pub s5: f64,
    pub s10: f64,
}

impl SpreadQuotes {
    pub fn new(s2: f64, s5: f64, s10: f64) -> Result<Self, AppError> {
        for (years, spread) in [(2, s2), (5, s5), (10, s10)] {
            if !spread.is_finite() || spread < 0.0 {
                return Err(AppError::domain(format!(
                    "Spread curve builder: {years}y spread must be a non-negative number, got {spread}."
                )));
            }
        }
        Ok(Self { s2, s5, s10 })
    }
}

/// A sparse curve node at an integer year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadAnchor {
    pub years: u32,
    pub spread: f64,
}

/// One point of an annual curve (spread or cumulative PD).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub value: f64,
}

/// Everything a single pipeline run needs from the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdRequest {
    pub recovery_rate: RecoveryRate,
    pub spreads: SpreadQuotes,
}

impl PdRequest {
    pub fn new(recovery_rate: f64, s2: f64, s5: f64, s10: f64) -> Result<Self, AppError> {
        Ok(Self {
            recovery_rate: RecoveryRate::new(recovery_rate)?,
            spreads: SpreadQuotes::new(s2, s5, s10)?,
        })
    }
}

/// Final deliverable: cumulative and marginal PD on the stopping-time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdCurve {
    pub tenor_days: Vec<u32>,
    pub cumulative_pd: Vec<f64>,
    pub marginal_pd: Vec<f64>,
}

impl PdCurve {
    /// `(tenor_days, cumulative_pd, marginal_pd)` per grid point.
    ///
    /// Stops at the shortest of the three vectors.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.tenor_days
            .iter()
            .zip(&self.cumulative_pd)
            .zip(&self.marginal_pd)
            .map(|((&days, &cum), &marg)| (days, cum, marg))
    }

    pub fn len(&self) -> usize {
        self.tenor_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenor_days.is_empty()
    }
}

/// Run configuration for `pd calc`, assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct PdConfig {
    pub recovery_rate: f64,
    pub s2: f64,
    pub s5: f64,
    pub s10: f64,
    pub asof_date: NaiveDate,
    pub tenor_grid: Option<PathBuf>,
    pub show_annual: bool,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// Run configuration for `pd batch`.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub tenor_grid: Option<PathBuf>,
}

/// Inputs section of the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveInputs {
    pub recovery_rate: f64,
    pub lgd: f64,
    pub lgd_display: f64,
    pub s2: f64,
    pub s5: f64,
    pub s10: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRow {
    pub year: u32,
    pub spread: f64,
    pub cumulative_pd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorRow {
    pub tenor_days: u32,
    pub years: f64,
    pub cumulative_pd: f64,
    pub marginal_pd: f64,
}

/// Portable JSON representation of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub asof_date: NaiveDate,
    pub inputs: CurveInputs,
    pub days_per_year: u32,
    pub annual: Vec<AnnualRow>,
    pub tenors: Vec<TenorRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn recovery_rate_bounds() {
        assert!(RecoveryRate::new(0.0).is_ok());
        assert!(RecoveryRate::new(1.0).is_ok());
        assert_eq!(RecoveryRate::new(1.01).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(RecoveryRate::new(-0.01).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(RecoveryRate::new(f64::NAN).unwrap_err().kind(), ErrorKind::Domain);
    }

    #[test]
    fn lgd_keeps_full_precision() {
        let lgd = LossGivenDefault::from_recovery(RecoveryRate::new(0.333).unwrap());
        assert!((lgd.value() - 0.667).abs() < 1e-15);
        assert_eq!(lgd.display_rounded(), 0.67);
    }

    #[test]
    fn points_stop_at_shortest_vector() {
        let curve = PdCurve {
            tenor_days: vec![0, 5, 22],
            cumulative_pd: vec![0.0, 0.1],
            marginal_pd: vec![0.0, 0.1, 0.2],
        };
        let points: Vec<_> = curve.points().collect();
        assert_eq!(points, vec![(0, 0.0, 0.0), (5, 0.1, 0.1)]);
    }

    #[test]
    fn negative_spread_names_tenor() {
        let err = SpreadQuotes::new(0.01, -0.02, 0.03).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(err.message().contains("5y"), "{}", err.message());
    }
}
