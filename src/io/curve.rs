//! Curve JSON and tenor-grid JSON.
//!
//! The curve JSON is the portable record of a run: inputs (with the display
//! LGD alongside the full-precision one), the annual table, and the
//! stopping-time table. The schema is `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::app::pipeline::PdRun;
use crate::curve::{BUSINESS_DAYS_PER_YEAR, TenorGrid, days_to_years};
use crate::domain::{AnnualRow, CurveFile, CurveInputs, TenorRow};
use crate::error::AppError;

/// Assemble the export record for a run.
pub fn curve_file(run: &PdRun, asof_date: NaiveDate) -> CurveFile {
    let spreads = run.request.spreads;
    let inputs = CurveInputs {
        recovery_rate: run.request.recovery_rate.value(),
        lgd: run.lgd.value(),
        lgd_display: run.lgd.display_rounded(),
        s2: spreads.s2,
        s5: spreads.s5,
        s10: spreads.s10,
    };

    let annual = run
        .spreads
        .points()
        .iter()
        .zip(run.annual_pd.points())
        .map(|(s, pd)| AnnualRow {
            year: s.year,
            spread: s.value,
            cumulative_pd: pd.value,
        })
        .collect();

    let tenors = run
        .curve
        .points()
        .map(|(tenor_days, cumulative_pd, marginal_pd)| TenorRow {
            tenor_days,
            years: days_to_years(tenor_days),
            cumulative_pd,
            marginal_pd,
        })
        .collect();

    CurveFile {
        tool: "pd".to_string(),
        asof_date,
        inputs,
        days_per_year: BUSINESS_DAYS_PER_YEAR,
        annual,
        tenors,
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, run: &PdRun, asof_date: NaiveDate) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create curve JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, &curve_file(run, asof_date))
        .map_err(|e| AppError::io(format!("Failed to write curve JSON: {e}")))
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid curve JSON: {e}")))
}

/// Load an alternative stopping-time grid (a JSON array of business days).
///
/// Any failure here is a configuration error: the grid is process-wide.
pub fn read_tenor_grid(path: &Path) -> Result<TenorGrid, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::configuration(format!("Failed to open tenor grid '{}': {e}", path.display()))
    })?;
    let days: Vec<u32> = serde_json::from_reader(file).map_err(|e| {
        AppError::configuration(format!("Invalid tenor grid '{}': {e}", path.display()))
    })?;
    TenorGrid::new(days)
}
