//! Shared pipeline logic used by the `calc` and `batch` front-ends.
//!
//! One request flows strictly forward:
//! RR -> LGD -> annual spreads -> annual cumulative PD -> regridded PD -> marginal PD
//!
//! The regridder (and the grid it owns) is built once by the caller and only
//! borrowed here, so any number of runs can share it.

use std::path::Path;

use rayon::prelude::*;

use crate::curve::{
    AnnualPdCurve, AnnualSpreadCurve, TenorGrid, TenorRegridder, build_pd_curve, cumulative_pd,
    loss_given_default,
};
use crate::domain::{LossGivenDefault, PdCurve, PdRequest};
use crate::error::AppError;
use crate::io::ingest::BatchRow;

/// All computed outputs of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct PdRun {
    pub request: PdRequest,
    pub lgd: LossGivenDefault,
    pub spreads: AnnualSpreadCurve,
    pub annual_pd: AnnualPdCurve,
    pub curve: PdCurve,
}

/// Result of one batch row.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub line: usize,
    pub id: String,
    pub result: Result<PdCurve, AppError>,
}

/// Execute the full pipeline for one request.
pub fn run_pd(request: &PdRequest, regridder: &TenorRegridder) -> Result<PdRun, AppError> {
    // 1) Recovery rate -> LGD.
    let lgd = loss_given_default(request.recovery_rate.value())?;

    // 2) Anchors -> annual spread curve.
    let spreads = AnnualSpreadCurve::build(&request.spreads)?;

    // 3) Hazard transform.
    let annual_pd = cumulative_pd(&spreads, lgd)?;

    // 4) Regrid onto stopping times.
    let cumulative = regridder.regrid(&annual_pd)?;

    // 5) Difference into marginal PDs.
    let curve = build_pd_curve(regridder.grid().days(), cumulative)?;

    Ok(PdRun {
        request: *request,
        lgd,
        spreads,
        annual_pd,
        curve,
    })
}

/// Convenience wrapper: validate raw scalars, then run.
pub fn compute_pd_curve(
    recovery_rate: f64,
    s2: f64,
    s5: f64,
    s10: f64,
    regridder: &TenorRegridder,
) -> Result<PdCurve, AppError> {
    let request = PdRequest::new(recovery_rate, s2, s5, s10)?;
    run_pd(&request, regridder).map(|run| run.curve)
}

/// Evaluate independent rows in parallel. Output order matches input order.
pub fn run_batch(rows: &[BatchRow], regridder: &TenorRegridder) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = rows
        .par_iter()
        .map(|row| BatchOutcome {
            line: row.line,
            id: row.id.clone(),
            result: run_pd(&row.request, regridder).map(|run| run.curve),
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    tracing::info!(rows = outcomes.len(), failed, "batch evaluated");
    outcomes
}

/// Build the process-wide regridder from the standard grid or a grid file.
pub fn load_regridder(tenor_grid: Option<&Path>) -> Result<TenorRegridder, AppError> {
    let grid = match tenor_grid {
        Some(path) => crate::io::curve::read_tenor_grid(path)?,
        None => TenorGrid::standard(),
    };
    tracing::debug!(points = grid.len(), last_tenor = grid.last(), "tenor grid loaded");
    Ok(TenorRegridder::new(grid))
}
