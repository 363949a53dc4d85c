//! `pd-curves` library crate.
//!
//! Computes a counterparty's term structure of default probabilities from a
//! recovery rate and 2y/5y/10y credit spreads.
//!
//! The binary (`pd`) is a thin wrapper around this library so that the curve
//! pipeline is testable and reusable without spawning processes.

pub mod app;
pub mod cli;
pub mod curve;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;

pub use app::pipeline::{PdRun, compute_pd_curve, run_pd};
pub use curve::{BUSINESS_DAYS_PER_YEAR, STANDARD_STOPPING_TIMES, TenorGrid, TenorRegridder};
pub use domain::{PdCurve, PdRequest};
pub use error::{AppError, ErrorKind};
