//! Command-line parsing for the default-probability calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! curve math. Range checks on the four scalars happen here, at the input
//! boundary; the pipeline re-checks them defensively.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::io::ingest::check_unit_range;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pd", version, about = "Default probability term structure from 2y/5y/10y spreads")]
pub struct Cli {
    /// Log pipeline stages to stderr (same as `PD_LOG=debug`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute one counterparty's cumulative and marginal PD curve.
    Calc(CalcArgs),
    /// Compute one curve per row of a CSV file (`id,recovery_rate,s2,s5,s10`).
    Batch(BatchArgs),
    /// Print the tables of a previously exported curve JSON.
    Show(ShowArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    /// Recovery rate, in [0, 1].
    #[arg(long = "rr", value_parser = parse_unit_interval)]
    pub recovery_rate: f64,

    /// 2-year spread (decimal, e.g. 0.01 for 100bp).
    #[arg(long, value_parser = parse_unit_interval)]
    pub s2: f64,

    /// 5-year spread (decimal).
    #[arg(long, value_parser = parse_unit_interval)]
    pub s5: f64,

    /// 10-year spread (decimal).
    #[arg(long, value_parser = parse_unit_interval)]
    pub s10: f64,

    /// As-of date recorded in exports (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub asof: Option<NaiveDate>,

    /// Also print the 21-point annual spread / cumulative PD table.
    #[arg(long)]
    pub annual: bool,

    /// JSON array of business-day stopping times replacing the built-in grid.
    #[arg(long, value_name = "JSON")]
    pub tenor_grid: Option<PathBuf>,

    /// Export the stopping-time table to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,

    /// Export the full run (inputs, annual and stopping-time tables) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Input CSV with columns `id,recovery_rate,s2,s5,s10`.
    #[arg(long, value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV (long format). Written to stdout when omitted.
    #[arg(long, value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// JSON array of business-day stopping times replacing the built-in grid.
    #[arg(long, value_name = "JSON")]
    pub tenor_grid: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Curve JSON file produced by `pd calc --export-json`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Also print the annual table.
    #[arg(long)]
    pub annual: bool,
}

fn parse_unit_interval(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    check_unit_range("value", value)
}
