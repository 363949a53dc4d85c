//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - builds the process-wide tenor grid
//! - runs the pipeline (single or batch)
//! - prints tables and writes optional exports

use std::path::Path;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{BatchArgs, CalcArgs, Command, ShowArgs};
use crate::domain::{BatchConfig, PdConfig, PdRequest};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `pd` binary.
pub fn run() -> Result<(), AppError> {
    // `pd --rr 0.4 ...` is shorthand for `pd calc --rr 0.4 ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    init_logging(cli.verbose);

    match cli.command {
        Command::Calc(args) => handle_calc(&calc_config_from_args(&args)),
        Command::Batch(args) => handle_batch(&batch_config_from_args(&args)),
        Command::Show(args) => handle_show(&args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PD_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    // Logs go to stderr so stdout stays a clean table/CSV stream.
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("pd: logging disabled: {err}");
    }
}

fn handle_calc(config: &PdConfig) -> Result<(), AppError> {
    let regridder = pipeline::load_regridder(config.tenor_grid.as_deref())?;
    let request = PdRequest::new(config.recovery_rate, config.s2, config.s5, config.s10)?;
    let run = pipeline::run_pd(&request, &regridder)?;
    let curve = crate::io::curve::curve_file(&run, config.asof_date);

    print!("{}", crate::report::format_run_summary(&curve));
    if config.show_annual {
        println!("{}", crate::report::format_annual_table(&curve.annual));
    }
    print!("{}", crate::report::format_tenor_table(&curve.tenors));

    if let Some(path) = &config.export_csv {
        crate::io::export::write_tenor_csv(path, &run.curve)?;
        tracing::info!(path = %path.display(), "wrote tenor CSV");
    }
    if let Some(path) = &config.export_json {
        crate::io::curve::write_curve_json(path, &run, config.asof_date)?;
        tracing::info!(path = %path.display(), "wrote curve JSON");
    }

    Ok(())
}

fn handle_batch(config: &BatchConfig) -> Result<(), AppError> {
    let regridder = pipeline::load_regridder(config.tenor_grid.as_deref())?;
    let input = crate::io::ingest::load_batch_requests(&config.input)?;
    let outcomes = pipeline::run_batch(&input.rows, &regridder);

    match &config.output {
        Some(path) => write_batch_file(path, &outcomes)?,
        None => crate::io::export::write_batch_rows(std::io::stdout().lock(), &outcomes)?,
    }

    eprint!(
        "{}",
        crate::report::format_batch_summary(input.rows_read, &input.row_errors, &outcomes)
    );
    Ok(())
}

fn write_batch_file(path: &Path, outcomes: &[pipeline::BatchOutcome]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create batch CSV '{}': {e}", path.display())))?;
    crate::io::export::write_batch_rows(file, outcomes)
}

fn handle_show(args: &ShowArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;

    print!("{}", crate::report::format_run_summary(&curve));
    if args.annual {
        println!("{}", crate::report::format_annual_table(&curve.annual));
    }
    print!("{}", crate::report::format_tenor_table(&curve.tenors));
    Ok(())
}

pub fn calc_config_from_args(args: &CalcArgs) -> PdConfig {
    PdConfig {
        recovery_rate: args.recovery_rate,
        s2: args.s2,
        s5: args.s5,
        s10: args.s10,
        asof_date: args.asof.unwrap_or_else(|| Local::now().date_naive()),
        tenor_grid: args.tenor_grid.clone(),
        show_annual: args.annual,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
    }
}

pub fn batch_config_from_args(args: &BatchArgs) -> BatchConfig {
    BatchConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        tenor_grid: args.tenor_grid.clone(),
    }
}

/// Rewrite argv so a leading flag selects `calc`.
///
/// Rules:
/// - `pd --rr 0.4 ...`          -> `pd calc --rr 0.4 ...`
/// - `pd -v --rr 0.4 ...`       -> `pd calc -v --rr 0.4 ...`
/// - `pd --help/--version/-h`   -> unchanged (show top-level help/version)
/// - `pd` / `pd <subcommand>`   -> unchanged
/// - `pd -v <subcommand> ...`   -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let has_subcommand = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "calc" | "batch" | "show"));
    if arg1.starts_with('-') && !has_subcommand {
        argv.insert(1, "calc".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn leading_flag_selects_calc() {
        assert_eq!(
            rewrite_args(argv(&["pd", "--rr", "0.4"])),
            argv(&["pd", "calc", "--rr", "0.4"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        let cases: [&[&str]; 7] = [
            &["pd"],
            &["pd", "--help"],
            &["pd", "-V"],
            &["pd", "batch", "--input", "x.csv"],
            &["pd", "show", "--curve", "c.json"],
            &["pd", "-v", "calc", "--rr", "0.4", "--s2", "0.01", "--s5", "0.02", "--s10", "0.03"],
            &["pd", "-v", "batch", "--input", "x.csv"],
        ];
        for items in cases {
            assert_eq!(rewrite_args(argv(items)), argv(items));
        }
    }

    #[test]
    fn verbose_before_subcommand_parses() {
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&[
            "pd", "-v", "calc", "--rr", "0.4", "--s2", "0.01", "--s5", "0.02", "--s10", "0.03",
        ])))
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Calc(_)));

        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&["pd", "-v", "batch", "--input", "x.csv"])))
            .unwrap();
        assert!(matches!(cli.command, Command::Batch(_)));
    }

    #[test]
    fn calc_config_defaults_asof_to_today() {
        let cli = crate::cli::Cli::try_parse_from(
            rewrite_args(argv(&["pd", "--rr", "0.4", "--s2", "0.01", "--s5", "0.02", "--s10", "0.03"])),
        )
        .unwrap();
        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let config = calc_config_from_args(&args);
        assert_eq!(config.asof_date, Local::now().date_naive());
        assert!(config.export_csv.is_none());
        assert!(!config.show_annual);
    }
}
