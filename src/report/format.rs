//! Formatted terminal output.
//!
//! Everything here works from `CurveFile`, so a fresh run and a reloaded JSON
//! export print identically.

use crate::app::pipeline::BatchOutcome;
use crate::domain::{AnnualRow, CurveFile, TenorRow};
use crate::io::ingest::RowError;

/// Header block: as-of date, inputs, and the 2-decimal LGD.
pub fn format_run_summary(curve: &CurveFile) -> String {
    let inputs = &curve.inputs;
    let mut out = String::new();

    out.push_str("=== pd - Default Probability Term Structure ===\n");
    out.push_str(&format!("As-of: {}\n", curve.asof_date));
    out.push_str(&format!(
        "Recovery rate: {} -> LGD {:.2}\n",
        inputs.recovery_rate, inputs.lgd_display
    ));
    out.push_str("Spread anchors:\n");
    out.push_str(&format!("  {:>5}  {:>10}\n", "year", "spread"));
    for (year, spread) in [(0, 0.0), (2, inputs.s2), (5, inputs.s5), (10, inputs.s10)] {
        out.push_str(&format!("  {year:>5}  {spread:>10.6}\n"));
    }
    out.push_str(&format!(
        "Grid: {} stopping times, {} business days/year\n",
        curve.tenors.len(),
        curve.days_per_year
    ));
    out.push('\n');

    out
}

/// Annual spread and cumulative PD per integer year.
pub fn format_annual_table(rows: &[AnnualRow]) -> String {
    let mut out = String::new();
    out.push_str("Annual curve:\n");
    out.push_str(&format!("{:>5}  {:>12}  {:>14}\n", "year", "spread", "cumulative_pd"));
    for r in rows {
        out.push_str(&format!(
            "{:>5}  {:>12.8}  {:>14.10}\n",
            r.year, r.spread, r.cumulative_pd
        ));
    }
    out
}

/// Stopping-time table: marginal and cumulative PD per tenor.
pub fn format_tenor_table(rows: &[TenorRow]) -> String {
    let mut out = String::new();
    out.push_str("Default probabilities by stopping time:\n");
    out.push_str(&format!(
        "{:>6}  {:>8}  {:>14}  {:>14}\n",
        "tenor", "years", "marginal_pd", "cumulative_pd"
    ));
    for r in rows {
        out.push_str(&format!(
            "{:>6}  {:>8.4}  {:>14.10}  {:>14.10}\n",
            r.tenor_days, r.years, r.marginal_pd, r.cumulative_pd
        ));
    }
    out
}

/// Batch footer: counts plus every skipped or failed row.
pub fn format_batch_summary(rows_read: usize, row_errors: &[RowError], outcomes: &[BatchOutcome]) -> String {
    let failed: Vec<&BatchOutcome> = outcomes.iter().filter(|o| o.result.is_err()).collect();
    let mut out = String::new();
    out.push_str(&format!(
        "Batch: rows_read={} evaluated={} failed={} skipped={}\n",
        rows_read,
        outcomes.len() - failed.len(),
        failed.len(),
        row_errors.len()
    ));
    for e in row_errors {
        out.push_str(&format!(
            "  line {} [{}] skipped: {}\n",
            e.line,
            e.id.as_deref().unwrap_or("-"),
            e.message
        ));
    }
    for o in failed {
        if let Err(err) = &o.result {
            out.push_str(&format!("  line {} [{}] failed: {}\n", o.line, o.id, err));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn tenor_table_has_one_line_per_row() {
        let rows = vec![
            TenorRow {
                tenor_days: 0,
                years: 0.0,
                cumulative_pd: 0.0,
                marginal_pd: 0.0,
            },
            TenorRow {
                tenor_days: 264,
                years: 1.0,
                cumulative_pd: 0.0083,
                marginal_pd: 0.0083,
            },
        ];
        let text = format_tenor_table(&rows);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().last().unwrap().trim_start().starts_with("264"));
    }

    #[test]
    fn run_summary_shows_two_decimal_lgd() {
        let request = crate::domain::PdRequest::new(0.333, 0.01, 0.02, 0.03).unwrap();
        let run = crate::app::pipeline::run_pd(&request, &crate::curve::TenorRegridder::default()).unwrap();
        let asof = chrono::NaiveDate::from_ymd_opt(2024, 3, 28).unwrap();
        let text = format_run_summary(&crate::io::curve::curve_file(&run, asof));
        assert!(text.contains("Recovery rate: 0.333 -> LGD 0.67"), "{text}");
        assert!(text.contains("As-of: 2024-03-28"));
        assert!(text.contains("Grid: 79 stopping times, 264 business days/year"));
    }

    #[test]
    fn batch_summary_lists_problems() {
        let errors = vec![RowError {
            line: 4,
            id: None,
            message: "Missing `id`.".to_string(),
        }];
        let outcomes = vec![BatchOutcome {
            line: 3,
            id: "par".to_string(),
            result: Err(AppError::degenerate("LGD is 0")),
        }];
        let text = format_batch_summary(2, &errors, &outcomes);
        assert!(text.starts_with("Batch: rows_read=2 evaluated=0 failed=1 skipped=1"));
        assert!(text.contains("line 4 [-] skipped"));
        assert!(text.contains("line 3 [par] failed: LGD is 0"));
    }
}
