//! CSV exports of the stopping-time tables.
//!
//! Column layout is meant for spreadsheets: one row per grid tenor with the
//! tenor in business days and in years.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::BatchOutcome;
use crate::curve::days_to_years;
use crate::domain::PdCurve;
use crate::error::AppError;

/// Write a single curve as `tenor_days,years,cumulative_pd,marginal_pd`.
pub fn write_tenor_csv(path: &Path, curve: &PdCurve) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_tenor_rows(file, curve)
}

pub fn write_tenor_rows<W: Write>(out: W, curve: &PdCurve) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["tenor_days", "years", "cumulative_pd", "marginal_pd"])
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for (days, cumulative, marginal) in curve.points() {
        writer
            .write_record([
                days.to_string(),
                format!("{:.6}", days_to_years(days)),
                format!("{cumulative:.12}"),
                format!("{marginal:.12}"),
            ])
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush export CSV: {e}")))
}

/// Write batch results in long format: `id,tenor_days,years,cumulative_pd,marginal_pd`.
///
/// Rows whose evaluation failed are omitted; callers report them separately.
pub fn write_batch_rows<W: Write>(out: W, outcomes: &[BatchOutcome]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["id", "tenor_days", "years", "cumulative_pd", "marginal_pd"])
        .map_err(|e| AppError::io(format!("Failed to write batch CSV header: {e}")))?;

    for outcome in outcomes {
        let Ok(curve) = &outcome.result else {
            continue;
        };
        for (days, cumulative, marginal) in curve.points() {
            writer
                .write_record([
                    outcome.id.clone(),
                    days.to_string(),
                    format!("{:.6}", days_to_years(days)),
                    format!("{cumulative:.12}"),
                    format!("{marginal:.12}"),
                ])
                .map_err(|e| AppError::io(format!("Failed to write batch CSV row: {e}")))?;
        }
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush batch CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn curve() -> PdCurve {
        PdCurve {
            tenor_days: vec![0, 264, 528],
            cumulative_pd: vec![0.0, 0.01, 0.03],
            marginal_pd: vec![0.0, 0.01, 0.02],
        }
    }

    #[test]
    fn tenor_csv_has_header_and_one_row_per_tenor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pd.csv");
        write_tenor_csv(&path, &curve()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "tenor_days,years,cumulative_pd,marginal_pd");
        assert_eq!(lines[2], "264,1.000000,0.010000000000,0.010000000000");
    }

    #[test]
    fn ragged_curve_writes_complete_rows_only() {
        let ragged = PdCurve {
            tenor_days: vec![0, 264, 528],
            cumulative_pd: vec![0.0, 0.01],
            marginal_pd: vec![0.0],
        };
        let mut buf = Vec::new();
        write_tenor_rows(&mut buf, &ragged).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn batch_rows_skip_failed_outcomes() {
        let outcomes = vec![
            BatchOutcome {
                line: 2,
                id: "acme".to_string(),
                result: Ok(curve()),
            },
            BatchOutcome {
                line: 3,
                id: "par".to_string(),
                result: Err(AppError::degenerate("lgd is 0")),
            },
        ];
        let mut buf = Vec::new();
        write_batch_rows(&mut buf, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().skip(1).all(|l| l.starts_with("acme,")));
    }
}
