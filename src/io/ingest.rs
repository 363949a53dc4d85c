//! Batch request CSV ingest.
//!
//! Expected columns (case-insensitive, any order): `id`, `recovery_rate`, `s2`,
//! `s5`, `s10`. Values are decimals in `[0, 1]`, the same range the CLI accepts.
//!
//! Bad rows are skipped and reported; they never abort the whole file.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::PdRequest;
use crate::error::AppError;

const REQUIRED_COLUMNS: [&str; 5] = ["id", "recovery_rate", "s2", "s5", "s10"];

/// Upper bound the input boundary places on recovery rates and spreads.
pub const MAX_INPUT_VALUE: f64 = 1.0;

/// One valid request row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub line: usize,
    pub id: String,
    pub request: PdRequest,
}

/// A row-level error encountered during ingest or evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BatchInput {
    pub rows: Vec<BatchRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load batch requests from a CSV file.
pub fn load_batch_requests(path: &Path) -> Result<BatchInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open batch CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::io(format!("Failed to read batch CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for col in REQUIRED_COLUMNS {
        if !header_map.contains_key(col) {
            return Err(AppError::domain(format!("Missing required column: `{col}`")));
        }
    }

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let id = field(&record, &header_map, "id").unwrap_or_default().to_string();
        match parse_row(&record, &header_map) {
            Ok(request) => rows.push(BatchRow { line, id, request }),
            Err(message) => {
                tracing::warn!(line, id = %id, %message, "skipping batch row");
                row_errors.push(RowError {
                    line,
                    id: (!id.is_empty()).then_some(id),
                    message,
                });
            }
        }
    }

    tracing::info!(rows_read, rows_used = rows.len(), "batch CSV ingested");
    Ok(BatchInput {
        rows,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn field<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    header_map.get(name).and_then(|&idx| record.get(idx))
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<PdRequest, String> {
    let id = field(record, header_map, "id").unwrap_or_default();
    if id.is_empty() {
        return Err("Missing `id`.".to_string());
    }
    let rr = parse_unit_value(record, header_map, "recovery_rate")?;
    let s2 = parse_unit_value(record, header_map, "s2")?;
    let s5 = parse_unit_value(record, header_map, "s5")?;
    let s10 = parse_unit_value(record, header_map, "s10")?;
    PdRequest::new(rr, s2, s5, s10).map_err(|e| e.message().to_string())
}

fn parse_unit_value(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Result<f64, String> {
    let raw = field(record, header_map, name).unwrap_or_default();
    if raw.is_empty() {
        return Err(format!("Missing `{name}`."));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("Invalid number for `{name}`: '{raw}'."))?;
    check_unit_range(name, value)
}

/// Range check applied at the input boundary: finite and within `[0, 1]`.
pub fn check_unit_range(name: &str, value: f64) -> Result<f64, String> {
    if !value.is_finite() || !(0.0..=MAX_INPUT_VALUE).contains(&value) {
        return Err(format!("`{name}` must be within [0, {MAX_INPUT_VALUE}], got {value}."));
    }
    Ok(value)
}
