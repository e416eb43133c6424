//! Batch RUT checking for CSV exports (user and contractor imports).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::{info, trace, warn};

use cmms_model::RutValidation;
use cmms_validate::{clean_rut, format_rut, validate_rut_with_message};

use crate::logging::redact_value;

/// One checked row of the input file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub input: String,
    pub formatted: String,
    #[serde(flatten)]
    pub outcome: RutValidation,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub column: String,
    pub total: usize,
    pub invalid: usize,
    pub rows: Vec<BatchRow>,
}

impl BatchReport {
    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}

pub fn check_file(path: &Path, column: &str) -> Result<BatchReport> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open {}", path.display()))?;
    check_reader(file, column).with_context(|| format!("read {}", path.display()))
}

/// Check every value of `column` (matched case-insensitively).
///
/// Blank cells are checked too and reported as missing.
pub fn check_reader<R: Read>(reader: R, column: &str) -> Result<BatchReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader.headers().context("read header row")?.clone();
    let index = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(column))
        .ok_or_else(|| anyhow!("column '{column}' not found in header"))?;

    let mut rows = Vec::new();
    for (offset, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("parse row {}", offset + 1))?;
        let input = record.get(index).unwrap_or_default().to_string();
        trace!(row = offset + 1, input = redact_value(&input), "checking rut");
        let outcome = validate_rut_with_message(&input);
        if !outcome.is_valid {
            warn!(row = offset + 1, "rut rejected");
        }
        rows.push(BatchRow {
            row: offset + 1,
            formatted: if outcome.is_valid {
                format_rut(&input)
            } else {
                clean_rut(&input)
            },
            input,
            outcome,
        });
    }

    let invalid = rows.iter().filter(|row| !row.outcome.is_valid).count();
    info!(total = rows.len(), invalid, "batch checked");
    Ok(BatchReport {
        column: headers[index].to_string(),
        total: rows.len(),
        invalid,
        rows,
    })
}
