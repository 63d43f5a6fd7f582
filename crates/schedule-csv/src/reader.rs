//! Schedule table parser.

use std::fs;
use std::path::Path;

use crate::schema::{ScheduleRow, COLUMN_COUNT};

/// Errors that can occur when reading a schedule table.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Malformed CSV in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("{path}: line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Read and parse a schedule table from disk.
pub fn read_schedule(path: &Path) -> Result<Vec<ScheduleRow>, ParseError> {
    let bytes = fs::read(path).map_err(|e| ParseError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_schedule(&bytes, &path.display().to_string())
}

/// Parse a schedule table.
///
/// The first record is a header and is discarded. Every remaining record must
/// carry exactly [`COLUMN_COUNT`] fields. `origin` names the source in errors.
pub fn parse_schedule(input: &[u8], origin: &str) -> Result<Vec<ScheduleRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError::Csv {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        // Header
        if index == 0 {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row = ScheduleRow::from_cells(record.iter()).ok_or_else(|| ParseError::ColumnCount {
            path: origin.to_string(),
            line,
            expected: COLUMN_COUNT,
            found: record.len(),
        })?;

        rows.push(row);
    }

    tracing::debug!("Parsed {} rows from {}", rows.len(), origin);

    Ok(rows)
}
