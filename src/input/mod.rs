use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::snapshot::{InvariantViolation, MetricsSnapshot};

pub mod fields;
pub mod rows;

use fields::{HeaderIndex, merge_row};
use rows::read_rows;

pub const CSV_SUFFIX: &str = ".csv";
const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid file type: {file_name} does not end in .csv")]
    InvalidFileType { file_name: String },
    #[error("malformed file: expected a header line and a data line, found {lines} line(s)")]
    MalformedFile { lines: usize },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("snapshot violates invariants: {}", join_violations(.0))]
    InvariantViolation(Vec<InvariantViolation>),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ImportError {
    /// Message shown to the operator after a failed upload.
    pub fn status_message(&self) -> String {
        match self {
            ImportError::InvalidFileType { .. } => "Please upload a valid CSV file.".to_string(),
            ImportError::MalformedFile { .. } | ImportError::Parse(_) => {
                "Failed to parse CSV. Check your format.".to_string()
            }
            ImportError::InvalidField { field, value } => {
                format!("Failed to parse CSV: {field} has non-numeric value {value:?}.")
            }
            ImportError::InvariantViolation(violations) => {
                format!("Rejected CSV: {}.", join_violations(violations))
            }
            ImportError::Io { path, .. } => format!("Could not read {}.", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tokenizer {
    /// Quote-aware tokenizer; commas inside quoted cells are kept.
    #[default]
    Quoted,
    /// Plain split on line feeds and commas, no quoting.
    Naive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    pub strict_mode: bool,
    pub tokenizer: Tokenizer,
    pub enforce_invariants: bool,
}

pub fn check_file_name(file_name: &str) -> Result<(), ImportError> {
    if file_name.ends_with(CSV_SUFFIX) {
        Ok(())
    } else {
        Err(ImportError::InvalidFileType {
            file_name: file_name.to_string(),
        })
    }
}

/// Like [`import_snapshot`], for raw file bytes. The name is checked before
/// the bytes are decoded.
pub fn import_bytes(
    file_name: &str,
    bytes: &[u8],
    prior: &MetricsSnapshot,
    options: &ImportOptions,
) -> Result<MetricsSnapshot, ImportError> {
    check_file_name(file_name)?;
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ImportError::Parse(format!("file is not valid UTF-8: {e}")))?;
    import_snapshot(file_name, text, prior, options)
}

/// Parses one uploaded file and merges its first data row over `prior`.
///
/// Recognized numeric columns replace the prior value only when the cell
/// parses as a base-10 count; absent columns and empty cells keep the prior
/// value. `prior` is never modified.
pub fn import_snapshot(
    file_name: &str,
    text: &str,
    prior: &MetricsSnapshot,
    options: &ImportOptions,
) -> Result<MetricsSnapshot, ImportError> {
    check_file_name(file_name)?;

    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let rows = read_rows(text, options.tokenizer)?;
    if rows.len() < 2 {
        return Err(ImportError::MalformedFile { lines: rows.len() });
    }

    let header = HeaderIndex::from_cells(rows[0].as_slice());
    let values: Vec<&str> = rows[1].iter().map(|v| v.trim()).collect();
    debug!(
        file = file_name,
        recognized = header.recognized(),
        cells = values.len(),
        "parsed header and first data row"
    );

    let merged = merge_row(&header, &values, prior, options.strict_mode)?;

    let violations = merged.check_invariants();
    if !violations.is_empty() {
        if options.enforce_invariants {
            return Err(ImportError::InvariantViolation(violations));
        }
        warn!(
            file = file_name,
            violations = %join_violations(&violations),
            "imported snapshot violates count invariants"
        );
    }

    debug!(
        file = file_name,
        total_calls = merged.total_calls,
        total_emails = merged.total_emails,
        "snapshot imported"
    );
    Ok(merged)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/import.rs"]
mod tests;
