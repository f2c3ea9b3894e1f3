use std::collections::HashMap;

use tracing::debug;

use crate::input::ImportError;
use crate::model::snapshot::MetricsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountField {
    TotalCalls,
    Gatekeepers,
    DecisionMakers,
    TotalEmails,
    EmailsOpened,
    EmailResponses,
}

pub const HIGHLIGHTS_KEY: &str = "highlights";

impl CountField {
    pub const ALL: [CountField; 6] = [
        CountField::TotalCalls,
        CountField::Gatekeepers,
        CountField::DecisionMakers,
        CountField::TotalEmails,
        CountField::EmailsOpened,
        CountField::EmailResponses,
    ];

    /// Normalized (lower-case) header key.
    pub fn key(self) -> &'static str {
        match self {
            CountField::TotalCalls => "totalcalls",
            CountField::Gatekeepers => "gatekeepers",
            CountField::DecisionMakers => "decisionmakers",
            CountField::TotalEmails => "totalemails",
            CountField::EmailsOpened => "emailsopened",
            CountField::EmailResponses => "emailresponses",
        }
    }

    /// Header name as written in the import template.
    pub fn header(self) -> &'static str {
        match self {
            CountField::TotalCalls => "totalCalls",
            CountField::Gatekeepers => "gatekeepers",
            CountField::DecisionMakers => "decisionMakers",
            CountField::TotalEmails => "totalEmails",
            CountField::EmailsOpened => "emailsOpened",
            CountField::EmailResponses => "emailResponses",
        }
    }

    pub fn slot(self, snapshot: &mut MetricsSnapshot) -> &mut u64 {
        match self {
            CountField::TotalCalls => &mut snapshot.total_calls,
            CountField::Gatekeepers => &mut snapshot.gatekeepers,
            CountField::DecisionMakers => &mut snapshot.decision_makers,
            CountField::TotalEmails => &mut snapshot.total_emails,
            CountField::EmailsOpened => &mut snapshot.emails_opened,
            CountField::EmailResponses => &mut snapshot.email_responses,
        }
    }
}

/// Column positions keyed by trimmed, lower-cased header text.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let mut columns = HashMap::with_capacity(cells.len());
        for (idx, cell) in cells.iter().enumerate() {
            let key = normalize_header(cell.as_ref());
            if columns.contains_key(&key) {
                debug!(column = idx, header = %key, "duplicate header; keeping first");
                continue;
            }
            columns.insert(key, idx);
        }
        Self { columns }
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.get(key).copied()
    }

    /// Value cell for `key`, or None when the column is absent from the
    /// header or the data row is too short to reach it.
    pub fn cell<'a>(&self, key: &str, values: &[&'a str]) -> Option<&'a str> {
        self.position(key).and_then(|idx| values.get(idx).copied())
    }

    /// Number of recognized snapshot columns present in the header.
    pub fn recognized(&self) -> usize {
        CountField::ALL
            .iter()
            .map(|f| f.key())
            .chain(std::iter::once(HIGHLIGHTS_KEY))
            .filter(|key| self.columns.contains_key(*key))
            .count()
    }
}

pub fn normalize_header(cell: &str) -> String {
    cell.trim().to_lowercase()
}

pub fn parse_count(cell: &str) -> Option<u64> {
    cell.trim().parse::<u64>().ok()
}

/// Field-by-field merge of one trimmed data row over `prior`.
///
/// In strict mode a non-empty cell that is not a count fails the merge;
/// otherwise it keeps the prior value.
pub fn merge_row(
    header: &HeaderIndex,
    values: &[&str],
    prior: &MetricsSnapshot,
    strict: bool,
) -> Result<MetricsSnapshot, ImportError> {
    let mut next = prior.clone();

    for field in CountField::ALL {
        let Some(cell) = header.cell(field.key(), values) else {
            continue;
        };
        match parse_count(cell) {
            Some(value) => *field.slot(&mut next) = value,
            None if strict && !cell.is_empty() => {
                return Err(ImportError::InvalidField {
                    field: field.header(),
                    value: cell.to_string(),
                });
            }
            None => {
                debug!(field = field.header(), value = cell, "unparseable count; keeping prior value");
            }
        }
    }

    if let Some(cell) = header.cell(HIGHLIGHTS_KEY, values) {
        if !cell.is_empty() {
            next.highlights = vec![cell.to_string()];
        }
    }

    Ok(next)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/fields.rs"]
mod tests;
