use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGHLIGHT: &str =
    "Contact established with 2 DME companies and they will give time for zoom meeting.";

/// One reporting period of outreach activity.
///
/// Counts are never negative. `highlights` is kept in display order and the
/// import path never leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_calls: u64,
    pub gatekeepers: u64,
    pub decision_makers: u64,
    pub total_emails: u64,
    pub emails_opened: u64,
    pub email_responses: u64,
    pub highlights: Vec<String>,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            total_calls: 2143,
            gatekeepers: 657,
            decision_makers: 13,
            total_emails: 3245,
            emails_opened: 452,
            email_responses: 0,
            highlights: vec![DEFAULT_HIGHLIGHT.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantViolation {
    GatekeepersExceedCalls,
    DecisionMakersExceedCalls,
    OpenedExceedEmails,
    ResponsesExceedEmails,
    EmptyHighlights,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvariantViolation::GatekeepersExceedCalls => "gatekeepers exceed totalCalls",
            InvariantViolation::DecisionMakersExceedCalls => "decisionMakers exceed totalCalls",
            InvariantViolation::OpenedExceedEmails => "emailsOpened exceed totalEmails",
            InvariantViolation::ResponsesExceedEmails => "emailResponses exceed totalEmails",
            InvariantViolation::EmptyHighlights => "highlights is empty",
        };
        f.write_str(text)
    }
}

impl MetricsSnapshot {
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut out = Vec::new();
        if self.gatekeepers > self.total_calls {
            out.push(InvariantViolation::GatekeepersExceedCalls);
        }
        if self.decision_makers > self.total_calls {
            out.push(InvariantViolation::DecisionMakersExceedCalls);
        }
        if self.emails_opened > self.total_emails {
            out.push(InvariantViolation::OpenedExceedEmails);
        }
        if self.email_responses > self.total_emails {
            out.push(InvariantViolation::ResponsesExceedEmails);
        }
        if self.highlights.is_empty() {
            out.push(InvariantViolation::EmptyHighlights);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/snapshot.rs"]
mod tests;
