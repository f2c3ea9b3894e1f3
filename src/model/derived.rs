use serde::Serialize;

use crate::model::snapshot::MetricsSnapshot;

/// Display ratios, in percent with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub call_penetration: f64,
    pub dm_conversion: f64,
    pub email_open_rate: f64,
    pub email_reply_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedMetrics {
    pub call_penetration: String,
    pub dm_conversion: String,
    pub email_open_rate: String,
    pub email_reply_rate: String,
}

impl DerivedMetrics {
    pub fn formatted(&self) -> FormattedMetrics {
        FormattedMetrics {
            call_penetration: format_percent_1(self.call_penetration),
            dm_conversion: format_percent_1(self.dm_conversion),
            email_open_rate: format_percent_1(self.email_open_rate),
            email_reply_rate: format_percent_1(self.email_reply_rate),
        }
    }
}

pub fn derive_metrics(snapshot: &MetricsSnapshot) -> DerivedMetrics {
    DerivedMetrics {
        call_penetration: percent_1dp(snapshot.gatekeepers, snapshot.total_calls),
        dm_conversion: percent_1dp(snapshot.decision_makers, snapshot.total_calls),
        email_open_rate: percent_1dp(snapshot.emails_opened, snapshot.total_emails),
        email_reply_rate: percent_1dp(snapshot.email_responses, snapshot.total_emails),
    }
}

/// `part / whole * 100`, rounded half away from zero to one decimal.
///
/// A zero `whole` yields 0.0. Results are clipped to 100.0.
pub fn percent_1dp(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    // tenths of a percent: part * 1000 / whole, +0.5 before truncation
    let numer = part as u128 * 2000 + whole as u128;
    let tenths = numer / (2 * whole as u128);
    clip_percent(tenths as f64 / 10.0)
}

pub fn clip_percent(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 100.0 {
        100.0
    } else {
        x
    }
}

pub fn format_percent_1(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/derived.rs"]
mod tests;
