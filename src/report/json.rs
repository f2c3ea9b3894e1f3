use serde::Serialize;

use crate::model::derived::{DerivedMetrics, FormattedMetrics};
use crate::model::snapshot::{InvariantViolation, MetricsSnapshot};
use crate::session::UploadStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardDocument<'a> {
    tool: &'static str,
    version: &'static str,
    snapshot: &'a MetricsSnapshot,
    derived: &'a DerivedMetrics,
    display: FormattedMetrics,
    warnings: Vec<InvariantViolation>,
    status: Option<&'a UploadStatus>,
}

pub fn render_dashboard_json(
    snapshot: &MetricsSnapshot,
    derived: &DerivedMetrics,
    status: Option<&UploadStatus>,
) -> Result<String, serde_json::Error> {
    let doc = DashboardDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        snapshot,
        derived,
        display: derived.formatted(),
        warnings: snapshot.check_invariants(),
        status,
    };
    serde_json::to_string_pretty(&doc)
}
