use crate::model::derived::DerivedMetrics;
use crate::model::snapshot::MetricsSnapshot;
use crate::report::format_count;

pub fn render_dashboard_text(snapshot: &MetricsSnapshot, derived: &DerivedMetrics) -> String {
    let pct = derived.formatted();
    let mut out = String::new();

    out.push_str("Outreach Campaign Dashboard\n");
    out.push_str("===========================\n\n");

    out.push_str("1. Calls\n");
    out.push_str(&format!("Total calls: {}\n", format_count(snapshot.total_calls)));
    out.push_str(&format!(
        "Gatekeepers reached: {} ({}% penetration)\n",
        format_count(snapshot.gatekeepers),
        pct.call_penetration
    ));
    out.push_str(&format!(
        "Decision makers reached: {} ({}% conversion)\n\n",
        format_count(snapshot.decision_makers),
        pct.dm_conversion
    ));

    out.push_str("2. Emails\n");
    out.push_str(&format!("Total emails: {}\n", format_count(snapshot.total_emails)));
    out.push_str(&format!(
        "Opened: {} ({}% open rate)\n",
        format_count(snapshot.emails_opened),
        pct.email_open_rate
    ));
    out.push_str(&format!(
        "Responses: {} ({}% reply rate)\n\n",
        format_count(snapshot.email_responses),
        pct.email_reply_rate
    ));

    out.push_str("3. Highlights\n");
    for (idx, highlight) in snapshot.highlights.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, highlight));
    }

    let violations = snapshot.check_invariants();
    if !violations.is_empty() {
        out.push_str("\nWarnings\n");
        for v in violations {
            out.push_str(&format!("- {}\n", v));
        }
    }

    out
}
