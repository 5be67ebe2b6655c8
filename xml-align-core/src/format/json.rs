use crate::align::report::AlignReport;

/// Format an alignment report as JSON.
pub fn format_json(report: &AlignReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
