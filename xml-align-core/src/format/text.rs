use crate::align::report::AlignReport;

/// Format an alignment report as readable multi-line text.
pub fn format_text(report: &AlignReport) -> String {
    let mut lines = vec![
        format!("matched elements:      {}", report.matched),
        format!("  with zero score:     {}", report.zero_score),
        format!("template-only:         {}", report.unmatched_template),
        format!("passthrough elements:  {}", report.passthrough),
    ];
    if report.zero_score > 0 {
        lines.push(
            "note: zero-score matches usually mean the documents differ structurally".to_string(),
        );
    }
    lines.join("\n")
}

/// Format a one-line summary of alignment counts.
pub fn format_summary(report: &AlignReport) -> String {
    format!(
        "matched={} zero_score={} unmatched_template={} passthrough={}",
        report.matched, report.zero_score, report.unmatched_template, report.passthrough
    )
}
