use serde::Serialize;

/// Match statistics accumulated across a whole alignment run.
///
/// Counts cover every recursion level, not just the root's children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignReport {
    /// Template children that consumed a candidate.
    pub matched: usize,
    /// Matches whose best available score was 0 — the greedy selection
    /// accepts those rather than leave the candidate unplaced, so a high
    /// count here usually means the two documents differ structurally.
    pub zero_score: usize,
    /// Template children skipped because no candidates remained.
    pub unmatched_template: usize,
    /// Children with no template counterpart, appended after the matched
    /// block in their original relative order.
    pub passthrough: usize,
}
