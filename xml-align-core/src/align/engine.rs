use crate::align::report::AlignReport;
use crate::score::score;
use crate::select::max_by_key;
use crate::tree::XmlNode;

/// Reorder `unsorted`'s children, recursively, to match `template`'s
/// child order.
///
/// For each template child in template order, the best-scoring remaining
/// candidate is taken (first-seen among ties). Children without a template
/// counterpart keep their original relative order after the matched block.
/// No node is created, duplicated, or dropped: the child set is unchanged,
/// only its order moves.
///
/// Matching is greedy per level, not a globally optimal assignment. That
/// is a deliberate tradeoff: the inputs are assumed to be two versions of
/// the same document, where local best matches are almost always right.
pub fn align(template: &XmlNode, unsorted: &mut XmlNode) {
    let mut report = AlignReport::default();
    align_into(template, unsorted, &mut report);
}

/// Same as [`align`], additionally returning match statistics for the
/// whole tree.
pub fn align_with_report(template: &XmlNode, unsorted: &mut XmlNode) -> AlignReport {
    let mut report = AlignReport::default();
    align_into(template, unsorted, &mut report);
    report
}

fn align_into(template: &XmlNode, unsorted: &mut XmlNode, report: &mut AlignReport) {
    let buffer = std::mem::take(&mut unsorted.children);
    unsorted.children = reorder(template, buffer, report);
}

/// One level of greedy reordering. Consumes the child vector and returns
/// the new ordering; the caller commits it back onto the owning node.
fn reorder(
    template: &XmlNode,
    mut buffer: Vec<XmlNode>,
    report: &mut AlignReport,
) -> Vec<XmlNode> {
    let mut ordered = Vec::with_capacity(buffer.len());

    for template_child in &template.children {
        let best = max_by_key(
            buffer
                .iter()
                .enumerate()
                .map(|(idx, candidate)| (idx, score(template_child, candidate))),
            |&(_, candidate_score)| candidate_score,
        );

        // Template has more children than candidates remain: skip, by
        // contract this is not an error.
        let Some((idx, best_score)) = best else {
            report.unmatched_template += 1;
            continue;
        };

        // A best score of 0 still wins. Refusing it would strand the
        // candidate even though the template clearly expects something
        // in this position.
        if best_score == 0 {
            report.zero_score += 1;
        }
        report.matched += 1;

        let mut candidate = buffer.remove(idx);
        if !template_child.children.is_empty() && !candidate.children.is_empty() {
            align_into(template_child, &mut candidate, report);
        }
        ordered.push(candidate);
    }

    report.passthrough += buffer.len();
    ordered.extend(buffer);
    ordered
}

#[cfg(test)]
mod tests {
    use super::{align, align_with_report};
    use crate::parser::parse;
    use crate::tree::XmlNode;

    fn parsed(xml: &str) -> XmlNode {
        parse(xml.as_bytes()).expect("test XML should parse")
    }

    #[test]
    fn swapped_children_are_restored_to_template_order() {
        let template = parsed("<r><x/><y/></r>");
        let mut unsorted = parsed("<r><y/><x/></r>");

        align(&template, &mut unsorted);

        assert_eq!(unsorted.child_tags(), vec!["x", "y"]);
    }

    #[test]
    fn already_aligned_input_is_untouched() {
        let template = parsed("<r><x/><y/><z/></r>");
        let mut unsorted = parsed("<r><x/><y/><z/></r>");
        let before = unsorted.clone();

        align(&template, &mut unsorted);

        assert_eq!(unsorted, before);
    }

    #[test]
    fn align_is_deterministic() {
        let template = parsed("<r><a k=\"1\"/><a k=\"2\"/><b/></r>");
        let source = parsed("<r><b/><a k=\"2\"/><a k=\"1\"/></r>");

        let mut first = source.clone();
        let mut second = source.clone();
        align(&template, &mut first);
        align(&template, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn surplus_template_children_are_skipped() {
        let template = parsed("<r><x/><y/><z/></r>");
        let mut unsorted = parsed("<r><y/></r>");

        let report = align_with_report(&template, &mut unsorted);

        assert_eq!(unsorted.child_tags(), vec!["y"]);
        assert_eq!(report.matched, 1);
        assert_eq!(report.unmatched_template, 2);
    }

    #[test]
    fn surplus_children_keep_relative_order_after_matched_block() {
        let template = parsed("<r><x/></r>");
        let mut unsorted = parsed("<r><extra2/><x/><extra1/></r>");

        let report = align_with_report(&template, &mut unsorted);

        assert_eq!(unsorted.child_tags(), vec!["x", "extra2", "extra1"]);
        assert_eq!(report.passthrough, 2);
    }

    #[test]
    fn nested_children_are_reordered_recursively() {
        let template = parsed("<a><inner><p/><q/></inner></a>");
        let mut unsorted = parsed("<a><inner><q/><p/></inner></a>");

        align(&template, &mut unsorted);

        let inner = unsorted.get_child("inner").expect("inner should survive");
        assert_eq!(inner.child_tags(), vec!["p", "q"]);
    }

    #[test]
    fn zero_score_candidates_are_still_consumed() {
        let template = parsed("<r><x/><y/></r>");
        let mut unsorted = parsed("<r><other/><x/></r>");

        let report = align_with_report(&template, &mut unsorted);

        // x matches the first template child; y has only <other/> left and
        // takes it despite the zero score.
        assert_eq!(unsorted.child_tags(), vec!["x", "other"]);
        assert_eq!(report.zero_score, 1);
        assert_eq!(report.matched, 2);
    }

    #[test]
    fn attributes_break_ties_between_same_tag_siblings() {
        let template = parsed("<r><item id=\"1\"/><item id=\"2\"/></r>");
        let mut unsorted = parsed("<r><item id=\"2\"/><item id=\"1\"/></r>");

        align(&template, &mut unsorted);

        let ids: Vec<_> = unsorted
            .children
            .iter()
            .map(|child| child.attribute("id").unwrap_or_default())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn child_multiset_is_preserved() {
        let template = parsed("<r><a/><b/><c/></r>");
        let mut unsorted = parsed("<r><c/><d/><b/><a/></r>");

        let mut before = unsorted.children.clone();
        align(&template, &mut unsorted);
        let mut after = unsorted.children.clone();

        before.sort_by(|left, right| left.tag.cmp(&right.tag));
        after.sort_by(|left, right| left.tag.cmp(&right.tag));
        assert_eq!(before, after);
    }

    #[test]
    fn element_text_survives_reordering() {
        let template = parsed("<r><x/><y/></r>");
        let mut unsorted = parsed("<r><y>second</y><x>first</x></r>");

        align(&template, &mut unsorted);

        assert_eq!(unsorted.children[0].text.as_deref(), Some("first"));
        assert_eq!(unsorted.children[1].text.as_deref(), Some("second"));
    }
}
