//! Element equivalence scoring.
//!
//! `score` ranks how alike a candidate element is to a template element on
//! a 0..=100 scale. It is a ranking metric, not an equality test: the
//! aligner only ever compares scores of candidates against the same
//! template element.

use crate::tree::XmlNode;

/// Score how equivalent `candidate` is to `template`, in `0..=100`.
///
/// - 0: qualified names differ. Nothing else is examined.
/// - 50: names match; no attribute overlap (or `template` has none).
/// - up to 100: names match and attributes overlap. Each of the template's
///   `n` attributes owns a `50/n`-point share; a shared attribute earns
///   75% of its share for the name alone and the remaining 25% when the
///   values also match. Template attributes missing from the candidate
///   forfeit their share, capping the score below 100.
///
/// The score is intentionally asymmetric: the share size is derived from
/// the *template's* attribute count, so `score(a, b)` and `score(b, a)`
/// can differ. The aligner always passes the template first.
pub fn score(template: &XmlNode, candidate: &XmlNode) -> u32 {
    if !qualified_names_match(&template.tag, &candidate.tag) {
        return 0;
    }

    let n = template.attributes.len() as u64;
    if n == 0 {
        return 50;
    }

    // Exact arithmetic in units of 1/(4n) of a point: the base 50 points
    // are 200n units, each attribute share is 200 units (150 for the name
    // match, 50 for the value match). A final truncating division yields
    // the integer score without float drift.
    let mut units: u64 = 200 * n;
    for (name, value) in &template.attributes {
        let shared = candidate
            .attributes
            .iter()
            .find(|(key, _)| local_name(key) == local_name(name));
        let Some((_, candidate_value)) = shared else {
            continue;
        };
        units += 150;
        if eq_ignore_case(value, candidate_value) {
            units += 50;
        }
    }

    (units / (4 * n)) as u32
}

/// Compare two qualified names for equality, namespace prefix and local
/// name each case-insensitively.
pub fn qualified_names_match(a: &str, b: &str) -> bool {
    let (a_ns, a_local) = split_qname(a);
    let (b_ns, b_local) = split_qname(b);
    eq_ignore_case(a_ns, b_ns) && eq_ignore_case(a_local, b_local)
}

/// Split a qualified name into (namespace prefix, local name).
///
/// Prefix resolution to namespace URIs is out of scope; the raw prefix
/// stands in for the namespace name.
fn split_qname(qname: &str) -> (&str, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None => ("", qname),
    }
}

fn local_name(qname: &str) -> &str {
    split_qname(qname).1
}

/// Case-insensitive, locale-independent string equality (full Unicode
/// lowercase mapping, no allocation).
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
