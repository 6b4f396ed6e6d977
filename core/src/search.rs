use crate::index::{KeywordIndex, Occurrence};

/// Maximum number of document names a query returns.
pub const RESULT_LIMIT: usize = 5;

/// Answer an "either keyword" query: up to [`RESULT_LIMIT`] distinct
/// document names in which `kw1` or `kw2` occurs, ranked by descending
/// occurrence frequency.
///
/// A keyword absent from the index degrades the query rather than failing
/// it: with one keyword absent the other's list is returned (truncated to
/// the limit), with both absent the result is empty. Frequency ties between
/// the two lists break in favor of `kw1`, and a document matching both
/// keywords appears once, at the rank of its higher-priority match.
pub fn top_documents(index: &KeywordIndex, kw1: &str, kw2: &str) -> Vec<String> {
    match (index.occurrences(kw1), index.occurrences(kw2)) {
        (None, None) => Vec::new(),
        (Some(occs), None) | (None, Some(occs)) => occs
            .iter()
            .take(RESULT_LIMIT)
            .map(|occ| occ.document.clone())
            .collect(),
        (Some(first), Some(second)) => merge_ranked(first, second),
    }
}

/// Two-way merge of two descending-frequency lists, capped at
/// [`RESULT_LIMIT`] distinct document names.
///
/// Independent cursors walk both lists; each step takes from the cursor
/// with the greater-or-equal frequency (ties take from `first`). Once one
/// list is exhausted the other drains alone. Duplicates are dropped at
/// append time, so a document never outranks its first appearance.
fn merge_ranked(first: &[Occurrence], second: &[Occurrence]) -> Vec<String> {
    let mut results: Vec<String> = Vec::with_capacity(RESULT_LIMIT);
    let mut i = 0;
    let mut j = 0;
    while results.len() < RESULT_LIMIT {
        let take_first = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) => a.frequency >= b.frequency,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let document = if take_first {
            i += 1;
            &first[i - 1].document
        } else {
            j += 1;
            &second[j - 1].document
        };
        if !results.iter().any(|seen| seen == document) {
            results.push(document.clone());
        }
    }
    results
}
