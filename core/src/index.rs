use crate::token::normalize;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// One keyword's presence in one document: the document name and how many
/// times the keyword occurs in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Scan one document's text into its keyword frequency map.
///
/// Tokens are split on whitespace and normalized; the first occurrence of a
/// keyword creates an [`Occurrence`] with frequency 1 against `name`, later
/// occurrences increment it in place. The map is transient: it lives only
/// until it is merged into a [`KeywordIndex`].
pub fn scan_document(name: &str, text: &str, noise_words: &HashSet<String>) -> HashMap<String, Occurrence> {
    let mut keywords: HashMap<String, Occurrence> = HashMap::new();
    for raw in text.split_whitespace() {
        if let Some(keyword) = normalize(raw, noise_words) {
            keywords
                .entry(keyword)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(name, 1));
        }
    }
    keywords
}

/// Insert `candidate` into a list sorted by descending frequency, keeping it
/// sorted.
///
/// The slot is located by binary search over the existing elements (O(log L)
/// comparisons), then the candidate is spliced in (O(L) move). The relative
/// order of the existing elements never changes; an equal-frequency
/// candidate lands after the run of equal elements, so earlier insertions
/// stay ahead of later ones at the same frequency.
pub fn insert_by_frequency(occurrences: &mut Vec<Occurrence>, candidate: Occurrence) {
    let mut lo = 0;
    let mut hi = occurrences.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if occurrences[mid].frequency < candidate.frequency {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    occurrences.insert(lo, candidate);
}

/// The master index: keyword to occurrence list, each list sorted by
/// descending frequency with every document appearing at most once.
///
/// The index grows monotonically while documents are merged in and is
/// treated as read-only afterwards; queries only borrow it.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<Occurrence>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index over an in-memory corpus, one document at a time.
    pub fn build<'a, I>(documents: I, noise_words: &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = Self::new();
        let mut num_docs = 0u32;
        for (name, text) in documents {
            let keywords = scan_document(name, text, noise_words);
            tracing::debug!(document = name, keywords = keywords.len(), "scanned document");
            index.merge_document(keywords);
            num_docs += 1;
        }
        tracing::info!(num_docs, num_keywords = index.len(), "index build complete");
        index
    }

    /// Merge one document's frequency map into the index.
    ///
    /// A keyword seen for the first time gets a fresh single-element list;
    /// otherwise its occurrence is inserted into the existing sorted list
    /// via [`insert_by_frequency`].
    pub fn merge_document(&mut self, keywords: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in keywords {
            match self.postings.entry(keyword) {
                Entry::Occupied(mut entry) => insert_by_frequency(entry.get_mut(), occurrence),
                Entry::Vacant(entry) => {
                    entry.insert(vec![occurrence]);
                }
            }
        }
    }

    /// The occurrence list for `keyword`, sorted by descending frequency,
    /// or `None` if the keyword was never indexed.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.postings.get(keyword).map(Vec::as_slice)
    }

    /// Number of distinct keywords in the index.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over every keyword and its occurrence list.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.postings.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
