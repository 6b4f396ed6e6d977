//! `findex-core`: frequency-ranked keyword search over a fixed corpus.
//!
//! The crate builds an in-memory inverted index and answers "kw1 OR kw2"
//! queries with up to five document names, ranked by occurrence frequency:
//! - [`token`] normalizes raw tokens into keywords (or rejects them).
//! - [`index`] scans documents into per-document frequency maps and merges
//!   them into a [`KeywordIndex`], keeping each keyword's occurrence list
//!   sorted by descending frequency via binary-search insertion.
//! - [`search`] runs the bounded two-way merge that answers a query.
//! - [`loader`] reads a corpus (manifest file or directory) and a
//!   noise-word file into memory for the callers above.
//!
//! Scope:
//! - In-memory index, built once, read-only afterwards
//! - Raw term frequency as the only ranking signal
//! - Deterministic results (ties favor the first query keyword)
//!
//! Non-goals:
//! - Persisting the index
//! - Stemming or any normalization beyond case folding and trailing
//!   punctuation stripping
//! - Incremental re-indexing or concurrent index mutation
//! - Queries with more than two keywords

pub mod index;
pub mod loader;
pub mod search;
pub mod token;

pub use error::Error;
pub use index::{KeywordIndex, Occurrence};
pub use loader::Document;

mod error {
    use std::path::PathBuf;

    /// Errors raised while loading a corpus into memory.
    ///
    /// Normalization and querying never fail: an invalid token is simply
    /// not a keyword, and a keyword missing from the index degrades the
    /// query instead of erroring.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// A document named by the manifest could not be read.
        #[error("document unavailable: {path}")]
        DocumentUnavailable {
            /// Path of the unreadable document.
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        /// The manifest of document names could not be read.
        #[error("cannot read manifest {path}")]
        ManifestUnavailable {
            /// Path of the unreadable manifest.
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        /// The noise-word file could not be read.
        #[error("cannot read noise words from {path}")]
        NoiseWordsUnavailable {
            /// Path of the unreadable noise-word file.
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }
}
