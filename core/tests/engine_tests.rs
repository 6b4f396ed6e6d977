use findex_core::index::KeywordIndex;
use findex_core::loader::{load_corpus, read_noise_words};
use findex_core::search::top_documents;
use findex_core::Error;
use std::fs;

fn build_from_dir(dir: &std::path::Path) -> KeywordIndex {
    let noise = read_noise_words(&dir.join("noise.txt")).unwrap();
    let corpus = load_corpus(&dir.join("docs.txt")).unwrap();
    KeywordIndex::build(
        corpus.iter().map(|d| (d.name.as_str(), d.text.as_str())),
        &noise,
    )
}

#[test]
fn loads_builds_and_answers_queries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("noise.txt"), "the\nis\na\non\n").unwrap();
    fs::write(dir.path().join("D1"), "The cat sat on the mat.").unwrap();
    fs::write(dir.path().join("D2"), "A cat is a cat!").unwrap();
    fs::write(dir.path().join("docs.txt"), "D1\nD2\n").unwrap();

    let index = build_from_dir(dir.path());

    let cat = index.occurrences("cat").unwrap();
    assert_eq!(cat.len(), 2);
    assert_eq!((cat[0].document.as_str(), cat[0].frequency), ("D2", 2));
    assert_eq!((cat[1].document.as_str(), cat[1].frequency), ("D1", 1));

    assert_eq!(top_documents(&index, "cat", "mat"), vec!["D2", "D1"]);
    assert_eq!(top_documents(&index, "mat", "missing"), vec!["D1"]);
    assert!(top_documents(&index, "missing", "absent").is_empty());
    // Noise words never make it into the index.
    assert!(index.occurrences("the").is_none());
}

#[test]
fn unreadable_document_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("noise.txt"), "the\n").unwrap();
    fs::write(dir.path().join("D1"), "present").unwrap();
    fs::write(dir.path().join("docs.txt"), "D1\nD2\n").unwrap();

    let err = load_corpus(&dir.path().join("docs.txt")).unwrap_err();
    assert!(matches!(err, Error::DocumentUnavailable { .. }));
    let message = err.to_string();
    assert!(message.contains("D2"), "error must name the document: {message}");
}
