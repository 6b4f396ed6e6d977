use crate::Error;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document loaded into memory: its name as it will appear in query
/// results, and its full text.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

/// Read a noise-word file: one word per line, lower-cased, blank lines
/// ignored.
pub fn read_noise_words(path: &Path) -> Result<HashSet<String>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::NoiseWordsUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let words: HashSet<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();
    tracing::debug!(path = %path.display(), num_words = words.len(), "loaded noise words");
    Ok(words)
}

/// Load a corpus from `input`: either a manifest file naming one document
/// file per line, or a directory walked for `*.txt` files.
///
/// Loading fails on the first unreadable file; no partial corpus is
/// returned. Manifest entries keep the name they were written with, files
/// found by the walk are named by their path relative to the directory.
pub fn load_corpus(input: &Path) -> Result<Vec<Document>, Error> {
    let documents = if input.is_dir() {
        load_directory(input)?
    } else {
        load_manifest(input)?
    };
    tracing::info!(input = %input.display(), num_docs = documents.len(), "corpus loaded");
    Ok(documents)
}

fn load_manifest(manifest: &Path) -> Result<Vec<Document>, Error> {
    let contents = fs::read_to_string(manifest).map_err(|source| Error::ManifestUnavailable {
        path: manifest.to_path_buf(),
        source,
    })?;
    let base = manifest.parent().unwrap_or_else(|| Path::new(""));
    let mut documents = Vec::new();
    for line in contents.lines() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        // Relative entries resolve against the manifest's directory.
        let path = if Path::new(entry).is_absolute() {
            PathBuf::from(entry)
        } else {
            base.join(entry)
        };
        documents.push(read_document(&path, entry.to_string())?);
    }
    Ok(documents)
}

fn load_directory(root: &Path) -> Result<Vec<Document>, Error> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let name = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        documents.push(read_document(path, name)?);
    }
    Ok(documents)
}

fn read_document(path: &Path, name: String) -> Result<Document, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::DocumentUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document { name, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_noise_words_lowercased() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.txt");
        fs::write(&path, "The\nIS\n\n  a  \n").unwrap();
        let words = read_noise_words(&path).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("the"));
        assert!(words.contains("is"));
        assert!(words.contains("a"));
    }

    #[test]
    fn manifest_entries_keep_their_written_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.txt"), "alpha").unwrap();
        fs::write(dir.path().join("two.txt"), "beta").unwrap();
        let manifest = dir.path().join("docs.txt");
        fs::write(&manifest, "one.txt\n\ntwo.txt\n").unwrap();

        let docs = load_corpus(&manifest).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "one.txt");
        assert_eq!(docs[0].text, "alpha");
        assert_eq!(docs[1].name, "two.txt");
    }

    #[test]
    fn missing_document_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.txt"), "alpha").unwrap();
        let manifest = dir.path().join("docs.txt");
        fs::write(&manifest, "one.txt\nmissing.txt\n").unwrap();

        let err = load_corpus(&manifest).unwrap_err();
        match err {
            Error::DocumentUnavailable { path, .. } => {
                assert!(path.ends_with("missing.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_mode_walks_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let docs = load_corpus(dir.path()).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }
}
