use anyhow::Result;
use clap::{Parser, Subcommand};
use findex_core::index::KeywordIndex;
use findex_core::loader::{load_corpus, read_noise_words};
use findex_core::search::top_documents;
use findex_core::token::{default_noise_words, normalize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "findex")]
#[command(about = "Frequency-ranked keyword search over a text corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and answer an "either keyword" query
    Query {
        /// Corpus input: a manifest file of document paths, or a directory of .txt files
        #[arg(long)]
        docs: PathBuf,
        /// Noise-word file (one word per line); defaults to the built-in English list
        #[arg(long)]
        noise: Option<PathBuf>,
        /// First query keyword
        kw1: String,
        /// Second query keyword; defaults to the first
        kw2: Option<String>,
        /// Print results as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build the index and print corpus statistics
    Stats {
        /// Corpus input: a manifest file of document paths, or a directory of .txt files
        #[arg(long)]
        docs: PathBuf,
        /// Noise-word file (one word per line); defaults to the built-in English list
        #[arg(long)]
        noise: Option<PathBuf>,
        /// How many of the widest-spread keywords to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { docs, noise, kw1, kw2, json } => run_query(&docs, noise.as_deref(), &kw1, kw2.as_deref(), json),
        Commands::Stats { docs, noise, top } => run_stats(&docs, noise.as_deref(), top),
    }
}

fn load_noise(path: Option<&Path>) -> Result<HashSet<String>> {
    match path {
        Some(path) => Ok(read_noise_words(path)?),
        None => Ok(default_noise_words()),
    }
}

fn build(docs: &Path, noise: &HashSet<String>) -> Result<KeywordIndex> {
    let corpus = load_corpus(docs)?;
    Ok(KeywordIndex::build(
        corpus.iter().map(|d| (d.name.as_str(), d.text.as_str())),
        noise,
    ))
}

fn run_query(
    docs: &Path,
    noise_path: Option<&Path>,
    kw1: &str,
    kw2: Option<&str>,
    json: bool,
) -> Result<()> {
    let noise = load_noise(noise_path)?;
    let index = build(docs, &noise)?;

    // Query input gets the same normalization as indexed text; a noise word
    // or unusable token degrades to an absent keyword.
    let kw1 = normalize(kw1, &noise).unwrap_or_default();
    let kw2 = kw2.and_then(|kw| normalize(kw, &noise)).unwrap_or_else(|| kw1.clone());
    tracing::debug!(kw1, kw2, "normalized query keywords");
    let results = top_documents(&index, &kw1, &kw2);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("no results");
    } else {
        for name in results {
            println!("{name}");
        }
    }
    Ok(())
}

fn run_stats(docs: &Path, noise_path: Option<&Path>, top: usize) -> Result<()> {
    let noise = load_noise(noise_path)?;
    let corpus = load_corpus(docs)?;
    let index = KeywordIndex::build(
        corpus.iter().map(|d| (d.name.as_str(), d.text.as_str())),
        &noise,
    );

    println!("documents: {}", corpus.len());
    println!("keywords:  {}", index.len());

    let mut spread: Vec<(&str, usize)> = index.iter().map(|(kw, occs)| (kw, occs.len())).collect();
    spread.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    println!("widest-spread keywords:");
    for (keyword, num_docs) in spread.into_iter().take(top) {
        println!("  {keyword}: {num_docs} docs");
    }
    Ok(())
}
