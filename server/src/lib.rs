use anyhow::Result;
use axum::extract::{Path as AxumPath, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use findex_core::index::{KeywordIndex, Occurrence};
use findex_core::loader::{load_corpus, read_noise_words};
use findex_core::search::top_documents;
use findex_core::token::{default_noise_words, normalize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    pub kw2: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    pub results: Vec<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub indexed: bool,
    pub occurrences: Vec<Occurrence>,
}

/// Shared, read-only state: the index is built once in [`build_app`] and
/// only borrowed by handlers afterwards.
#[derive(Clone)]
pub struct AppState {
    index: Arc<KeywordIndex>,
    noise_words: Arc<HashSet<String>>,
}

/// Load the corpus, build the index, and assemble the router.
///
/// All indexing happens before the router exists, so handlers can share the
/// index freely without locking.
pub fn build_app(docs: &Path, noise: Option<&Path>) -> Result<Router> {
    let noise_words = match noise {
        Some(path) => read_noise_words(path)?,
        None => default_noise_words(),
    };
    let corpus = load_corpus(docs)?;
    let index = KeywordIndex::build(
        corpus.iter().map(|d| (d.name.as_str(), d.text.as_str())),
        &noise_words,
    );
    let state = AppState {
        index: Arc::new(index),
        noise_words: Arc::new(noise_words),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    Ok(app)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    // Query input gets the same normalization as indexed text; a noise word
    // or unusable token degrades to an absent keyword.
    let kw1 = normalize(&params.kw1, &state.noise_words).unwrap_or_default();
    let kw2 = params
        .kw2
        .as_deref()
        .and_then(|kw| normalize(kw, &state.noise_words))
        .unwrap_or_else(|| kw1.clone());
    let results = top_documents(&state.index, &kw1, &kw2);
    Json(SearchResponse {
        kw1,
        kw2,
        took_s: start.elapsed().as_secs_f64(),
        results,
    })
}

pub async fn keyword_handler(
    State(state): State<AppState>,
    AxumPath(keyword): AxumPath<String>,
) -> Json<KeywordResponse> {
    let keyword = normalize(&keyword, &state.noise_words).unwrap_or_default();
    let occurrences = state
        .index
        .occurrences(&keyword)
        .map(<[Occurrence]>::to_vec)
        .unwrap_or_default();
    Json(KeywordResponse {
        indexed: !occurrences.is_empty(),
        keyword,
        occurrences,
    })
}
