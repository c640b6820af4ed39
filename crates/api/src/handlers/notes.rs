//! Handlers for note generation: from a crawled link, a deep-crawled link,
//! or a web search.
//!
//! All three share the same shape: fetch content, build the platform
//! prompt, one completion call, return the trimmed note.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recast_core::error::CoreError;
use recast_core::platform::{prompt_config, Platform};
use recast_core::prompt::build_note_prompt;
use recast_llm::CREATIVE;
use recast_search::{SearchHit, SearchQuery};

use crate::engine::{fetch_page_text, require_text};
use crate::error::AppResult;
use crate::state::AppState;

/// Source label shown to the model for crawled pages.
const SOURCE_LINK: &str = "网页链接";
/// Source label shown to the model for search results.
const SOURCE_SEARCH: &str = "搜索结果";

/// Upper bound on search hits folded into one prompt.
const MAX_SEARCH_RESULTS: u32 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNoteRequest {
    pub link: Option<String>,
    pub platform: Option<String>,
    pub content_type: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub note: String,
    pub source_url: String,
}

/// POST /api/v1/notes/generate
///
/// Crawl `link`, then generate a platform note from the page text.
pub async fn generate_note(
    State(state): State<AppState>,
    Json(req): Json<GenerateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    generate_from_link(state, req, false).await
}

/// POST /api/v1/notes/generate-deep
///
/// Same as `generate_note`, but through the asynchronous deep-crawl job
/// (for pages the synchronous crawler cannot render).
pub async fn generate_note_deep(
    State(state): State<AppState>,
    Json(req): Json<GenerateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    generate_from_link(state, req, true).await
}

async fn generate_from_link(
    state: AppState,
    req: GenerateNoteRequest,
    deep: bool,
) -> AppResult<Json<NoteResponse>> {
    let link = require_text(req.link.as_deref(), "请输入链接")?;

    let text = fetch_page_text(state.content.as_ref(), link, deep).await?;

    let platform = Platform::parse_or_baseline(req.platform.as_deref());
    let prompt = build_note_prompt(
        &text,
        req.title.as_deref().unwrap_or(""),
        SOURCE_LINK,
        req.platform.as_deref(),
        req.content_type.as_deref(),
    );

    let note = state
        .llm
        .complete(prompt_config(platform).system_prompt, &prompt, CREATIVE)
        .await?;

    tracing::debug!(
        %link,
        deep,
        platform = platform.as_str(),
        note_chars = note.chars().count(),
        "Note generated from link",
    );

    Ok(Json(NoteResponse {
        note,
        source_url: link.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNoteRequest {
    pub query: Option<String>,
    pub platform: Option<String>,
    pub content_type: Option<String>,
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNoteResponse {
    pub note: String,
    pub results: Vec<SearchHit>,
}

/// POST /api/v1/notes/search
///
/// Search the web for `query`, fold the hits into one source text, and
/// generate a platform note from it.
pub async fn search_note(
    State(state): State<AppState>,
    Json(req): Json<SearchNoteRequest>,
) -> AppResult<impl IntoResponse> {
    let query = require_text(req.query.as_deref(), "请输入搜索关键词")?;

    let mut search_query = SearchQuery::new(query);
    if let Some(n) = req.max_results {
        search_query.max_results = n.clamp(1, MAX_SEARCH_RESULTS);
    }

    let hits = state.content.search(&search_query).await?;
    if hits.is_empty() {
        tracing::warn!(%query, "Search returned no results");
        return Err(CoreError::EmptyContent.into());
    }

    let combined = hits
        .iter()
        .map(|h| format!("{}\n{}\n{}", h.title, h.snippet, h.link))
        .collect::<Vec<_>>()
        .join("\n\n");

    let platform = Platform::parse_or_baseline(req.platform.as_deref());
    let prompt = build_note_prompt(
        &combined,
        query,
        SOURCE_SEARCH,
        req.platform.as_deref(),
        req.content_type.as_deref(),
    );

    let note = state
        .llm
        .complete(prompt_config(platform).system_prompt, &prompt, CREATIVE)
        .await?;

    tracing::debug!(%query, hits = hits.len(), "Note generated from search");

    Ok(Json(SearchNoteResponse { note, results: hits }))
}
