//! Shared per-request orchestration helpers.
//!
//! Every generation route follows the same skeleton: validate input, fetch
//! content when the mode needs it, build a prompt, call the completion
//! service once, post-process. The pieces shared by more than one handler
//! live here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use recast_core::error::CoreError;
use recast_search::{extract, ContentSource};

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Require a non-blank request field, trimmed.
///
/// `message` is the user-facing text of the resulting `InvalidInput`.
pub fn require_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim()),
        _ => Err(CoreError::InvalidInput(message.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Content fetching
// ---------------------------------------------------------------------------

/// Fetch a page and pull out its usable text.
///
/// `deep` selects the asynchronous deep-crawl path (bounded polling inside
/// the client). Fails with `EmptyContent` when the crawl succeeded but the
/// extraction chain found nothing.
pub async fn fetch_page_text(
    content: &dyn ContentSource,
    url: &str,
    deep: bool,
) -> AppResult<String> {
    let raw: Value = if deep {
        content.deep_crawl(url).await?
    } else {
        content.crawl(url).await?
    };

    match extract::extract_text(&raw) {
        Some(text) => Ok(text),
        None => {
            tracing::warn!(%url, "Crawl succeeded but yielded no usable text");
            Err(CoreError::EmptyContent.into())
        }
    }
}

// ---------------------------------------------------------------------------
// Card output parsing
// ---------------------------------------------------------------------------

/// One generated content card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Strip a Markdown code fence (```json ... ```) wrapping, if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) up to the first newline.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse the model's card output.
///
/// Models asked for JSON still wander: fenced output, or prose instead of
/// an array. Fenced JSON arrays are parsed; anything unparseable degrades
/// to a single card carrying the raw text, so the route never fails on a
/// malformed-but-non-empty completion.
pub fn parse_cards(raw: &str) -> Vec<Card> {
    let body = strip_code_fence(raw);

    if let Ok(cards) = serde_json::from_str::<Vec<Card>>(body) {
        let usable: Vec<Card> = cards
            .into_iter()
            .filter(|c| !c.title.trim().is_empty() || !c.content.trim().is_empty())
            .collect();
        if !usable.is_empty() {
            return usable;
        }
    }

    vec![Card {
        title: String::new(),
        content: body.to_string(),
    }]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
