//! Handler for the style-rewrite route.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recast_core::prompt::build_rewrite_prompt;
use recast_llm::CREATIVE;

use crate::engine::require_text;
use crate::error::AppResult;
use crate::state::AppState;

const REWRITE_SYSTEM_PROMPT: &str =
    "你是一位资深的中文内容编辑，擅长在保留原意的前提下按指定风格改写文本。";

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub text: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub result: String,
}

/// POST /api/v1/rewrite
///
/// Rewrite `text` in the named style. Unrecognized style labels use the
/// generic preserve-meaning instruction.
pub async fn rewrite(
    State(state): State<AppState>,
    Json(req): Json<RewriteRequest>,
) -> AppResult<impl IntoResponse> {
    let text = require_text(req.text.as_deref(), "请输入要改写的内容")?;
    let style = req.style.as_deref().unwrap_or("");

    let prompt = build_rewrite_prompt(text, style);
    let result = state
        .llm
        .complete(REWRITE_SYSTEM_PROMPT, &prompt, CREATIVE)
        .await?;

    tracing::debug!(style, text_chars = text.chars().count(), "Text rewritten");

    Ok(Json(RewriteResponse { result }))
}
