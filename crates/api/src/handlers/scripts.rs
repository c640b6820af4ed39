//! Handlers for the script routes.
//!
//! These are the LLM-free paths: scripts come straight from the assembler's
//! fragment pools. Both routes share one assembler; the kind only switches
//! the opening and call-to-action pools.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recast_core::platform::Platform;
use recast_core::script::{assemble, ScriptKind, ScriptRequest};

use crate::engine::require_text;
use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptGenRequest {
    pub topic: Option<String>,
    pub platform: Option<String>,
    pub style: Option<String>,
    pub duration: Option<String>,
    pub extra_requirements: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
}

/// POST /api/v1/scripts/short-video
pub async fn short_video(
    State(_state): State<AppState>,
    Json(req): Json<ScriptGenRequest>,
) -> AppResult<impl IntoResponse> {
    generate(req, ScriptKind::ShortVideo, "请输入视频主题")
}

/// POST /api/v1/scripts/voice-over
pub async fn voice_over(
    State(_state): State<AppState>,
    Json(req): Json<ScriptGenRequest>,
) -> AppResult<impl IntoResponse> {
    generate(req, ScriptKind::VoiceOver, "请输入口播主题")
}

fn generate(
    req: ScriptGenRequest,
    kind: ScriptKind,
    missing_topic: &str,
) -> AppResult<Json<ScriptResponse>> {
    let topic = require_text(req.topic.as_deref(), missing_topic)?;

    let request = ScriptRequest {
        topic,
        platform: Platform::parse_or_baseline(req.platform.as_deref()),
        style: req.style.as_deref().unwrap_or(""),
        duration: req.duration.as_deref().unwrap_or(""),
        kind,
        extra_requirements: req.extra_requirements.as_deref(),
    };

    let mut rng = rand::rng();
    let script = assemble(&request, &mut rng);

    tracing::debug!(%topic, ?kind, "Script assembled");

    Ok(Json(ScriptResponse { script }))
}
