//! Handlers for the style catalog endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recast_core::error::CoreError;
use recast_core::platform::Platform;
use recast_core::styles::{self, StyleDefinition};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub styles: Vec<&'static StyleDefinition>,
}

/// GET /api/v1/styles
pub async fn list_styles(State(_state): State<AppState>) -> Json<StylesResponse> {
    Json(StylesResponse {
        styles: styles::all_styles().iter().collect(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendParams {
    pub platform: Option<String>,
    pub content_type: Option<String>,
}

/// GET /api/v1/styles/recommend?platform=… | ?contentType=…
///
/// Platform recommendations are ranked by suitability score; content-type
/// recommendations match tags in either direction.
pub async fn recommend(
    State(_state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<impl IntoResponse> {
    let styles = if let Some(key) = params.platform.as_deref() {
        let platform = Platform::parse(key)
            .ok_or_else(|| CoreError::InvalidInput(format!("未知平台：{key}")))?;
        styles::recommend_for_platform(platform)
    } else if let Some(content_type) = params.content_type.as_deref() {
        styles::recommend_for_content_type(content_type)
    } else {
        return Err(CoreError::InvalidInput(
            "请提供 platform 或 contentType 参数".to_string(),
        )
        .into());
    };

    Ok(Json(StylesResponse { styles }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDetailResponse {
    pub style: &'static StyleDefinition,
    /// The generation template this preview style resolves to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_template: Option<&'static str>,
}

/// GET /api/v1/styles/{key}
pub async fn get_style(
    State(_state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let style = styles::lookup(&key).ok_or_else(|| AppError::NotFound("未找到该风格".into()))?;

    Ok(Json(StyleDetailResponse {
        style,
        generation_template: styles::actual_template(style.key),
    }))
}

#[derive(Debug, Serialize)]
pub struct StylePromptResponse {
    pub prompt: String,
}

/// GET /api/v1/styles/{key}/prompt
///
/// The rendered design brief for a style.
pub async fn style_prompt(
    State(_state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let prompt = styles::render_design_prompt(&key)
        .ok_or_else(|| AppError::NotFound("未找到该风格".into()))?;

    Ok(Json(StylePromptResponse { prompt }))
}
