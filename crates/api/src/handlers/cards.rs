//! Handler for the card-layout generation route.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recast_core::error::CoreError;
use recast_core::platform::Platform;
use recast_core::styles::{self, StyleDefinition};
use recast_llm::CREATIVE;

use crate::engine::{parse_cards, require_text, Card};
use crate::error::AppResult;
use crate::state::AppState;

const CARDS_SYSTEM_PROMPT: &str =
    "你是一位内容卡片撰稿人，严格按照给定的风格要求和输出格式工作，只输出 JSON。";

/// Style used when no style is requested and the platform has no
/// qualifying recommendation.
const FALLBACK_STYLE_KEY: &str = "minimal-ins";

const DEFAULT_CARD_COUNT: u32 = 3;
const MAX_CARD_COUNT: u32 = 9;

#[derive(Debug, Deserialize)]
pub struct CardsRequest {
    pub text: Option<String>,
    pub style: Option<String>,
    pub platform: Option<String>,
    pub count: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsResponse {
    pub cards: Vec<Card>,
    pub style: &'static str,
    /// The generation template the chosen preview style resolves to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_template: Option<&'static str>,
}

/// POST /api/v1/cards
///
/// Split `text` into styled content cards. The style comes from the
/// request, or from the platform recommendation ranking when unspecified.
pub async fn generate_cards(
    State(state): State<AppState>,
    Json(req): Json<CardsRequest>,
) -> AppResult<impl IntoResponse> {
    let text = require_text(req.text.as_deref(), "请输入卡片内容")?;

    let style = resolve_style(req.style.as_deref(), req.platform.as_deref())?;
    let count = req.count.unwrap_or(DEFAULT_CARD_COUNT).clamp(1, MAX_CARD_COUNT);

    let brief = styles::render_design_prompt(style.key)
        .ok_or_else(|| CoreError::Internal(format!("style '{}' missing from catalog", style.key)))?;

    let prompt = format!(
        "{brief}\n\n\
         请基于以下内容，为上述风格生成 {count} 张卡片的文案。\n\n\
         内容：\n{text}\n\n\
         输出要求：只输出一个 JSON 数组，每个元素形如 \
         {{\"title\": \"卡片标题\", \"content\": \"卡片正文\"}}，不要输出其他文字。",
    );

    let raw = state
        .llm
        .complete(CARDS_SYSTEM_PROMPT, &prompt, CREATIVE)
        .await?;

    let cards = parse_cards(&raw);
    tracing::debug!(style = style.key, cards = cards.len(), "Cards generated");

    Ok(Json(CardsResponse {
        cards,
        style: style.key,
        generation_template: styles::actual_template(style.key),
    }))
}

/// Resolve the style to use: explicit key when given (must exist), else
/// the platform's top recommendation, else the fallback style.
fn resolve_style(
    style_key: Option<&str>,
    platform_key: Option<&str>,
) -> Result<&'static StyleDefinition, CoreError> {
    if let Some(key) = style_key.map(str::trim).filter(|k| !k.is_empty()) {
        return styles::lookup(key)
            .ok_or_else(|| CoreError::InvalidInput(format!("未知的卡片风格：{key}")));
    }

    let platform = Platform::parse_or_baseline(platform_key);
    styles::recommend_for_platform(platform)
        .into_iter()
        .next()
        .or_else(|| styles::lookup(FALLBACK_STYLE_KEY))
        .ok_or_else(|| CoreError::Internal("style catalog is empty".to_string()))
}
