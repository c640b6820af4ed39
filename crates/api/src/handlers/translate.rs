//! Handlers for translation and the supported-language table.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use recast_core::error::CoreError;
use recast_core::language::{
    detect_language, language_info, prompt_language_name, LanguageInfo, SUPPORTED_LANGUAGES,
};
use recast_core::prompt::build_translation_prompt;
use recast_llm::TRANSLATION;

use crate::engine::require_text;
use crate::error::AppResult;
use crate::state::AppState;

const TRANSLATE_SYSTEM_PROMPT: &str =
    "你是一位专业译者，精通多语种互译，译文准确且符合目标语言的表达习惯。";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub to_lang: Option<String>,
    pub from_lang: Option<String>,
    pub auto_detect: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub from_language: String,
    pub to_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// POST /api/v1/translate
///
/// Translate `text` into `toLang`. The source language is auto-detected
/// when `autoDetect` is set or `fromLang` is absent; when source and
/// target coincide the input is returned unchanged without a completion
/// call.
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> AppResult<impl IntoResponse> {
    let text = require_text(req.text.as_deref(), "请输入要翻译的内容")?;
    let to_lang = require_text(req.to_lang.as_deref(), "请选择目标语言")?;

    if language_info(to_lang).is_none() {
        return Err(CoreError::InvalidInput(format!("不支持的目标语言：{to_lang}")).into());
    }

    let auto = req.auto_detect.unwrap_or(false);
    let from_request = req
        .from_lang
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "auto");

    let from_lang = match from_request {
        Some(code) if !auto => {
            if language_info(code).is_none() {
                return Err(CoreError::InvalidInput(format!("不支持的源语言：{code}")).into());
            }
            code.to_string()
        }
        _ => detect_language(text).to_string(),
    };

    if from_lang == to_lang {
        tracing::debug!(%from_lang, "Source equals target, returning input unchanged");
        return Ok(Json(TranslateResponse {
            translated_text: text.to_string(),
            from_language: from_lang,
            to_language: to_lang.to_string(),
            note: Some("源语言与目标语言相同，内容未经翻译".to_string()),
        }));
    }

    let prompt = build_translation_prompt(
        text,
        prompt_language_name(&from_lang),
        prompt_language_name(to_lang),
    );
    let translated = state
        .llm
        .complete(TRANSLATE_SYSTEM_PROMPT, &prompt, TRANSLATION)
        .await?;

    tracing::debug!(%from_lang, %to_lang, "Text translated");

    Ok(Json(TranslateResponse {
        translated_text: translated,
        from_language: from_lang,
        to_language: to_lang.to_string(),
        note: None,
    }))
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: &'static [LanguageInfo],
}

/// GET /api/v1/translate/languages
///
/// The static supported-language table.
pub async fn supported_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: SUPPORTED_LANGUAGES,
    })
}
