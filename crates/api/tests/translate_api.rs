//! Integration tests for the translation routes.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, build_test_app_with, get, post_json, MockAccountBackend,
    MockCompletions, MockContentSource,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: auto-detected English -> Chinese goes through the LLM path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn auto_detect_english_to_chinese_translates() {
    let llm = Arc::new(MockCompletions::with_reply("你好"));
    let app = build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/translate",
        json!({ "text": "Hello", "toLang": "zh", "autoDetect": true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fromLanguage"], "en");
    assert_eq!(body["toLanguage"], "zh");
    assert_eq!(body["translatedText"], "你好");
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Test: same source and target short-circuits without an LLM call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn same_language_short_circuits_without_llm_call() {
    let llm = Arc::new(MockCompletions::default());
    let app = build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/translate",
        json!({ "text": "今天天气很好", "toLang": "zh", "autoDetect": true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["translatedText"], "今天天气很好");
    assert_eq!(body["fromLanguage"], "zh");
    assert!(body["note"].is_string(), "short-circuit must carry a note");
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: explicit fromLang is honored when autoDetect is off
// ---------------------------------------------------------------------------

#[tokio::test]
async fn explicit_from_lang_is_honored() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/translate",
        json!({ "text": "Bonjour", "fromLang": "fr", "toLang": "zh" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fromLanguage"], "fr");
}

// ---------------------------------------------------------------------------
// Test: validation failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_text_returns_400_error_1() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/translate", json!({ "toLang": "zh" })).await;

    assert_error(response, StatusCode::BAD_REQUEST, 1).await;
}

#[tokio::test]
async fn unsupported_target_returns_400_error_1() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/translate",
        json!({ "text": "Hello", "toLang": "tlh" }),
    )
    .await;

    assert_error(response, StatusCode::BAD_REQUEST, 1).await;
}

// ---------------------------------------------------------------------------
// Test: GET /translate/languages returns the static table
// ---------------------------------------------------------------------------

#[tokio::test]
async fn languages_endpoint_returns_static_table() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/translate/languages").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let languages = body["languages"].as_array().unwrap();
    assert!(languages.len() >= 10);
    assert!(languages
        .iter()
        .any(|l| l["code"] == "zh" && l["native_name"] == "中文"));
}
