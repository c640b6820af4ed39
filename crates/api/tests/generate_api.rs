//! Integration tests for the note generation routes.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, build_test_app_with, post_json, MockAccountBackend, MockCompletions,
    MockContentSource,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: missing link -> 400 with error=1
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_link_returns_400_error_1() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/notes/generate", json!({})).await;

    assert_error(response, StatusCode::BAD_REQUEST, 1).await;
}

#[tokio::test]
async fn blank_link_returns_400_error_1() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/notes/generate", json!({ "link": "   " })).await;

    assert_error(response, StatusCode::BAD_REQUEST, 1).await;
}

// ---------------------------------------------------------------------------
// Test: crawl with no usable text -> 500 error=2, completion never called
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_crawl_returns_500_error_2_without_llm_call() {
    let content = Arc::new(MockContentSource {
        crawl_response: json!({ "content": "", "results": {}, "data": "   " }),
        ..MockContentSource::default()
    });
    let llm = Arc::new(MockCompletions::default());
    let app = build_test_app_with(
        Arc::clone(&content),
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/generate",
        json!({ "link": "https://example.com/post" }),
    )
    .await;

    assert_error(response, StatusCode::INTERNAL_SERVER_ERROR, 2).await;
    assert_eq!(content.crawl_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        llm.calls.load(Ordering::SeqCst),
        0,
        "completion service must not be called when extraction fails"
    );
}

// ---------------------------------------------------------------------------
// Test: successful generation returns note + sourceUrl
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_returns_note_and_source_url() {
    let content = Arc::new(MockContentSource::default());
    let llm = Arc::new(MockCompletions::with_reply("✨ 生成的小红书笔记正文"));
    let app = build_test_app_with(
        Arc::clone(&content),
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/generate",
        json!({ "link": "https://example.com/post", "platform": "xiaohongshu" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["note"], "✨ 生成的小红书笔记正文");
    assert_eq!(body["sourceUrl"], "https://example.com/post");
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Test: nested results.content crawl shape is extracted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nested_crawl_shape_is_extracted() {
    let content = Arc::new(MockContentSource {
        crawl_response: json!({ "results": { "content": "嵌套形状里的正文" } }),
        ..MockContentSource::default()
    });
    let app = build_test_app_with(
        content,
        Arc::new(MockCompletions::default()),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/generate",
        json!({ "link": "https://example.com/spa" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: deep route uses the deep crawl and maps poll timeout to 504
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deep_generate_uses_deep_crawl() {
    let content = Arc::new(MockContentSource::default());
    let app = build_test_app_with(
        Arc::clone(&content),
        Arc::new(MockCompletions::default()),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/generate-deep",
        json!({ "link": "https://example.com/spa" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content.deep_calls.load(Ordering::SeqCst), 1);
    assert_eq!(content.crawl_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn deep_poll_timeout_returns_504_error_7() {
    let content = Arc::new(MockContentSource {
        deep_poll_timeout: true,
        ..MockContentSource::default()
    });
    let llm = Arc::new(MockCompletions::default());
    let app = build_test_app_with(
        content,
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/generate-deep",
        json!({ "link": "https://example.com/slow" }),
    )
    .await;

    assert_error(response, StatusCode::GATEWAY_TIMEOUT, 7).await;
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: search route folds hits and returns them as metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_note_returns_note_and_results() {
    let content = Arc::new(MockContentSource::default());
    let llm = Arc::new(MockCompletions::default());
    let app = build_test_app_with(
        Arc::clone(&content),
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/search",
        json!({ "query": "城市咖啡馆" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["note"].is_string());
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(content.search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn search_with_no_hits_returns_500_error_2() {
    let content = Arc::new(MockContentSource {
        search_hits: Vec::new(),
        ..MockContentSource::default()
    });
    let llm = Arc::new(MockCompletions::default());
    let app = build_test_app_with(
        content,
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response =
        post_json(app, "/api/v1/notes/search", json!({ "query": "冷门主题" })).await;

    assert_error(response, StatusCode::INTERNAL_SERVER_ERROR, 2).await;
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: upstream completion failure is classified, not retried
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rate_limited_completion_returns_429_once() {
    let llm = Arc::new(MockCompletions {
        fail_status: Some((429, "Rate limit exceeded".into())),
        ..MockCompletions::default()
    });
    let app = build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::clone(&llm),
        Arc::new(MockAccountBackend::default()),
    );

    let response = post_json(
        app,
        "/api/v1/notes/generate",
        json!({ "link": "https://example.com/post" }),
    )
    .await;

    assert_error(response, StatusCode::TOO_MANY_REQUESTS, 4).await;
    assert_eq!(
        llm.calls.load(Ordering::SeqCst),
        1,
        "failed completion must not be retried"
    );
}
