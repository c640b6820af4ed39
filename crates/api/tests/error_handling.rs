//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each taxonomy entry produces the correct HTTP
//! status, numeric error code, and message. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use recast_api::error::AppError;
use recast_core::error::CoreError;
use recast_llm::LlmError;
use recast_search::SearchError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: InvalidInput maps to 400 with code 1 and the handler's message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_returns_400_code_1() {
    let err = AppError::Core(CoreError::InvalidInput("请输入链接".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], 1);
    assert_eq!(json["message"], "请输入链接");
}

// ---------------------------------------------------------------------------
// Test: EmptyContent maps to 500 with code 2
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_content_returns_500_code_2() {
    let err = AppError::Core(CoreError::EmptyContent);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], 2);
}

// ---------------------------------------------------------------------------
// Test: upstream unauthorized maps to 401 with code 3, detail sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_unauthorized_returns_401_code_3() {
    let err = AppError::Llm(LlmError::Unauthorized("Invalid API key sk-12345".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], 3);
    assert!(
        !json["message"].as_str().unwrap().contains("sk-12345"),
        "upstream detail must not leak to the client"
    );
}

// ---------------------------------------------------------------------------
// Test: upstream rate limit maps to 429 with code 4
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rate_limited_returns_429_code_4() {
    let err = AppError::Llm(LlmError::RateLimited("Rate limit exceeded".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"], 4);
}

// ---------------------------------------------------------------------------
// Test: upstream network failure maps to 502 with code 5
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_network_returns_502_code_5() {
    let err = AppError::Search(SearchError::Transport("connection refused".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], 5);
}

// ---------------------------------------------------------------------------
// Test: empty generation maps to 500 with code 6
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_generation_returns_500_code_6() {
    let err = AppError::Llm(LlmError::EmptyCompletion);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], 6);
}

// ---------------------------------------------------------------------------
// Test: deep-crawl timeout maps to 504 with code 7
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deep_crawl_timeout_returns_504_code_7() {
    let err = AppError::Search(SearchError::PollTimeout {
        job_id: "job-9".into(),
        waited_secs: 60,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["error"], 7);
    assert!(json["message"].as_str().unwrap().contains("60"));
}

// ---------------------------------------------------------------------------
// Test: not-found maps to 404 with code 8
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404_code_8() {
    let err = AppError::NotFound("未找到该风格".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["error"], 8);
    assert_eq!(json["message"], "未找到该风格");
}

// ---------------------------------------------------------------------------
// Test: internal error maps to 500 with code 9 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal(
        "secret backend credentials leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], 9);

    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak details"
    );
}
