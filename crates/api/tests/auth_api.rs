//! Integration tests for the proxied auth/key routes.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app_with, post_json, MockAccountBackend, MockCompletions,
    MockContentSource,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: login relays the backend's body and status verbatim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_relays_backend_response() {
    let account = Arc::new(MockAccountBackend::default());
    let app = build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::new(MockCompletions::default()),
        Arc::clone(&account),
    );

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "tester", "password": "pw" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token"], "backend-token");
    assert_eq!(account.calls.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Test: backend rejections pass through unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backend_rejection_passes_through() {
    let account = Arc::new(MockAccountBackend {
        status: 401,
        body: json!({ "message": "密码错误" }),
        ..MockAccountBackend::default()
    });
    let app = build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::new(MockCompletions::default()),
        account,
    );

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "tester", "password": "wrong" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "密码错误");
}

// ---------------------------------------------------------------------------
// Test: key activation proxies to the backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn key_activation_proxies_to_backend() {
    let account = Arc::new(MockAccountBackend {
        body: json!({ "activated": true, "remaining": 30 }),
        ..MockAccountBackend::default()
    });
    let app = build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::new(MockCompletions::default()),
        Arc::clone(&account),
    );

    let response = post_json(app, "/api/v1/keys/activate", json!({ "key": "ABCD-1234" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["activated"], true);
    assert_eq!(account.calls.load(Ordering::SeqCst), 1);
}
