//! Shared integration-test harness.
//!
//! Builds the full application router — identical middleware stack to
//! production via `build_app_router` — around mock collaborators with call
//! counters, so tests can assert not only on responses but on which
//! external services were (or were not) invoked.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use recast_api::account::{AccountBackend, AccountError};
use recast_api::config::ServerConfig;
use recast_api::router::build_app_router;
use recast_api::state::AppState;
use recast_llm::error::classify_status;
use recast_llm::{CompletionParams, Completions, LlmError};
use recast_search::{ContentSource, SearchError, SearchHit, SearchQuery};

// ---------------------------------------------------------------------------
// Mock content source
// ---------------------------------------------------------------------------

/// Canned [`ContentSource`] with per-method call counters.
pub struct MockContentSource {
    pub crawl_response: Value,
    pub deep_response: Value,
    /// When set, `deep_crawl` fails with a poll timeout instead.
    pub deep_poll_timeout: bool,
    pub search_hits: Vec<SearchHit>,
    pub crawl_calls: AtomicUsize,
    pub deep_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
}

impl Default for MockContentSource {
    fn default() -> Self {
        Self {
            crawl_response: json!({ "content": "这是一段从网页抓取到的正文内容，讲了一家社区咖啡店的故事。" }),
            deep_response: json!({ "status": "completed", "content": "深度抓取得到的正文内容。" }),
            deep_poll_timeout: false,
            search_hits: vec![
                SearchHit {
                    title: "示例结果一".into(),
                    snippet: "第一条搜索结果的摘要。".into(),
                    link: "https://example.com/1".into(),
                },
                SearchHit {
                    title: "示例结果二".into(),
                    snippet: "第二条搜索结果的摘要。".into(),
                    link: "https://example.com/2".into(),
                },
            ],
            crawl_calls: AtomicUsize::new(0),
            deep_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for MockContentSource {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.search_hits.clone())
    }

    async fn crawl(&self, _url: &str) -> Result<Value, SearchError> {
        self.crawl_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.crawl_response.clone())
    }

    async fn deep_crawl(&self, _url: &str) -> Result<Value, SearchError> {
        self.deep_calls.fetch_add(1, Ordering::SeqCst);
        if self.deep_poll_timeout {
            return Err(SearchError::PollTimeout {
                job_id: "job-1".into(),
                waited_secs: 60,
            });
        }
        Ok(self.deep_response.clone())
    }
}

// ---------------------------------------------------------------------------
// Mock completion service
// ---------------------------------------------------------------------------

/// Canned [`Completions`] with a call counter.
pub struct MockCompletions {
    pub reply: String,
    /// When set, every call fails as if the upstream answered with this
    /// status and message.
    pub fail_status: Option<(u16, String)>,
    pub calls: AtomicUsize,
}

impl Default for MockCompletions {
    fn default() -> Self {
        Self {
            reply: "☀️ 今天也是被生活治愈的一天\n\n出门走了走，风很轻，心情都舒展开了。\n\n#日常记录 #生活方式".into(),
            fail_status: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockCompletions {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl Completions for MockCompletions {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _params: CompletionParams,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((status, message)) = &self.fail_status {
            return Err(classify_status(*status, message));
        }
        // Match the production contract: blank completions are an error,
        // never an Ok.
        if self.reply.trim().is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        Ok(self.reply.clone())
    }
}

// ---------------------------------------------------------------------------
// Mock account backend
// ---------------------------------------------------------------------------

/// Canned [`AccountBackend`] that relays a fixed status and body.
pub struct MockAccountBackend {
    pub status: u16,
    pub body: Value,
    pub calls: AtomicUsize,
}

impl Default for MockAccountBackend {
    fn default() -> Self {
        Self {
            status: 200,
            body: json!({ "token": "backend-token", "user": "tester" }),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl AccountBackend for MockAccountBackend {
    async fn forward(
        &self,
        _path: &str,
        _body: Value,
        _bearer: Option<&str>,
    ) -> Result<(u16, Value), AccountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((self.status, self.body.clone()))
    }
}

// ---------------------------------------------------------------------------
// App assembly
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and dummy keys.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        deepseek_api_url: "https://api.deepseek.test".to_string(),
        deepseek_api_key: "test-key".to_string(),
        deepseek_model: "deepseek-chat".to_string(),
        search_api_url: "https://search.test".to_string(),
        search_api_key: "test-key".to_string(),
        account_api_url: "http://account.test".to_string(),
    }
}

/// Build the application router around the given mocks.
pub fn build_test_app_with(
    content: Arc<MockContentSource>,
    llm: Arc<MockCompletions>,
    account: Arc<MockAccountBackend>,
) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        content,
        llm,
        account,
    };
    build_app_router(state, &config)
}

/// Build the application router with all-default mocks.
pub fn build_test_app() -> Router {
    build_test_app_with(
        Arc::new(MockContentSource::default()),
        Arc::new(MockCompletions::default()),
        Arc::new(MockAccountBackend::default()),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard error body shape and return the numeric code.
pub async fn error_code(response: Response<Body>) -> u64 {
    let json = body_json(response).await;
    assert!(json["message"].is_string(), "error body must carry a message");
    json["error"].as_u64().expect("error body must carry a numeric code")
}

/// Shorthand for asserting status + error code in one go.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: u64) {
    assert_eq!(response.status(), status);
    assert_eq!(error_code(response).await, code);
}
