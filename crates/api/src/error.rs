use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use recast_core::error::CoreError;
use recast_llm::LlmError;
use recast_search::SearchError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for the domain taxonomy, accepts collaborator
/// errors directly via `?`, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce the `{ "error": <code>, "message": <text> }`
/// JSON body every route uses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `recast-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A search/crawl service failure.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A completion service failure.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// A resource that does not exist (unknown style key etc.).
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Numeric error codes carried in the response body.
///
/// 1 and 2 are load-bearing for clients; the rest are stable but only
/// informational.
const CODE_INVALID_INPUT: u16 = 1;
const CODE_EMPTY_CONTENT: u16 = 2;
const CODE_UNAUTHORIZED: u16 = 3;
const CODE_RATE_LIMITED: u16 = 4;
const CODE_UPSTREAM: u16 = 5;
const CODE_EMPTY_GENERATION: u16 = 6;
const CODE_CRAWL_TIMEOUT: u16 = 7;
const CODE_NOT_FOUND: u16 = 8;
const CODE_INTERNAL: u16 = 9;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let core = match self {
            AppError::Core(core) => core,
            AppError::Search(err) => CoreError::from(err),
            AppError::Llm(err) => CoreError::from(err),
            AppError::NotFound(message) => {
                let body = json!({ "error": CODE_NOT_FOUND, "message": message });
                return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
            }
        };

        let (status, code, message) = classify_core_error(&core);

        let body = json!({
            "error": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a [`CoreError`] to an HTTP status, numeric code, and user-facing
/// message.
///
/// Upstream detail (provider error text) is logged here and replaced with
/// a localized message; it never reaches the client.
fn classify_core_error(core: &CoreError) -> (StatusCode, u16, String) {
    match core {
        CoreError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, CODE_INVALID_INPUT, msg.clone()),
        CoreError::EmptyContent => (
            StatusCode::INTERNAL_SERVER_ERROR,
            CODE_EMPTY_CONTENT,
            "未能从来源中提取到有效内容".to_string(),
        ),
        CoreError::UpstreamUnauthorized(detail) => {
            tracing::warn!(%detail, "Upstream rejected credentials");
            (
                StatusCode::UNAUTHORIZED,
                CODE_UNAUTHORIZED,
                "上游服务认证失败，请检查服务配置".to_string(),
            )
        }
        CoreError::UpstreamRateLimited(detail) => {
            tracing::warn!(%detail, "Upstream rate limit hit");
            (
                StatusCode::TOO_MANY_REQUESTS,
                CODE_RATE_LIMITED,
                "请求过于频繁，请稍后再试".to_string(),
            )
        }
        CoreError::UpstreamNetwork(detail) => {
            tracing::error!(%detail, "Upstream network error");
            (
                StatusCode::BAD_GATEWAY,
                CODE_UPSTREAM,
                "上游服务暂时不可用，请稍后再试".to_string(),
            )
        }
        CoreError::EmptyGeneration => (
            StatusCode::INTERNAL_SERVER_ERROR,
            CODE_EMPTY_GENERATION,
            "生成结果为空，请重试".to_string(),
        ),
        CoreError::DeepCrawlTimeout { waited_secs } => (
            StatusCode::GATEWAY_TIMEOUT,
            CODE_CRAWL_TIMEOUT,
            format!("网页深度抓取超过 {waited_secs} 秒未完成，请稍后再试"),
        ),
        CoreError::Internal(detail) => {
            tracing::error!(%detail, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CODE_INTERNAL,
                "服务器内部错误".to_string(),
            )
        }
    }
}
