//! Handlers for the auth/key routes.
//!
//! These are thin proxies: the account backend owns all account state, and
//! we relay its JSON body and status code verbatim. Only a transport
//! failure (backend unreachable) becomes one of our own errors.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use recast_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    relay(state, "/auth/login", &headers, body).await
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    relay(state, "/auth/register", &headers, body).await
}

/// POST /api/v1/keys/activate
pub async fn activate_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    relay(state, "/keys/activate", &headers, body).await
}

/// POST /api/v1/keys/consume
pub async fn consume_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    relay(state, "/keys/consume", &headers, body).await
}

/// Forward a request to the account backend and relay its answer.
async fn relay(
    state: AppState,
    path: &str,
    headers: &HeaderMap,
    body: Value,
) -> AppResult<Response> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let (status, body) = state
        .account
        .forward(path, body, bearer)
        .await
        .map_err(CoreError::from)?;

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(body)).into_response())
}
