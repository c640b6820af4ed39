//! Route definitions for the proxied auth/key endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login     -> login
/// POST /register  -> register
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
}

/// Routes mounted at `/keys`.
///
/// ```text
/// POST /activate  -> activate_key
/// POST /consume   -> consume_key
/// ```
pub fn keys_router() -> Router<AppState> {
    Router::new()
        .route("/activate", post(auth::activate_key))
        .route("/consume", post(auth::consume_key))
}
