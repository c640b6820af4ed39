//! Route definition for the style-rewrite endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::rewrite;
use crate::state::AppState;

/// Routes mounted at `/rewrite`.
///
/// ```text
/// POST /  -> rewrite
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(rewrite::rewrite))
}
