//! Route definitions for the translation endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::translate;
use crate::state::AppState;

/// Routes mounted at `/translate`.
///
/// ```text
/// POST /            -> translate
/// GET  /languages   -> supported_languages
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(translate::translate))
        .route("/languages", get(translate::supported_languages))
}
