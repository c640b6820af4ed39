//! Route definitions for note generation endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// POST /generate       -> generate_note
/// POST /generate-deep  -> generate_note_deep
/// POST /search         -> search_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(notes::generate_note))
        .route("/generate-deep", post(notes::generate_note_deep))
        .route("/search", post(notes::search_note))
}
