//! Route definitions for the style catalog endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::styles;
use crate::state::AppState;

/// Routes mounted at `/styles`.
///
/// `/recommend` is registered before `/{key}` so the literal segment wins.
///
/// ```text
/// GET /              -> list_styles
/// GET /recommend     -> recommend
/// GET /{key}         -> get_style
/// GET /{key}/prompt  -> style_prompt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(styles::list_styles))
        .route("/recommend", get(styles::recommend))
        .route("/{key}", get(styles::get_style))
        .route("/{key}/prompt", get(styles::style_prompt))
}
