//! Route definitions for the script endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::scripts;
use crate::state::AppState;

/// Routes mounted at `/scripts`.
///
/// ```text
/// POST /short-video  -> short_video
/// POST /voice-over   -> voice_over
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/short-video", post(scripts::short_video))
        .route("/voice-over", post(scripts::voice_over))
}
