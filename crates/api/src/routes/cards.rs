//! Route definition for the card generation endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// Routes mounted at `/cards`.
///
/// ```text
/// POST /  -> generate_cards
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(cards::generate_cards))
}
