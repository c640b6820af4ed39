use std::sync::Arc;

use recast_llm::Completions;
use recast_search::ContentSource;

use crate::account::AccountBackend;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc`. Collaborators are trait
/// objects so integration tests can swap in mocks without HTTP.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Content search/crawl service.
    pub content: Arc<dyn ContentSource>,
    /// LLM completion service.
    pub llm: Arc<dyn Completions>,
    /// Account backend the auth/key routes proxy to.
    pub account: Arc<dyn AccountBackend>,
}
