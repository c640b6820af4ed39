//! Client for the external content search/crawl service.
//!
//! [`SearchApiClient`] is the production implementation; handlers and tests
//! depend on the [`ContentSource`] trait so the service can be mocked
//! without HTTP.

pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::SearchApiClient;
pub use error::SearchError;
pub use types::{SearchHit, SearchQuery};

/// The content search/crawl collaborator, as seen by the rest of the
/// system.
///
/// `crawl` and `deep_crawl` return the raw upstream JSON; callers pull the
/// usable text out via [`extract::extract_text`] so the shape-fallback
/// chain stays in one testable place.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Run a web search and return result hits.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError>;

    /// Fetch one page synchronously.
    async fn crawl(&self, url: &str) -> Result<serde_json::Value, SearchError>;

    /// Submit an asynchronous deep-crawl job and poll it to completion.
    ///
    /// Implementations poll at a fixed interval up to a maximum total wait
    /// and fail with [`SearchError::PollTimeout`] past the deadline.
    async fn deep_crawl(&self, url: &str) -> Result<serde_json::Value, SearchError>;
}
