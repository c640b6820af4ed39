//! HTTP implementation of [`ContentSource`].

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::SearchError;
use crate::types::{SearchHit, SearchQuery};
use crate::ContentSource;

/// Per-request HTTP timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Interval between deep-crawl job status polls.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Maximum total wait for a deep-crawl job before giving up.
const MAX_POLL_WAIT: Duration = Duration::from_secs(60);

/// Client for the search/crawl service.
///
/// Every call is single-shot; there is no retry. The only loop is the
/// deep-crawl status poll, which is bounded by [`MAX_POLL_WAIT`].
pub struct SearchApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for SearchApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct DeepCrawlSubmit {
    #[serde(alias = "job_id")]
    #[serde(rename = "jobId")]
    job_id: String,
}

impl SearchApiClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, SearchError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, SearchError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, SearchError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| String::new());
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| SearchError::Malformed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ContentSource for SearchApiClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        let body = serde_json::to_value(query)
            .map_err(|e| SearchError::Malformed(e.to_string()))?;
        let raw = self.post_json("/search", &body).await?;

        let parsed: SearchResponse = serde_json::from_value(raw)
            .map_err(|e| SearchError::Malformed(e.to_string()))?;

        tracing::debug!(
            query = %query.query,
            hits = parsed.results.len(),
            "Search completed",
        );
        Ok(parsed.results)
    }

    async fn crawl(&self, url: &str) -> Result<Value, SearchError> {
        tracing::debug!(%url, "Crawling page");
        self.post_json("/crawl", &json!({ "url": url })).await
    }

    async fn deep_crawl(&self, url: &str) -> Result<Value, SearchError> {
        let raw = self.post_json("/crawl/deep", &json!({ "url": url })).await?;
        let submit: DeepCrawlSubmit = serde_json::from_value(raw)
            .map_err(|e| SearchError::Malformed(format!("deep crawl submit: {e}")))?;
        let job_id = submit.job_id;

        tracing::info!(%url, %job_id, "Deep crawl job submitted, polling");

        let started = tokio::time::Instant::now();
        loop {
            let body = self.get_json(&format!("/crawl/jobs/{job_id}")).await?;
            match body.get("status").and_then(Value::as_str) {
                Some("completed") => {
                    tracing::info!(%job_id, "Deep crawl job completed");
                    return Ok(body);
                }
                Some("failed") => {
                    return Err(SearchError::JobFailed { job_id });
                }
                // Pending (or a shape we do not recognize): keep polling
                // until the deadline.
                _ => {}
            }

            if started.elapsed() >= MAX_POLL_WAIT {
                return Err(SearchError::PollTimeout {
                    job_id,
                    waited_secs: MAX_POLL_WAIT.as_secs(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
