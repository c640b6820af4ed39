//! Proxy client for the external account backend.
//!
//! The auth and key routes do not implement accounts; they forward the
//! request body (and bearer token, when present) and relay whatever JSON
//! body and status code the backend answers with.

use std::time::Duration;

use serde_json::Value;

use recast_core::error::CoreError;

/// Per-request HTTP timeout for account calls.
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors from the account proxy.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The request never produced an HTTP response.
    #[error("Account backend transport error: {0}")]
    Transport(String),
}

impl From<AccountError> for CoreError {
    fn from(err: AccountError) -> Self {
        CoreError::UpstreamNetwork(err.to_string())
    }
}

/// The account backend, as seen by the auth/key routes.
///
/// `forward` returns the backend's status code and JSON body verbatim;
/// non-2xx answers are NOT errors here — the route relays them as-is.
#[async_trait::async_trait]
pub trait AccountBackend: Send + Sync {
    async fn forward(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> Result<(u16, Value), AccountError>;
}

/// HTTP implementation of [`AccountBackend`].
pub struct HttpAccountBackend {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for HttpAccountBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAccountBackend")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpAccountBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AccountError> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| AccountError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl AccountBackend for HttpAccountBackend {
    async fn forward(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> Result<(u16, Value), AccountError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.post(&url).json(&body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AccountError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AccountError::Transport(e.to_string()))?;

        // Backends occasionally answer with plain text; wrap it so the
        // client always receives JSON.
        let body = serde_json::from_str::<Value>(&text)
            .unwrap_or_else(|_| serde_json::json!({ "message": text }));

        tracing::debug!(%path, status, "Account backend call relayed");
        Ok((status, body))
    }
}
