//! HTTP implementation of [`Completions`].

use std::time::Duration;

use serde_json::Value;

use crate::error::{classify_status, LlmError};
use crate::types::{ChatMessage, CompletionParams, CompletionRequest, CompletionResponse};
use crate::Completions;

/// Per-request HTTP timeout. Completions are slow; this bounds a hung
/// connection, not normal generation time.
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for a DeepSeek-compatible chat-completions API.
pub struct DeepSeekClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for DeepSeekClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl DeepSeekClient {
    /// Create a client for the service at `base_url` using `model` for
    /// every call.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| LlmError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Pull the provider's error message out of a failure body, falling
    /// back to the raw text when it is not the usual `{error:{message}}`
    /// envelope.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }
}

/// First choice's trimmed content, or [`LlmError::EmptyCompletion`].
pub(crate) fn first_content(response: CompletionResponse) -> Result<String, LlmError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .unwrap_or_default();
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(LlmError::EmptyCompletion);
    }
    Ok(trimmed.to_string())
}

#[async_trait::async_trait]
impl Completions for DeepSeekClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: CompletionParams,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            let message = Self::error_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "Completion call failed");
            return Err(classify_status(status.as_u16(), &message));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Generic(format!("Malformed completion response: {e}")))?;

        let content = first_content(parsed)?;
        tracing::debug!(
            model = %self.model,
            chars = content.chars().count(),
            "Completion succeeded",
        );
        Ok(content)
    }
}
