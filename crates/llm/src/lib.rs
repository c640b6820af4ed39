//! Client for the LLM completion service (DeepSeek-compatible API).
//!
//! [`DeepSeekClient`] is the production implementation; handlers and tests
//! depend on the [`Completions`] trait. One call, one completion — retry
//! policy is the caller's decision and the caller never retries.

pub mod client;
pub mod error;
pub mod types;

pub use client::DeepSeekClient;
pub use error::LlmError;
pub use types::{CompletionParams, CREATIVE, TRANSLATION};

/// The completion collaborator, as seen by the rest of the system.
#[async_trait::async_trait]
pub trait Completions: Send + Sync {
    /// Run one chat completion and return the first choice's text, trimmed.
    ///
    /// Fails with [`LlmError::EmptyCompletion`] when the model answers with
    /// nothing usable.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: CompletionParams,
    ) -> Result<String, LlmError>;
}
