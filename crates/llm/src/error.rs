use recast_core::error::CoreError;

/// Errors from the completion service client.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Completion service rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Completion service rate limit hit: {0}")]
    RateLimited(String),

    #[error("Completion service upstream error: {0}")]
    Upstream(String),

    #[error("Completion service error: {0}")]
    Generic(String),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx response with no usable choice content.
    #[error("Completion service returned an empty completion")]
    EmptyCompletion,
}

/// Classify a non-success completion response by status code and message
/// substring.
///
/// Providers are inconsistent about status codes (some surface quota
/// problems as 400s with a telltale message), so the substring checks
/// back up the status mapping.
pub fn classify_status(status: u16, message: &str) -> LlmError {
    let lower = message.to_lowercase();
    if status == 401 || status == 403 || lower.contains("unauthorized") || lower.contains("invalid api key") {
        LlmError::Unauthorized(message.to_string())
    } else if status == 429 || lower.contains("rate limit") || lower.contains("quota") {
        LlmError::RateLimited(message.to_string())
    } else if status >= 500 || lower.contains("timeout") || lower.contains("bad gateway") {
        LlmError::Upstream(message.to_string())
    } else {
        LlmError::Generic(message.to_string())
    }
}

impl From<LlmError> for CoreError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Unauthorized(m) => CoreError::UpstreamUnauthorized(m),
            LlmError::RateLimited(m) => CoreError::UpstreamRateLimited(m),
            LlmError::Upstream(m) | LlmError::Transport(m) => CoreError::UpstreamNetwork(m),
            LlmError::Generic(m) => CoreError::Internal(m),
            LlmError::EmptyCompletion => CoreError::EmptyGeneration,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- Status classification --

    #[test]
    fn classify_by_status_code() {
        assert_matches!(classify_status(401, "nope"), LlmError::Unauthorized(_));
        assert_matches!(classify_status(429, "busy"), LlmError::RateLimited(_));
        assert_matches!(classify_status(502, "bad"), LlmError::Upstream(_));
        assert_matches!(classify_status(400, "bad request"), LlmError::Generic(_));
    }

    #[test]
    fn classify_by_message_substring() {
        assert_matches!(
            classify_status(400, "Invalid API key provided"),
            LlmError::Unauthorized(_)
        );
        assert_matches!(
            classify_status(400, "Rate limit exceeded for model"),
            LlmError::RateLimited(_)
        );
        assert_matches!(
            classify_status(400, "upstream timeout while connecting"),
            LlmError::Upstream(_)
        );
    }

    // -- CoreError mapping --

    #[test]
    fn maps_into_core_taxonomy() {
        let core: CoreError = LlmError::Unauthorized("k".into()).into();
        assert_matches!(core, CoreError::UpstreamUnauthorized(_));

        let core: CoreError = LlmError::RateLimited("r".into()).into();
        assert_matches!(core, CoreError::UpstreamRateLimited(_));

        let core: CoreError = LlmError::Transport("t".into()).into();
        assert_matches!(core, CoreError::UpstreamNetwork(_));

        let core: CoreError = LlmError::EmptyCompletion.into();
        assert_matches!(core, CoreError::EmptyGeneration);
    }
}
