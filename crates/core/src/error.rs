/// Domain error taxonomy shared by every request path.
///
/// Each variant corresponds to exactly one HTTP status and numeric error
/// code at the API boundary (see `recast-api`). Upstream variants carry the
/// upstream's message so operators can see what the provider actually said;
/// user-facing text is attached at the boundary, not here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fetched content contained no usable text")]
    EmptyContent,

    #[error("Upstream rejected credentials: {0}")]
    UpstreamUnauthorized(String),

    #[error("Upstream rate limit hit: {0}")]
    UpstreamRateLimited(String),

    #[error("Upstream network error: {0}")]
    UpstreamNetwork(String),

    #[error("Model returned an empty completion")]
    EmptyGeneration,

    #[error("Deep crawl did not finish within {waited_secs}s")]
    DeepCrawlTimeout { waited_secs: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
