use recast_core::error::CoreError;

/// Errors from the search/crawl service client.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Search service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body was not the expected shape.
    #[error("Malformed search service response: {0}")]
    Malformed(String),

    /// A deep-crawl job reported failure.
    #[error("Deep crawl job {job_id} failed upstream")]
    JobFailed { job_id: String },

    /// A deep-crawl job was still pending at the polling deadline.
    #[error("Deep crawl job {job_id} did not finish within {waited_secs}s")]
    PollTimeout { job_id: String, waited_secs: u64 },
}

impl From<SearchError> for CoreError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Status { status: 401, message } => {
                CoreError::UpstreamUnauthorized(message)
            }
            SearchError::Status { status: 429, message } => {
                CoreError::UpstreamRateLimited(message)
            }
            SearchError::PollTimeout { waited_secs, .. } => {
                CoreError::DeepCrawlTimeout { waited_secs }
            }
            other => CoreError::UpstreamNetwork(other.to_string()),
        }
    }
}
