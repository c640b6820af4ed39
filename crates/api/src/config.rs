/// Server configuration loaded from environment variables.
///
/// Connection settings have defaults suitable for local development; API
/// keys have NO defaults and must be injected at process start. Keys are
/// never compiled into the binary and never logged.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `180`, generation is slow).
    pub request_timeout_secs: u64,
    /// Completion service base URL.
    pub deepseek_api_url: String,
    /// Completion service API key. Required.
    pub deepseek_api_key: String,
    /// Model identifier used for every completion call.
    pub deepseek_model: String,
    /// Search/crawl service base URL.
    pub search_api_url: String,
    /// Search/crawl service API key. Required.
    pub search_api_key: String,
    /// Account backend base URL (login/register/key routes proxy here).
    pub account_api_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `3000`                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS` | `180`                          |
    /// | `DEEPSEEK_API_URL`     | `https://api.deepseek.com`     |
    /// | `DEEPSEEK_API_KEY`     | — (required)                   |
    /// | `DEEPSEEK_MODEL`       | `deepseek-chat`                |
    /// | `SEARCH_API_URL`       | `https://api.websearch.dev`    |
    /// | `SEARCH_API_KEY`       | — (required)                   |
    /// | `ACCOUNT_API_URL`      | `http://localhost:8080`        |
    ///
    /// Panics when a required variable is missing or unparseable, so
    /// misconfiguration fails at startup rather than on the first request.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "180".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let deepseek_api_url = std::env::var("DEEPSEEK_API_URL")
            .unwrap_or_else(|_| "https://api.deepseek.com".into());
        let deepseek_api_key =
            std::env::var("DEEPSEEK_API_KEY").expect("DEEPSEEK_API_KEY must be set");
        let deepseek_model =
            std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| "deepseek-chat".into());

        let search_api_url = std::env::var("SEARCH_API_URL")
            .unwrap_or_else(|_| "https://api.websearch.dev".into());
        let search_api_key = std::env::var("SEARCH_API_KEY").expect("SEARCH_API_KEY must be set");

        let account_api_url =
            std::env::var("ACCOUNT_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            deepseek_api_url,
            deepseek_api_key,
            deepseek_model,
            search_api_url,
            search_api_key,
            account_api_url,
        }
    }
}
