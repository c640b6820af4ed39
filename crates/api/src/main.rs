use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recast_api::account::HttpAccountBackend;
use recast_api::config::ServerConfig;
use recast_api::router::build_app_router;
use recast_api::state::AppState;
use recast_llm::DeepSeekClient;
use recast_search::SearchApiClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recast_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- External collaborators ---
    let content = SearchApiClient::new(&config.search_api_url, &config.search_api_key)
        .expect("Failed to create search client");
    let llm = DeepSeekClient::new(
        &config.deepseek_api_url,
        &config.deepseek_api_key,
        &config.deepseek_model,
    )
    .expect("Failed to create completion client");
    let account = HttpAccountBackend::new(&config.account_api_url)
        .expect("Failed to create account backend client");
    tracing::info!(
        search_api = %config.search_api_url,
        completion_api = %config.deepseek_api_url,
        model = %config.deepseek_model,
        "External service clients created",
    );

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(content),
        llm: Arc::new(llm),
        account: Arc::new(account),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
