use anyhow::Context;
use feature_flag_api::config::ServerConfig;
use feature_flag_api::middleware::{create_cors_layer, observability};
use feature_flag_api::routes::{self, AppState};
use tracing::info;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    observability::init_tracing(config.log_format);
    observability::setup_panic_hook();
    info!("Application starting...");

    // Stores are built once here and shared by every request through AppState
    let app_state = if config.seed_data {
        info!("Loading seed environments and feature flags");
        AppState::seeded().await
    } else {
        AppState::in_memory()
    };

    if config.cors_allowed_origins.is_empty() {
        info!("CORS: allowing any origin");
    } else {
        info!("CORS: allowing origins {:?}", config.cors_allowed_origins);
    }
    let app = routes::create_app(app_state, create_cors_layer(&config.cors_allowed_origins));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server listening on {}", addr);
    info!("Health check available at http://{}/health", addr);
    info!("OpenAPI spec available at http://{}/api/v1/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM (Docker stop).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
