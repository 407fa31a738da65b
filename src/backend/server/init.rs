/**
 * Server Initialization
 *
 * This module turns a validated `ProxyConfig` into a ready-to-serve Axum
 * router, and runs it.
 *
 * # Initialization Process
 *
 * 1. Create the outbound HTTP client
 * 2. Wrap it with the backend URL in a `TaskForwarder`
 * 3. Build `AppState` and the router
 */
use axum::Router;
use reqwest::Client;
use tokio::net::TcpListener;

use crate::backend::proxy::TaskForwarder;
use crate::backend::routes::create_router;
use crate::backend::server::config::ProxyConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub fn create_app(config: &ProxyConfig) -> Router<()> {
    tracing::info!("Forwarding task requests to {}", config.backend_url);

    let forwarder = TaskForwarder::new(Client::new(), config.backend_url.clone());
    create_router(AppState::new(forwarder))
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: ProxyConfig) -> std::io::Result<()> {
    let app = create_app(&config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
