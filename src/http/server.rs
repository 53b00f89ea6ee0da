//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server address: {0}")]
    Address(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Shuts down gracefully on SIGTERM/SIGINT. This function blocks until the
/// server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    start_server_with_shutdown(app, config, shutdown::shutdown_signal()).await
}

/// Start the HTTP server, shutting down gracefully once `signal` resolves.
///
/// In-flight requests get `http.shutdown_grace_seconds` to complete.
pub async fn start_server_with_shutdown<F>(
    app: Router,
    config: &AppConfig,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_grace_seconds),
        signal,
    );

    serve(app, addr, handle).await
}

/// Serve `app` on `addr`, controlled by an externally owned `handle`.
///
/// The caller can read the bound address via `Handle::listening` and stop
/// the server via `Handle::graceful_shutdown`.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
