//! Proxy HTTP server lifecycle.
//!
//! [`start_server`] binds a TCP port and serves the router until `Ctrl-C`.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Listen address for the proxy.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Bind the listener. `host` may be an IP literal (v4 or v6) or a hostname.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|e| {
                ServerError::Bind(format!("bind failed on {}:{}: {e}", self.host, self.port))
            })
    }
}

/// Start the proxy and serve requests until `Ctrl-C`.
///
/// # Errors
///
/// Returns an error if the host cannot be resolved, the listener cannot
/// bind, or the server hits a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = config.bind().await?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("failed to read local address: {e}")))?;
    let router = build_router(state);

    info!(%addr, "Weather proxy listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Weather proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Errors that can occur when starting or running the proxy server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("bind error: {0}")]
    Bind(String),

    #[error("serve error: {0}")]
    Serve(String),
}
