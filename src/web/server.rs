//! Server setup and lifecycle

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use crate::error::{NotaError, Result};
use crate::infrastructure::{open_manager, Config};
use crate::web::{create_router, AppState};

/// Run the local web server until interrupted with Ctrl+C.
pub async fn serve(config: Config, host: &str, port: u16) -> Result<()> {
    // Fail fast on a bad storage configuration instead of returning 500
    // for every request later; for the JSON kind this also creates the
    // store file up front.
    open_manager(&config)?;

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| NotaError::Server(format!("invalid address {}:{}: {}", host, port, e)))?;

    let state = Arc::new(AppState { config });
    let router = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| NotaError::Server(format!("failed to bind {}: {}", addr, e)))?;

    log::info!("note server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NotaError::Server(e.to_string()))
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::info!("shutdown signal received");
}
