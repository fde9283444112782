//! Serve command implementation
//!
//! This module implements the `fruitd serve` command: it builds a fresh
//! store, wires the HTTP adapter over it, and runs until a shutdown signal.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use fruitd_adapters::AppState;
use fruitd_store::FruitStore;
use tokio::signal;
use tracing::info;

/// Arguments for the serve command
pub struct ServeArgs {
    /// Port to listen on
    pub port: u16,
    /// Host address to bind
    pub host: String,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    // Initialize tracing for the server
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fruitd=debug,info".into()),
        )
        .init();

    let addr = parse_listen_addr(&args.host, args.port)?;

    // Each process starts with an empty catalog; nothing persists.
    let state = AppState::new(FruitStore::new());

    info!(%addr, "starting fruitd");
    fruitd_adapters::serve(addr, state, wait_for_shutdown()).await?;

    info!("fruitd shutdown complete");
    Ok(())
}

/// Parse the host/port pair into a socket address with a helpful error
pub fn parse_listen_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host.parse().with_context(|| {
        format!(
            "Invalid host address '{}'. Expected an IP (e.g., 127.0.0.1 or 0.0.0.0)",
            host
        )
    })?;
    Ok(SocketAddr::new(ip, port))
}

/// Wait for shutdown signal (Ctrl+C)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
