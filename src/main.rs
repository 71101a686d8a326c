//! Network Diagnostic Endpoint
//!
//! A small HTTP service built with Tokio and Axum that reports, for each
//! inbound request, the server's host name, the connecting peer's IP
//! address, and the proxy chain recorded in `X-Forwarded-For`.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │              DIAGNOSTIC ENDPOINT              │
//!                    │                                               │
//!   Client Request   │  ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//!   ─────────────────┼─▶│ listener │───▶│  http   │───▶│diagnostic│ │
//!                    │  │ (tokio)  │    │ server  │    │ handler  │ │
//!                    │  └──────────┘    └─────────┘    └────┬─────┘ │
//!                    │                                      │       │
//!   Client Response  │                  ┌─────────┐    ┌────▼─────┐ │
//!   ◀────────────────┼──────────────────│  JSON   │◀───│  report  │ │
//!                    │                  │  body   │    │ builder  │ │
//!                    │                  └─────────┘    └──────────┘ │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌──────────┐ ┌───────────┐  │ │
//!                    │  │  │ config │ │ tracing  │ │ lifecycle │  │ │
//!                    │  │  └────────┘ └──────────┘ └───────────┘  │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod diagnostics;
pub mod http;
pub mod lifecycle;

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{load_config, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

#[derive(Parser)]
#[command(name = "whereami")]
#[command(about = "HTTP endpoint reporting hostname, client IP, and forwarding chain", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "0.0.0.0:8080")
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whereami=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("whereami v0.1.0 starting");

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
