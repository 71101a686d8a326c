//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the diagnostic route
//! - Wire up middleware (tracing, request timeout)
//! - Capture peer addresses via ConnectInfo
//! - Serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::diagnostics::{forwarded_chain, DiagnosticReport, HostnameSource, SystemHostname};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub hostname: Arc<dyn HostnameSource>,
}

/// HTTP server for the diagnostic endpoint.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server resolving the host name from the OS.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_hostname_source(config, Arc::new(SystemHostname))
    }

    /// Create a server with a substituted host name source.
    pub fn with_hostname_source(
        config: ServiceConfig,
        hostname: Arc<dyn HostnameSource>,
    ) -> Self {
        let state = AppState { hostname };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(diagnostics_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Diagnostic handler.
///
/// Builds a report from the injected host identity, the connection's
/// peer address, and the request's forwarding header. Any method on the
/// route produces the same report; the request body is never read.
async fn diagnostics_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    let report = DiagnosticReport {
        hostname: state.hostname.hostname(),
        client_ip: peer.ip().to_string(),
        forwarded_for: forwarded_chain(&headers),
    };

    tracing::debug!(
        client_ip = %report.client_ip,
        forwarded_hops = report.forwarded_for.len(),
        "Serving diagnostic report"
    );

    match serde_json::to_string_pretty(&report) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize diagnostic report");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build report").into_response()
        }
    }
}

/// Wait for shutdown: Ctrl+C or an explicit trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            }
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
