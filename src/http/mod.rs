//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, peer address capture)
//!     → diagnostics handler (build report)
//!     → JSON response to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
