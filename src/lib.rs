//! Network Diagnostic Endpoint Library

pub mod config;
pub mod diagnostics;
pub mod http;
pub mod lifecycle;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
