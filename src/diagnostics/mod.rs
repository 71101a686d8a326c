//! Diagnostic report subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → hostname.rs (resolve host identity via injected source)
//!     → report.rs (peer address + X-Forwarded-For chain → DiagnosticReport)
//!     → serialized as the response body
//! ```
//!
//! # Design Decisions
//! - Host name comes from a capability handed to the server at
//!   construction, so tests substitute a fixed value
//! - Forwarded-header parsing is permissive: empty segments are kept
//! - A report lives for exactly one request/response cycle

pub mod hostname;
pub mod report;

pub use hostname::{FixedHostname, HostnameSource, SystemHostname};
pub use report::{forwarded_chain, parse_forwarded_for, DiagnosticReport, X_FORWARDED_FOR};
