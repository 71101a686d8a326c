//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received or trigger() called → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Shutdown fans out over a broadcast channel so the server and any
//!   test harness observe the same signal

pub mod shutdown;

pub use shutdown::Shutdown;
