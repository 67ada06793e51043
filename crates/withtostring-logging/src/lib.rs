//! withtostring-logging - Tracing setup and diagnostic routing
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr `tracing` subscriber
//! - [`ReloadHandle`] for changing the log level at runtime
//! - [`TracingSink`], a diagnostic sink that logs warnings and errors and counts them

mod reload;
mod sink;

pub use reload::{ReloadHandle, init_logging};
pub use sink::TracingSink;
pub use withtostring_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, TracingSink, init_logging};
}
