//! withtostring-core - Declaration model, diagnostics, and processing states
//!
//! This crate provides the types shared by every withtostring component:
//! - [`TypeDeclaration`] and [`FieldDeclaration`], the read-only declaration model
//! - [`TypeQuery`] for discovering annotated declarations per pass
//! - [`DiagnosticSink`] and [`Diagnostic`] for reporting back to the build
//! - [`ProcessingState`] for the per-type decision state machine
//! - [`GeneratorConfig`] and the error types

mod config;
mod diagnostic;
mod error;
pub mod model;
mod query;
mod state;

pub use config::{DEFAULT_MARKER, GeneratorConfig};
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, Severity};
pub use error::{ConfigError, GenerationError, GenerationResult};
pub use model::{
    ARTIFACT_SUFFIX, FieldDeclaration, GeneratedArtifact, GenerationRequest, StorageClass,
    TO_STRING_METHOD, TypeDeclaration, Visibility,
};
pub use query::{InMemoryQuery, TypeQuery};
pub use state::ProcessingState;

/// Log levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CollectingSink, Diagnostic, DiagnosticSink, FieldDeclaration, GeneratedArtifact,
        GenerationError, GenerationRequest, GeneratorConfig, LogLevel, ProcessingState, Severity,
        StorageClass, TypeDeclaration, TypeQuery, Visibility,
    };
}
