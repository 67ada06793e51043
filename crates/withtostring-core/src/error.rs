//! Error types for withtostring

use thiserror::Error;

/// Result type alias for artifact generation
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Failure to produce a single artifact.
///
/// Scoped to one type: the driver reports it and moves on.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The target file could not be created
    #[error("Failed to create the file {file}: {source}")]
    Create {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The target file was created but writing its body failed
    #[error("Failed to write to the file {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Name of the file the failure refers to
    pub fn file(&self) -> &str {
        match self {
            GenerationError::Create { file, .. } | GenerationError::Write { file, .. } => file,
        }
    }
}

/// Errors loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value was parsed but is not acceptable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
