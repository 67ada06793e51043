//! Generator configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker annotation recognized when none is configured.
pub const DEFAULT_MARKER: &str = "ru.otus.annotation.CustomToString";

/// Generator configuration
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Annotation that selects a type for generation (qualified name)
    #[serde(default = "default_marker")]
    pub marker_annotation: String,

    /// Root directory for generated sources
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on processing passes per run
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated-sources")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_passes() -> usize {
    16
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker_annotation: default_marker(),
            output_dir: default_output_dir(),
            log_level: default_log_level(),
            max_passes: default_max_passes(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, choosing the format by extension
    /// (`.json` is JSON, anything else is TOML)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)
        } else {
            let text = String::from_utf8(content)
                .map_err(|e| ConfigError::Invalid(format!("{}: {e}", path.display())))?;
            Self::from_toml(&text)
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker_annotation.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "marker_annotation cannot be empty".to_string(),
            ));
        }
        if self.max_passes == 0 {
            return Err(ConfigError::Invalid(
                "max_passes must be at least 1".to_string(),
            ));
        }
        if self.log_level.parse::<crate::LogLevel>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Set the marker annotation
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker_annotation = marker.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
