//! Configuration for teleprompt.
//!
//! This module defines the persisted playback settings: the rest
//! interval between lines and the optional stop time, with documented
//! defaults.

use crate::displayer::{DisplayError, LineDisplayer, DEFAULT_REST_INTERVAL};
use crate::source::LineSource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Playback settings for a display run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Seconds to pause between consecutive lines.
    #[serde(default = "default_rest_interval")]
    pub rest_interval_seconds: f64,

    /// Optional ceiling on total elapsed seconds; absent means
    /// unbounded.
    #[serde(default)]
    pub stop_time_seconds: Option<f64>,
}

fn default_rest_interval() -> f64 {
    DEFAULT_REST_INTERVAL
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rest_interval_seconds: default_rest_interval(),
            stop_time_seconds: None,
        }
    }
}

impl DisplayConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Build a validated displayer for `source` from these settings.
    pub fn displayer(&self, source: impl Into<LineSource>) -> Result<LineDisplayer, DisplayError> {
        LineDisplayer::new(source, self.rest_interval_seconds, self.stop_time_seconds)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
