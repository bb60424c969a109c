//! teleprompt-engine: Headless engine for timed line-by-line display
//!
//! This crate provides the core display logic for teleprompt, including:
//! - Line sources (raw text blocks or ordered line sequences)
//! - The display loop with rest intervals and an optional stop time
//! - Persisted playback configuration

pub mod config;
pub mod displayer;
pub mod source;

// Re-export commonly used types
pub use config::{ConfigError, DisplayConfig};
pub use displayer::{DisplayError, DisplayStatus, LineDisplayer, DEFAULT_REST_INTERVAL};
pub use source::LineSource;

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
