//! Core error types for glanceboard-core.
//!
//! This module defines the error hierarchy using thiserror. The layout engine
//! itself is pure, so every failure here is local and surfaced synchronously:
//! malformed input, calendar arithmetic leaving chrono's range, or a
//! configuration file that cannot be read or written.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for glanceboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A span whose end precedes its start
    #[error("Invalid date range for '{id}': end ({end}) is before start ({start})")]
    InvalidDateRange {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Date arithmetic left the representable calendar
    #[error("Date out of range: {base} shifted by {offset} {unit}")]
    DateOutOfRange {
        base: NaiveDate,
        offset: i64,
        unit: &'static str,
    },

    /// Unrecognised zoom level name
    #[error("Unknown zoom level: '{0}' (expected day, week, month or quarter)")]
    UnknownZoom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
