//! Error types for decoding records and loading channel themes.
//!
//! [`DecodeError`] is the only error the per-line path can produce; callers
//! treat it as fatal for the whole run. [`ThemeError`] only occurs at startup.

use std::path::PathBuf;

/// Error returned when an input line is not a well-formed record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The line is not valid JSON (malformed, truncated, or empty).
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The line is valid JSON but the top-level value is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON kind of the top-level value.
        found: &'static str,
    },
}

/// Error type for channel theme loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// YAML parse error.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Theme file could not be read.
    #[error("failed to read theme {}: {source}", .path.display())]
    Read {
        /// Path of the theme file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Top-level key that is not a channel name.
    #[error("unknown channel '{0}' (expected error, warning, info or debug)")]
    UnknownChannel(String),

    /// Invalid color value.
    #[error("invalid color '{value}' for channel '{channel}'")]
    InvalidColor {
        /// Channel where the error occurred.
        channel: String,
        /// The invalid color value.
        value: String,
    },

    /// Unknown attribute in a style definition.
    #[error("unknown attribute '{attribute}' in channel '{channel}'")]
    UnknownAttribute {
        /// Channel where the error occurred.
        channel: String,
        /// The unknown attribute name.
        attribute: String,
    },

    /// Style definition with the wrong shape.
    #[error("invalid definition for channel '{channel}': {message}")]
    InvalidDefinition {
        /// Channel where the error occurred.
        channel: String,
        /// Description of what was wrong.
        message: String,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
