//! Top-level error type for a `logtint` run.

use std::io;
use std::path::PathBuf;

use logtint_input::InputError;
use logtint_render::ThemeError;

use crate::pipeline::PipelineError;

/// Everything that can stop a run.
///
/// All variants are fatal. Resource errors ([`AppError::Input`],
/// [`AppError::OpenOutput`], [`AppError::Theme`]) happen before any record is
/// processed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input could not be opened.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The output file could not be created.
    #[error("unable to open output file {}: {source}", .path.display())]
    OpenOutput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The theme file is missing or invalid.
    #[error("invalid theme: {0}")]
    Theme(#[from] ThemeError),

    /// Processing stopped on a malformed record or an I/O failure.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
