//! Error types for input reading.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while opening or reading the input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("unable to open input file {}: {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading the next line failed (I/O error or invalid UTF-8).
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based number of the line being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
