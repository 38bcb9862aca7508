//! # Logtint - Severity-Colored JSON Log Viewer
//!
//! `logtint` reads newline-delimited JSON log records and prints each one as
//! an indented, human-readable block colored by severity.
//!
//! ```text
//! $ echo '{"level":"info","user":{"id":1,"name":"a"}}' | logtint
//! level : info
//! data :
//!   user :
//!     id : 1
//!     name : a
//! ```
//!
//! The rendering core lives in [`logtint_render`]; this crate adds the CLI,
//! output selection, the streaming [`Pipeline`] and diagnostics.
//!
//! ## Behavior
//!
//! - Records with level `error`/`fatal`, `warn`/`warning`, `info` or `debug`
//!   are printed through the matching channel style.
//! - Records with any other level, or none, are skipped.
//! - A line that is not a JSON object stops the run with an error.
//! - Color is used only when the output is a color-capable terminal, unless
//!   `--color` says otherwise.

pub mod app;
pub mod args;
mod error;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use args::Cli;
pub use error::AppError;
pub use output::{ColorChoice, OutputDestination, Sink};
pub use pipeline::{Pipeline, PipelineError, RunSummary};
