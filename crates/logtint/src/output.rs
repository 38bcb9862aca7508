//! Output destination and color selection.
//!
//! [`OutputDestination`] opens a [`Sink`]: the writer plus whether it is an
//! interactive surface that can show color. [`ColorChoice`] turns that signal
//! into the final yes/no used to build the style binding.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use console::Term;

use crate::AppError;

/// Controls whether output is colored.
///
/// This is the user-facing enum for the `--color` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when the destination is a color-capable terminal
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the destination's capability signal.
    pub fn resolve(self, color_capable: bool) -> bool {
        match self {
            ColorChoice::Auto => color_capable,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Destination for rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to a specific file (created or truncated)
    File(PathBuf),
}

impl OutputDestination {
    /// Picks a file when a path is given, standard output otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputDestination::Stdout, OutputDestination::File)
    }

    /// Opens the destination for writing.
    pub fn open(&self) -> Result<Sink, AppError> {
        match self {
            OutputDestination::Stdout => Ok(Sink::new(
                Box::new(io::stdout().lock()),
                Term::stdout().features().colors_supported(),
            )),
            OutputDestination::File(path) => {
                let file = File::create(path).map_err(|source| AppError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
                let color_capable = file_supports_color(&file);
                Ok(Sink::new(Box::new(BufWriter::new(file)), color_capable))
            }
        }
    }

    /// Human-readable name for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            OutputDestination::Stdout => "<stdout>".to_string(),
            OutputDestination::File(path) => path.display().to_string(),
        }
    }
}

/// Whether an opened file is a terminal that can show color, e.g. `/dev/tty`.
///
/// Applies the same rules `console` uses for standard output.
fn file_supports_color(file: &File) -> bool {
    file.is_terminal()
        && env_allows_color(env::var("NO_COLOR").is_ok(), env::var("TERM").ok().as_deref())
}

fn env_allows_color(no_color: bool, term: Option<&str>) -> bool {
    !no_color && term.is_some_and(|term| term != "dumb")
}

/// An opened output stream and its color capability.
pub struct Sink {
    writer: Box<dyn Write>,
    color_capable: bool,
}

impl Sink {
    /// Wraps a writer with an explicit capability signal.
    pub fn new(writer: Box<dyn Write>, color_capable: bool) -> Self {
        Self {
            writer,
            color_capable,
        }
    }

    /// Whether the destination is an interactive, color-capable surface.
    pub fn color_capable(&self) -> bool {
        self.color_capable
    }

    /// The underlying writer.
    pub fn writer(&mut self) -> &mut dyn Write {
        &mut *self.writer
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("color_capable", &self.color_capable)
            .finish_non_exhaustive()
    }
}
