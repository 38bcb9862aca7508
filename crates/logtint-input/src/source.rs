//! Where input lines come from.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::InputError;

/// The input stream to read records from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    #[default]
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Picks a file when a path is given, standard input otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }

    /// Opens the source for buffered line reading.
    ///
    /// The returned reader is released when dropped.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Human-readable name for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}
