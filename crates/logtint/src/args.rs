//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::output::ColorChoice;

/// Reformat JSON log lines into readable, severity-colored text.
///
/// Each input line must be a JSON object. Records with a `level` of error,
/// fatal, warn, warning, info or debug are printed; others are skipped. A line
/// that is not a JSON object stops processing.
#[derive(Debug, Parser)]
#[command(name = "logtint", version)]
pub struct Cli {
    /// The name of the input file (default: standard input)
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// The name of the output file (default: standard output)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, value_name = "WHEN")]
    pub color: ColorChoice,

    /// YAML file with per-channel styles
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Increase diagnostic verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
