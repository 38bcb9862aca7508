//! Input handling for `logtint`.
//!
//! `logtint-input` selects where records come from and splits the stream
//! into numbered lines:
//!
//! - [`InputSource`]: standard input or a file, opened as a `BufRead`
//! - [`LineReader`]: iterator of [`Line`]s, 1-based, terminators removed
//!
//! # Example
//!
//! ```no_run
//! use logtint_input::{InputSource, LineReader};
//!
//! let reader = InputSource::File("app.log".into()).open()?;
//! for line in LineReader::new(reader) {
//!     let line = line?;
//!     println!("{}: {}", line.number, line.text);
//! }
//! # Ok::<(), logtint_input::InputError>(())
//! ```

mod error;
mod lines;
mod source;

pub use error::InputError;
pub use lines::{Line, LineReader};
pub use source::InputSource;
