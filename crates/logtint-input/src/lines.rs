//! Numbered line iteration over any buffered reader.

use std::io::BufRead;

use crate::InputError;

/// One input line without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    /// Line content, with `\n` or `\r\n` removed.
    pub text: String,
}

/// Iterates the lines of a reader, numbering them from 1.
///
/// Iteration stops after the first read error.
///
/// ```
/// use logtint_input::LineReader;
///
/// let lines: Vec<_> = LineReader::new("a\r\nb\n".as_bytes())
///     .map(|line| line.unwrap().text)
///     .collect();
/// assert_eq!(lines, ["a", "b"]);
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    number: usize,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.number += 1;
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                Some(Ok(Line {
                    number: self.number,
                    text,
                }))
            }
            Err(source) => {
                self.done = true;
                Some(Err(InputError::Read {
                    line: self.number + 1,
                    source,
                }))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineReader<R> {}
