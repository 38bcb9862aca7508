//! The line-by-line processing loop.
//!
//! Each input line is decoded, classified and routed. Records whose level
//! routes to no channel are dropped silently (a `debug` event is the only
//! trace). The first line that fails to decode stops the run: nothing is
//! written for it or for any later line.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use logtint_input::{InputError, LineReader};
use logtint_render::{
    decode_line, write_message, ClassifiedMessage, DecodeError, StyleBinding, LEVEL_KEY,
};
use tracing::{debug, trace};

/// Error that stops a run partway through the input.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A line is not a well-formed record.
    #[error("line {line}: {source}")]
    Decode {
        /// 1-based line number.
        line: usize,
        /// Why decoding failed.
        #[source]
        source: DecodeError,
    },

    /// Reading the input failed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records written to the output.
    pub rendered: usize,
    /// Records skipped for an absent or unrecognized level.
    pub dropped: usize,
}

/// Streams records from a reader to a writer through a style binding.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    binding: &'a StyleBinding,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline that prints through `binding`.
    pub fn new(binding: &'a StyleBinding) -> Self {
        Self { binding }
    }

    /// Processes every line of `input`, writing renderings to `out`.
    ///
    /// `out` is flushed before returning, whether the run completed or
    /// stopped on an error.
    pub fn run<R: BufRead, W: Write + ?Sized>(
        &self,
        input: R,
        out: &mut W,
    ) -> Result<RunSummary, PipelineError> {
        let result = self.process(input, out);
        let flushed = out.flush().map_err(PipelineError::Write);
        let summary = result?;
        flushed?;
        Ok(summary)
    }

    fn process<R: BufRead, W: Write + ?Sized>(
        &self,
        input: R,
        out: &mut W,
    ) -> Result<RunSummary, PipelineError> {
        let mut summary = RunSummary::default();
        for line in LineReader::new(input) {
            let line = line?;
            let record = decode_line(&line.text).map_err(|source| PipelineError::Decode {
                line: line.number,
                source,
            })?;
            let msg = ClassifiedMessage::classify(record);

            let Some(channel) = msg.channel() else {
                debug!(
                    line = line.number,
                    level = %dropped_level(&msg),
                    "dropping record with unrecognized severity"
                );
                summary.dropped += 1;
                continue;
            };

            write_message(&msg, self.binding.printer(channel), out)
                .and_then(|()| out.flush())
                .map_err(PipelineError::Write)?;
            trace!(line = line.number, %channel, "rendered record");
            summary.rendered += 1;
        }
        Ok(summary)
    }
}

/// The level of a dropped record as it appeared in the input.
///
/// A non-string `level` stays in `data`, so it is read back from there.
fn dropped_level(msg: &ClassifiedMessage) -> Cow<'_, str> {
    match (&msg.level, msg.data.get(LEVEL_KEY)) {
        (Some(level), _) => Cow::Borrowed(level.as_str()),
        (None, Some(raw)) => Cow::Owned(raw.to_string()),
        (None, None) => Cow::Borrowed("<none>"),
    }
}
