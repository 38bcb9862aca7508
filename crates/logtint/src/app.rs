//! Wiring for a complete run: open resources, bind styles, stream records.

use logtint_input::InputSource;
use logtint_render::{ChannelTheme, StyleBinding};
use tracing::info;

use crate::args::Cli;
use crate::output::OutputDestination;
use crate::pipeline::{Pipeline, RunSummary};
use crate::AppError;

/// Runs `logtint` with the given arguments.
///
/// The theme is loaded first, then the input is opened, then the output, so
/// a bad theme or a missing input never truncates an existing output file.
pub fn run(cli: &Cli) -> Result<RunSummary, AppError> {
    let theme = match &cli.theme {
        Some(path) => ChannelTheme::from_file(path)?,
        None => ChannelTheme::default(),
    };

    let input = InputSource::from_path(cli.input.clone());
    let reader = input.open()?;

    let destination = OutputDestination::from_path(cli.output.clone());
    let mut sink = destination.open()?;

    let color = cli.color.resolve(sink.color_capable());
    let binding = StyleBinding::select(color, &theme);
    info!(
        input = %input.describe(),
        output = %destination.describe(),
        styled = binding.is_styled(),
        "starting"
    );

    let summary = Pipeline::new(&binding).run(reader, sink.writer())?;
    info!(
        rendered = summary.rendered,
        dropped = summary.dropped,
        "finished"
    );
    Ok(summary)
}
