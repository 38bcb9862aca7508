use clap::Parser;
use logtint::{app, logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    app::run(&cli)?;
    Ok(())
}
