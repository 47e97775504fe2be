use anyhow::Result;
use clap::Parser;
use flight_difficulty::cli::logging::init_logging;
use flight_difficulty::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    run(cli)
}
