//! CLI entry point for the QR brick mosaic planner

use brickqr::io::cli::{Cli, MosaicBuilder};
use clap::Parser;

fn main() -> brickqr::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let mut builder = MosaicBuilder::new(cli);
    builder.process()?;
    Ok(())
}
