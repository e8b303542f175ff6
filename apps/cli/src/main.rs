//! DocPress CLI — documentation build pipeline.
//!
//! Mirrors a source tree into a documentation output tree, runs an
//! external documentation compiler over it, and post-processes the
//! generated HTML.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
