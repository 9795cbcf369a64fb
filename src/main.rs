//! anchorize - insert HTML anchors before documented API headings
//!
//! anchorize rewrites documentation files in place (or acts as a
//! stdin/stdout filter), injecting `<a id="..."></a>` elements before a
//! fixed table of heading patterns so other docs can deep-link to them.

use anyhow::Result;
use clap::Parser;

mod cli;
mod edit;
mod inject;
mod rules;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
