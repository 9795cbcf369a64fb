//! CLI module - command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::edit;
use crate::rules::RuleSet;

/// anchorize - insert HTML anchors before documented API headings.
#[derive(Parser, Debug)]
#[command(name = "anchorize")]
#[command(
    author,
    version,
    about,
    long_about = r#"anchorize rewrites documentation files in place, inserting an
<a id="..."></a> element plus a blank line immediately before every
occurrence of a known API heading so that other documents can deep-link
to it. The heading table is compiled into the binary.

With no FILE arguments it acts as a filter, reading standard input and
writing the transformed text to standard output.

Examples:
    anchorize README.md
    anchorize docs/*.md --verbose
    anchorize --dry-run README.md
    anchorize < draft.md > draft.anchored.md
"#
)]
pub struct Cli {
    /// Files to rewrite in place; reads stdin/writes stdout when omitted.
    #[arg(
        value_name = "FILE",
        long_help = "Documentation files to rewrite in place, processed in the order\n\
given. A target that cannot be read or written aborts the run; files\n\
already processed keep their rewritten content.\n\n\
When no files are given, anchorize reads all of standard input and\n\
writes the transformed text to standard output."
    )]
    pub files: Vec<PathBuf>,

    /// Print rewritten content to stdout instead of modifying files.
    #[arg(
        long,
        long_help = "Print each file's rewritten content to stdout and leave the file\n\
untouched. Useful for previewing what an in-place run would do.\n\n\
Has no effect in stream mode, which never modifies files."
    )]
    pub dry_run: bool,

    /// Verbose mode (per-target insertion counts on stderr).
    #[arg(
        short,
        long,
        long_help = "Report the number of anchors inserted per target on stderr.\n\
Machine-consumable output on stdout is unaffected."
    )]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    // Compiled once per process; the editing functions take it by reference.
    let rules = RuleSet::defaults();

    if cli.files.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let inserted = edit::process_stream(stdin.lock(), stdout.lock(), rules)?;
        if cli.verbose {
            eprintln!("<stdin>: {} anchor(s) inserted", inserted);
        }
        return Ok(());
    }

    for path in &cli.files {
        let inserted = edit::process_file(path, rules, cli.dry_run)?;
        if cli.verbose {
            eprintln!("{}: {} anchor(s) inserted", path.display(), inserted);
        }
    }

    Ok(())
}
