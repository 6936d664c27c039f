//! Command-line argument definitions.

use camino::Utf8PathBuf;
use clap::Parser;

/// Path that selects standard input.
pub(crate) const STDIN_MARKER: &str = "-";

/// Reads annotated accessor methods and reports the interception requests
/// that keep their pre-upgrade call sites working.
#[derive(Parser, Debug)]
#[command(name = "propshim", version)]
pub(crate) struct Cli {
    /// JSON batch of annotated methods, or `-` for standard input.
    #[arg(value_name = "INPUT")]
    pub(crate) input: Utf8PathBuf,
    /// Writes the report to this file instead of standard output.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Pretty-prints the JSON report.
    #[arg(long)]
    pub(crate) pretty: bool,
}

impl Cli {
    /// Returns `true` when the batch is read from standard input.
    pub(crate) fn reads_stdin(&self) -> bool {
        self.input.as_str() == STDIN_MARKER
    }
}
