//! CLI entrypoint for the property-upgrade shim generator.
//!
//! The binary delegates to [`propshim_cli::run`], which loads configuration,
//! reads a JSON batch of annotated methods, and writes the interception
//! report.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    propshim_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
