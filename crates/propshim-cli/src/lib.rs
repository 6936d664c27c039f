//! Command-line runtime for the property-upgrade shim generator.
//!
//! The runtime splits configuration flags from the command, loads layered
//! configuration, installs telemetry, reads a JSON batch of annotated
//! methods, runs the reader over it, and writes a JSON report. Diagnostics
//! are echoed to standard error as `<location>: <CODE>: <message>`.
//!
//! The interface is exercised both from the binary entrypoint and from tests
//! where configuration loading and IO streams can be substituted.

use std::ffi::OsString;
use std::fmt::Display;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;

use propshim_config::Config;
use propshim_reader::{MethodOutcome, PropertyUpgradeReader};

mod batch;
mod cli;
mod config;
mod errors;
pub mod telemetry;

pub use batch::{BatchReport, MethodBatch};
use batch::{read_batch, write_report};
use cli::Cli;
use config::{
    ConfigLoader, OrthoConfigLoader, command_arguments, project_context, split_config_arguments,
};
pub(crate) use errors::AppError;

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, R: Read, W: Write, E: Write> {
    pub(crate) stdin: &'a mut R,
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

struct CliRunner<'a, R: Read, W: Write, E: Write, L: ConfigLoader> {
    io: IoStreams<'a, R, W, E>,
    loader: &'a L,
}

impl<'a, R, W, E, L> CliRunner<'a, R, W, E, L>
where
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: IoStreams<'a, R, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let arguments: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&arguments);

        let result = Cli::try_parse_from(command_arguments(&arguments, &split))
            .map_err(AppError::CliUsage)
            .and_then(|cli| {
                self.loader
                    .load(&split.config_arguments)
                    .map(|loaded| (cli, loaded))
            })
            .and_then(|(cli, loaded)| {
                telemetry::initialise(&loaded)?;
                self.execute(&cli, &loaded)
            });

        match result {
            Ok(exit_code) => exit_code,
            Err(AppError::CliUsage(error)) if !error.use_stderr() => {
                self.emit(Stream::Stdout, &error);
                ExitCode::SUCCESS
            }
            Err(error) => {
                self.emit(Stream::Stderr, &error);
                ExitCode::FAILURE
            }
        }
    }

    fn execute(&mut self, cli: &Cli, config: &Config) -> Result<ExitCode, AppError> {
        let batch = read_batch(cli, self.io.stdin)?;
        let context = project_context(config);
        let project = context.as_ref().map(|ctx| ctx.project_name().to_owned());
        let reader = PropertyUpgradeReader::new(context);
        let report = BatchReport {
            project,
            outcomes: reader.read_all(&batch.methods),
        };

        write_report(cli, &report, self.io.stdout)?;
        for outcome in &report.outcomes {
            echo_diagnostic(outcome, self.io.stderr)?;
        }

        Ok(if report.has_failures() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }

    fn emit(&mut self, stream: Stream, message: &dyn Display) {
        let written = match stream {
            Stream::Stdout => writeln!(self.io.stdout, "{message}"),
            Stream::Stderr => writeln!(self.io.stderr, "{message}"),
        };
        if let Err(error) = written {
            tracing::error!(error = %error, "failed to write CLI output");
        }
    }
}

/// Where a terminal message is written.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn echo_diagnostic<E: Write>(outcome: &MethodOutcome, stderr: &mut E) -> Result<(), AppError> {
    let Some(diagnostic) = outcome.diagnostic() else {
        return Ok(());
    };
    // Fall back to the method signature when no declaration site was given.
    let location = diagnostic
        .location()
        .filter(|site| site.file().is_some() || site.line() > 0)
        .map_or_else(|| outcome.method().to_owned(), ToString::to_string);
    writeln!(stderr, "{location}: {diagnostic}").map_err(AppError::WriteDiagnostics)
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let io = IoStreams {
        stdin,
        stdout,
        stderr,
    };
    run_with_loader(args, io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, R, W, E, L>(
    args: I,
    io: IoStreams<'_, R, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

#[cfg(test)]
mod tests;
