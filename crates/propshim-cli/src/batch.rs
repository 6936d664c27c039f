//! JSON batch input and report output.

use std::fs;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use propshim_model::AnnotatedMethod;
use propshim_reader::MethodOutcome;

use crate::AppError;
use crate::cli::Cli;

/// The methods of one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MethodBatch {
    /// Methods in declaration order, marked or not.
    #[serde(default)]
    pub methods: Vec<AnnotatedMethod>,
}

/// Per-method results for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchReport {
    /// Project identifier the requests were scoped to.
    pub project: Option<String>,
    /// One entry per marked method, in input order.
    pub outcomes: Vec<MethodOutcome>,
}

impl BatchReport {
    /// Returns `true` when any marked method was rejected.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(MethodOutcome::is_failure)
    }
}

pub(crate) fn read_batch<R: Read>(cli: &Cli, stdin: &mut R) -> Result<MethodBatch, AppError> {
    let text = if cli.reads_stdin() {
        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .map_err(|source| AppError::ReadInput {
                source_name: String::from("<stdin>"),
                source,
            })?;
        buffer
    } else {
        fs::read_to_string(&cli.input).map_err(|source| AppError::ReadInput {
            source_name: cli.input.to_string(),
            source,
        })?
    };
    serde_json::from_str(&text).map_err(AppError::ParseInput)
}

pub(crate) fn write_report<W: Write>(
    cli: &Cli,
    report: &BatchReport,
    stdout: &mut W,
) -> Result<(), AppError> {
    let mut rendered = if cli.pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .map_err(AppError::SerialiseReport)?;
    rendered.push('\n');

    match cli.output.as_ref() {
        Some(path) => fs::write(path, rendered).map_err(|source| AppError::WriteReport {
            target: path.to_string(),
            source,
        }),
        None => stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| AppError::WriteReport {
                target: String::from("<stdout>"),
                source,
            }),
    }
}
