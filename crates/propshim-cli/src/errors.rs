//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read input {source_name}: {source}")]
    ReadInput {
        source_name: String,
        source: io::Error,
    },
    #[error("failed to parse method batch: {0}")]
    ParseInput(serde_json::Error),
    #[error("failed to serialise report: {0}")]
    SerialiseReport(serde_json::Error),
    #[error("failed to write report to {target}: {source}")]
    WriteReport { target: String, source: io::Error },
    #[error("failed to report diagnostics: {0}")]
    WriteDiagnostics(io::Error),
}
