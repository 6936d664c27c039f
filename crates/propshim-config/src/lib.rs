//! Layered configuration for the property-upgrade shim generator.
//!
//! Values are merged by `ortho_config` in increasing precedence: built-in
//! defaults, a `.propshim.toml` file (or the file named by `--config-path` or
//! `PROPSHIM_CONFIG_PATH`), `PROPSHIM_*` environment variables, and finally
//! command-line flags.
//!
//! The configuration carries the project identifier that scopes generated
//! registration classes, plus the telemetry settings.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, default_log_filter, default_log_filter_string, default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "PROPSHIM")]
pub struct Config {
    /// Identifier of the project whose methods are read.
    #[serde(default)]
    pub project_name: Option<String>,
    /// `tracing` filter directives.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log events.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: None,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Returns the configured project identifier, if any.
    #[must_use]
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Returns the log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
