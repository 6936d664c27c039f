//! Configuration loading helpers for the CLI.
//!
//! Leading configuration flags are split off and handed to `ortho_config`;
//! everything from the first other token onwards is parsed as the command.

use std::ffi::{OsStr, OsString};

use ortho_config::OrthoConfig as _;
use propshim_config::Config;
use propshim_reader::ProjectContext;

use crate::AppError;

/// CLI flags recognised by the configuration loader.
///
/// Keep in sync with the fields of [`Config`].
pub(crate) const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--project-name",
    "--log-filter",
    "--log-format",
];

pub(crate) trait ConfigLoader {
    /// Loads configuration for the CLI.
    ///
    /// # Flag Ordering
    ///
    /// Configuration flags must appear before the input argument. Flags
    /// appearing later are treated as command arguments.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    Skip,
}

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

impl OrthoConfigLoader {
    fn process_config_flag(argument: &OsStr) -> FlagAction {
        let argument_text = argument.to_string_lossy();
        if !argument_text.starts_with("--") {
            return FlagAction::Skip;
        }

        let (flag, has_inline_value) = match argument_text.split_once('=') {
            Some((name, _)) => (name, true),
            None => (&*argument_text, false),
        };

        if CONFIG_CLI_FLAGS.contains(&flag) {
            return FlagAction::Include {
                needs_value: !has_inline_value,
            };
        }

        FlagAction::Skip
    }
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_start: usize,
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_start: 0,
        };
    };

    let mut config_arguments = vec![program.clone()];
    let mut awaiting_value = false;

    for argument in rest {
        if awaiting_value {
            config_arguments.push(argument.clone());
            awaiting_value = false;
            continue;
        }
        match OrthoConfigLoader::process_config_flag(argument.as_os_str()) {
            FlagAction::Include { needs_value } => {
                config_arguments.push(argument.clone());
                awaiting_value = needs_value;
            }
            FlagAction::Skip => break,
        }
    }

    let command_start = config_arguments.len();
    ConfigArgumentSplit {
        config_arguments,
        command_start,
    }
}

/// Program name followed by the arguments after the configuration flags.
pub(crate) fn command_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    args.first()
        .into_iter()
        .chain(args.iter().skip(split.command_start))
        .cloned()
        .collect()
}

/// Validated project context; `None` when the identifier is missing or empty.
pub(crate) fn project_context(config: &Config) -> Option<ProjectContext> {
    ProjectContext::from_option(config.project_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn os_args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[rstest]
    #[case("--log-filter=debug", FlagAction::Include { needs_value: false })]
    #[case("--project-name", FlagAction::Include { needs_value: true })]
    #[case("input.json", FlagAction::Skip)]
    #[case("--pretty", FlagAction::Skip)]
    #[case("-", FlagAction::Skip)]
    fn classifies_flags(#[case] argument: &str, #[case] expected: FlagAction) {
        assert_eq!(
            OrthoConfigLoader::process_config_flag(OsStr::new(argument)),
            expected
        );
    }

    #[test]
    fn splits_leading_configuration_flags() {
        let args = os_args(&[
            "propshim",
            "--project-name",
            "core",
            "--log-format=compact",
            "input.json",
            "--log-filter",
            "debug",
        ]);
        let split = split_config_arguments(&args);
        assert_eq!(
            split.config_arguments,
            os_args(&["propshim", "--project-name", "core", "--log-format=compact"])
        );
        assert_eq!(split.command_start, 4);
        assert_eq!(
            command_arguments(&args, &split),
            os_args(&["propshim", "input.json", "--log-filter", "debug"])
        );
    }

    #[test]
    fn dangling_flag_consumes_nothing_further() {
        let args = os_args(&["propshim", "--project-name"]);
        let split = split_config_arguments(&args);
        assert_eq!(split.command_start, 2);
        assert_eq!(command_arguments(&args, &split), os_args(&["propshim"]));
    }

    #[rstest]
    #[case(Some("core-runtime"), Some("CoreRuntime"))]
    #[case(Some("-"), Some(""))]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn project_context_requires_an_identifier(
        #[case] project_name: Option<&str>,
        #[case] suffix: Option<&str>,
    ) {
        let config = Config {
            project_name: project_name.map(str::to_owned),
            ..Config::default()
        };
        let context = project_context(&config);
        assert_eq!(context.as_ref().map(ProjectContext::class_suffix), suffix);
    }

    #[test]
    fn ortho_loader_reads_command_line_flags() {
        let config = OrthoConfigLoader
            .load(&os_args(&["propshim", "--project-name", "core-runtime"]))
            .expect("configuration loads");
        assert_eq!(config.project_name(), Some("core-runtime"));
    }

    #[test]
    fn empty_arguments_split_cleanly() {
        let split = split_config_arguments(&[]);
        assert!(split.config_arguments.is_empty());
        assert_eq!(split.command_start, 0);
    }
}
