//! Unit tests for the CLI runtime.

use std::ffi::OsString;
use std::io::Cursor;
use std::process::ExitCode;

use camino::Utf8Path;
use clap::Parser as _;
use rstest::{fixture, rstest};

use propshim_config::Config;

use super::{AppError, BatchReport, Cli, ConfigLoader, IoStreams, run_with_loader};


pub(super) const BATCH: &str = r#"{
  "methods": [
    {
      "method": {
        "owner": "org.example.Task",
        "name": "getName",
        "returnType": "org.gradle.api.provider.Property<java.lang.String>",
        "location": { "file": "Task.java", "line": 12, "column": 5 }
      },
      "upgradedProperty": {}
    },
    {
      "method": {
        "owner": "org.example.Task",
        "name": "getDescription",
        "returnType": "java.lang.String"
      }
    }
  ]
}"#;

pub(super) const BROKEN_BATCH: &str = r#"{
  "methods": [
    {
      "method": {
        "owner": "org.example.Task",
        "name": "getTimeout",
        "returnType": "org.gradle.api.provider.Provider<java.time.Duration>",
        "location": { "file": "Task.java", "line": 30, "column": 5 }
      },
      "upgradedProperty": { "fluentSetter": true }
    }
  ]
}"#;

pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

pub(super) struct Captured {
    pub(super) exit: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

pub(super) fn run_captured(config: Config, args: &[&str], stdin: &str) -> Captured {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let loader = StaticConfigLoader::new(config);
    let arguments = std::iter::once("propshim")
        .chain(args.iter().copied())
        .map(OsString::from);
    let io = IoStreams {
        stdin: &mut input,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };
    let exit = run_with_loader(arguments, io, &loader);
    Captured {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

#[fixture]
fn project_config() -> Config {
    Config {
        project_name: Some(String::from("core-runtime")),
        ..Config::default()
    }
}

#[rstest]
fn reads_batch_from_stdin(project_config: Config) {
    let captured = run_captured(project_config, &["-"], BATCH);
    assert_eq!(captured.exit, ExitCode::SUCCESS);
    assert_eq!(captured.stderr, "");
    let report: BatchReport = serde_json::from_str(&captured.stdout).expect("report json");
    assert_eq!(report.project.as_deref(), Some("core-runtime"));
    let [outcome] = report.outcomes.as_slice() else {
        panic!("expected one outcome for the single marked method");
    };
    assert_eq!(outcome.method(), "org.example.Task.getName()");
    assert_eq!(outcome.requests().map(<[_]>::len), Some(3));
}

#[rstest]
fn failures_are_reported_and_echoed(project_config: Config) {
    let captured = run_captured(project_config, &["-"], BROKEN_BATCH);
    assert_eq!(captured.exit, ExitCode::FAILURE);
    insta::assert_snapshot!(captured.stderr.trim_end(), @"Task.java:30:5: E_PROPSHIM_UNRESOLVED_ORIGINAL_TYPE: Cannot extract original type for method 'org.example.Task.getTimeout(): org.gradle.api.provider.Provider<java.time.Duration>'. Use explicit @UpgradedProperty#originalType instead.");
    let report: BatchReport = serde_json::from_str(&captured.stdout).expect("report json");
    assert!(report.has_failures());
}

#[test]
fn missing_project_fails_every_marked_method() {
    let captured = run_captured(Config::default(), &["-"], BATCH);
    assert_eq!(captured.exit, ExitCode::FAILURE);
    assert!(captured.stderr.contains("E_PROPSHIM_MISSING_PROJECT_CONTEXT"));
    let report: BatchReport = serde_json::from_str(&captured.stdout).expect("report json");
    assert_eq!(report.project, None);
    assert_eq!(report.outcomes.len(), 1);
}

#[rstest]
fn pretty_output_spans_lines(project_config: Config) {
    let captured = run_captured(project_config, &["--pretty", "-"], BATCH);
    assert_eq!(captured.exit, ExitCode::SUCCESS);
    assert!(captured.stdout.starts_with("{\n  \"project\": \"core-runtime\""));
}

#[rstest]
fn writes_report_to_output_file(project_config: Config) {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("report.json");
    let output_arg = output.to_str().expect("utf8 path");
    let captured = run_captured(project_config, &["--output", output_arg, "-"], BATCH);
    assert_eq!(captured.exit, ExitCode::SUCCESS);
    assert_eq!(captured.stdout, "");
    let written = std::fs::read_to_string(&output).expect("report file");
    let report: BatchReport = serde_json::from_str(&written).expect("report json");
    assert_eq!(report.outcomes.len(), 1);
}

#[rstest]
fn malformed_input_is_a_usage_failure(project_config: Config) {
    let captured = run_captured(project_config, &["-"], "{ \"methods\": [ { } ] }");
    assert_eq!(captured.exit, ExitCode::FAILURE);
    assert!(captured.stderr.starts_with("failed to parse method batch"));
    assert_eq!(captured.stdout, "");
}

#[rstest]
fn unreadable_input_names_the_path(project_config: Config) {
    let captured = run_captured(project_config, &["/nonexistent/batch.json"], "");
    assert_eq!(captured.exit, ExitCode::FAILURE);
    assert!(captured.stderr.contains("/nonexistent/batch.json"));
}

#[rstest]
fn missing_input_argument_fails(project_config: Config) {
    let captured = run_captured(project_config, &[], "");
    assert_eq!(captured.exit, ExitCode::FAILURE);
    assert!(captured.stderr.contains("<INPUT>"));
}

#[rstest]
fn help_is_written_to_stdout(project_config: Config) {
    let captured = run_captured(project_config, &["--help"], "");
    assert_eq!(captured.exit, ExitCode::SUCCESS);
    assert!(captured.stdout.contains("Usage: propshim"));
}

#[rstest]
fn empty_batch_succeeds(project_config: Config) {
    let captured = run_captured(project_config, &["-"], "{}");
    assert_eq!(captured.exit, ExitCode::SUCCESS);
    let report: BatchReport = serde_json::from_str(&captured.stdout).expect("report json");
    assert!(report.outcomes.is_empty());
}

#[rstest]
#[case::stdin_marker("-", true)]
#[case::relative_path("batch.json", false)]
#[case::nested_path("build/tmp/batch.json", false)]
fn input_is_a_utf8_path(#[case] input: &str, #[case] reads_stdin: bool) {
    let cli = Cli::try_parse_from(["propshim", input]).expect("valid arguments");
    assert_eq!(cli.input.as_path(), Utf8Path::new(input));
    assert_eq!(cli.reads_stdin(), reads_stdin);
}

#[rstest]
fn over_deep_type_names_reject_the_batch_cleanly(project_config: Config) {
    let batch = format!(
        r#"{{ "methods": [ {{ "method": {{ "owner": "org.example.Task", "name": "getFlags", "returnType": "int{}" }}, "upgradedProperty": {{}} }} ] }}"#,
        "[]".repeat(200_000)
    );
    let captured = run_captured(project_config, &["-"], &batch);
    assert_eq!(captured.exit, ExitCode::FAILURE);
    assert!(captured.stderr.starts_with("failed to parse method batch"));
    assert!(captured.stderr.contains("type name nests deeper than 255 levels"));
    assert_eq!(captured.stdout, "");
}
