//! Library integration tests.

use pyfreeze::build::packager::packaging_command;
use pyfreeze::build::{
    BuildConfig, BuildPipeline, IconStatus, MockResponse, MockRunner, ENTRY_FILE, ICON_FILE,
};
use pyfreeze::ui::MockUI;
use pyfreeze::PyfreezeError;

#[test]
fn error_types_are_public() {
    let err = PyfreezeError::MissingInterpreter {
        interpreter: "python".into(),
    };
    assert!(err.to_string().contains("Python is not installed"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pyfreeze::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pyfreeze::cli::{Cli, Commands};

    let cli = Cli::parse_from(["pyfreeze", "build", "--dry-run"]);
    assert!(matches!(cli.command, Some(Commands::Build)));
    assert!(cli.dry_run);
}

#[test]
fn fixed_file_names() {
    assert_eq!(ENTRY_FILE, "main.py");
    assert_eq!(ICON_FILE, "app_icon.ico");
}

#[test]
fn packaging_command_is_public() {
    let config = BuildConfig::new("app").with_interpreter("py");
    let spec = packaging_command(&config, &IconStatus::Absent);
    assert_eq!(spec.program, "py");
    assert!(spec.has_flag("--onefile"));
    assert!(spec.has_flag("--windowed"));
}

#[test]
fn pipeline_runs_with_mock_runner() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(temp.path().join("main.py"), "print('hi')").unwrap();
    let config = BuildConfig::new(temp.path());
    let runner = MockRunner::new().respond("--version", MockResponse::Success("Python 3.9.7".into()));
    let mut ui = MockUI::new();

    let report = BuildPipeline::new(&config, &runner).run(&mut ui).unwrap();

    assert_eq!(runner.calls().len(), 3);
    assert_eq!(
        report.interpreter_version.and_then(|v| v.minor()),
        Some(9)
    );
}
