//! Packaging tool invocation.

use super::config::{BuildConfig, ENTRY_FILE, ICON_FILE, PACKAGER_MODULE};
use super::input::IconStatus;
use super::runner::ProcessRunner;
use crate::error::{PyfreezeError, Result};
use crate::shell::ProcessSpec;
use crate::ui::UserInterface;

/// Bundle everything into one executable.
pub const ONEFILE_FLAG: &str = "--onefile";

/// Suppress the console window of the produced executable.
pub const WINDOWED_FLAG: &str = "--windowed";

/// Flag that takes the icon path as `--icon=<path>`.
pub const ICON_FLAG: &str = "--icon";

/// Build the packaging command line.
///
/// Paths are relative; the command runs inside the project directory.
pub fn packaging_command(config: &BuildConfig, icon: &IconStatus) -> ProcessSpec {
    let mut spec = ProcessSpec::new(&config.interpreter).args([
        "-m",
        PACKAGER_MODULE,
        ONEFILE_FLAG,
        WINDOWED_FLAG,
    ]);
    if icon.is_present() {
        spec = spec.arg(format!("{}={}", ICON_FLAG, ICON_FILE));
    }
    spec.arg(ENTRY_FILE)
}

/// Announce how the executable will be built.
pub fn announce_build(icon: &IconStatus, ui: &mut dyn UserInterface) {
    match icon {
        IconStatus::Absent => {
            ui.warning(&format!(
                "Icon file \"{}\" not found. The executable will use the default icon.",
                ICON_FILE
            ));
            ui.message("Building executable without custom icon...");
        }
        IconStatus::Present(_) => {
            ui.message(&format!(
                "Building executable with custom icon \"{}\"...",
                ICON_FILE
            ));
        }
    }
}

/// Run the packaging tool with the parent's console streams.
///
/// Its output is not interpreted; a failure carries only the command line
/// and the tool's exit status.
pub fn run_packager(
    config: &BuildConfig,
    icon: &IconStatus,
    runner: &dyn ProcessRunner,
    ui: &mut dyn UserInterface,
) -> Result<ProcessSpec> {
    let spec = packaging_command(config, icon);
    announce_build(icon, ui);

    let code = match runner.run_inherited(&spec) {
        Ok(result) if result.success => return Ok(spec),
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::warn!("Packaging tool could not start: {}", e);
            None
        }
    };

    Err(PyfreezeError::PackagingFailure {
        command: spec.to_string(),
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::runner::{MockResponse, MockRunner};
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn icon() -> IconStatus {
        IconStatus::Present(PathBuf::from("/project/app_icon.ico"))
    }

    #[test]
    fn command_without_icon_has_no_icon_flag() {
        let config = BuildConfig::new("/project");
        let spec = packaging_command(&config, &IconStatus::Absent);

        assert!(spec.has_flag(ONEFILE_FLAG));
        assert!(spec.has_flag(WINDOWED_FLAG));
        assert!(!spec.has_flag(ICON_FLAG));
        assert_eq!(
            spec.to_string(),
            "python -m PyInstaller --onefile --windowed main.py"
        );
    }

    #[test]
    fn command_with_icon_references_icon_file() {
        let config = BuildConfig::new("/project");
        let spec = packaging_command(&config, &icon());

        assert!(spec.has_flag(ONEFILE_FLAG));
        assert!(spec.has_flag(WINDOWED_FLAG));
        assert!(spec.args.contains(&"--icon=app_icon.ico".to_string()));
        assert_eq!(spec.args.last().map(String::as_str), Some("main.py"));
    }

    #[test]
    fn missing_icon_warns_with_file_name() {
        let mut ui = MockUI::new();
        announce_build(&IconStatus::Absent, &mut ui);

        assert!(ui.has_warning("app_icon.ico"));
        assert!(ui.has_message("without custom icon"));
    }

    #[test]
    fn present_icon_does_not_warn() {
        let mut ui = MockUI::new();
        announce_build(&icon(), &mut ui);

        assert!(ui.warnings().is_empty());
        assert!(ui.has_message("with custom icon \"app_icon.ico\""));
    }

    #[test]
    fn run_packager_returns_command_on_success() {
        let config = BuildConfig::new("/project");
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let spec = run_packager(&config, &IconStatus::Absent, &runner, &mut ui).unwrap();

        assert_eq!(runner.calls(), vec![spec]);
    }

    #[test]
    fn run_packager_failure_keeps_exit_code() {
        let config = BuildConfig::new("/project");
        let runner = MockRunner::new().respond(
            "PyInstaller",
            MockResponse::Failure(2, "usage error".into()),
        );
        let mut ui = MockUI::new();

        let err = run_packager(&config, &icon(), &runner, &mut ui).unwrap_err();

        match &err {
            PyfreezeError::PackagingFailure { command, code } => {
                assert!(command.contains("--icon=app_icon.ico"));
                assert_eq!(*code, Some(2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn run_packager_spawn_error_has_no_code() {
        let config = BuildConfig::new("/project");
        let runner =
            MockRunner::new().respond("PyInstaller", MockResponse::SpawnError("gone".into()));
        let mut ui = MockUI::new();

        let err = run_packager(&config, &IconStatus::Absent, &runner, &mut ui).unwrap_err();

        assert!(matches!(
            err,
            PyfreezeError::PackagingFailure { code: None, .. }
        ));
    }
}
