//! Build command.
//!
//! The `pyfreeze build` command (also the default) runs the build pipeline
//! against real processes in the project directory.

use crate::build::{BuildConfig, BuildPipeline, SystemRunner};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    config: BuildConfig,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Get the build settings.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = SystemRunner::new(self.config.project_dir());
        let report = BuildPipeline::new(&self.config, &runner).run(ui)?;
        tracing::debug!("Build finished: {}", report.command);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;

    #[test]
    fn dry_run_build_succeeds_without_python() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("main.py"), "print('hi')").unwrap();
        let config = BuildConfig::new(temp.path())
            .with_interpreter("pyfreeze-no-such-python")
            .with_dry_run(true);
        let mut ui = MockUI::new();

        let result = BuildCommand::new(config).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("Would run: pyfreeze-no-such-python --version"));
    }

    #[test]
    fn missing_interpreter_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("main.py"), "print('hi')").unwrap();
        let config = BuildConfig::new(temp.path()).with_interpreter("pyfreeze-no-such-python");
        let mut ui = MockUI::new();

        let err = BuildCommand::new(config).execute(&mut ui).unwrap_err();

        assert!(err.to_string().contains("Python is not installed"));
    }

    #[test]
    fn config_accessor() {
        let cmd = BuildCommand::new(BuildConfig::new("/p"));
        assert_eq!(cmd.config().interpreter, "python");
    }
}
