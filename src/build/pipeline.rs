//! Build pipeline.
//!
//! Runs the four stages strictly in order; the first failure ends the run:
//!
//! 1. verify the interpreter
//! 2. install the packaging tool
//! 3. validate the entry file
//! 4. package, with or without the icon

use std::path::PathBuf;

use super::config::{BuildConfig, OUTPUT_DIR};
use super::dependency::{install_command, install_packager};
use super::input::{detect_icon, validate_entry, validate_project_dir, IconStatus};
use super::interpreter::{verify_interpreter, version_query, InterpreterVersion};
use super::packager::{announce_build, packaging_command, run_packager};
use super::runner::ProcessRunner;
use crate::error::Result;
use crate::shell::ProcessSpec;
use crate::ui::UserInterface;

/// What a pipeline run did.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Interpreter version, absent in dry-run mode.
    pub interpreter_version: Option<InterpreterVersion>,

    /// Whether the icon was used.
    pub icon: IconStatus,

    /// The packaging command that ran (or would have run).
    pub command: ProcessSpec,

    /// Where the executable is expected.
    pub output_dir: PathBuf,

    /// Whether commands were only printed.
    pub dry_run: bool,
}

/// Sequential build orchestrator.
pub struct BuildPipeline<'a> {
    config: &'a BuildConfig,
    runner: &'a dyn ProcessRunner,
}

impl<'a> BuildPipeline<'a> {
    /// Create a pipeline over `config` using `runner` for external tools.
    pub fn new(config: &'a BuildConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self { config, runner }
    }

    /// Run every stage.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<BuildReport> {
        let config = self.config;
        let dry_run = config.dry_run;

        ui.show_header("Starting executable build process...");
        if dry_run {
            ui.message("Running in dry-run mode; no commands will be executed.");
        }
        tracing::debug!(
            "Building in {} with interpreter '{}'",
            config.project_dir().display(),
            config.interpreter
        );
        validate_project_dir(config)?;

        let interpreter_version = if dry_run {
            self.preview(&version_query(config), ui);
            None
        } else {
            self.show_command(&version_query(config), ui);
            Some(verify_interpreter(config, self.runner, ui)?)
        };

        if dry_run {
            self.preview(&install_command(config), ui);
        } else {
            self.show_command(&install_command(config), ui);
            install_packager(config, self.runner, ui)?;
        }

        validate_entry(config)?;
        let icon = detect_icon(config);

        let command = if dry_run {
            let command = packaging_command(config, &icon);
            announce_build(&icon, ui);
            self.preview(&command, ui);
            command
        } else {
            self.show_command(&packaging_command(config, &icon), ui);
            run_packager(config, &icon, self.runner, ui)?
        };

        if dry_run {
            ui.success("Dry run complete.");
        } else {
            ui.success("Build process completed.");
            ui.message(&format!(
                "Your executable should be available in the \"{}\" folder.",
                OUTPUT_DIR
            ));
        }

        Ok(BuildReport {
            interpreter_version,
            icon,
            command,
            output_dir: config.output_dir(),
            dry_run,
        })
    }

    fn preview(&self, spec: &ProcessSpec, ui: &mut dyn UserInterface) {
        ui.message(&format!("Would run: {}", spec));
    }

    fn show_command(&self, spec: &ProcessSpec, ui: &mut dyn UserInterface) {
        if ui.output_mode().shows_details() {
            ui.message(&format!("$ {}", spec));
        }
    }
}
