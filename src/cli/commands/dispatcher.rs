//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands
//! - [`resolve_project_root`] for picking the directory to build in

use std::path::{Path, PathBuf};

use crate::build::BuildConfig;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use. Failures travel as `Err`, so this is 0 today.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Directory to build in: `--project` when given, otherwise the current
/// directory.
///
/// `current_dir` is only called when no project was given. Its failure
/// (for example a deleted working directory) is reported, not replaced by
/// an empty path.
pub fn resolve_project_root<F>(project: Option<PathBuf>, current_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    match project {
        Some(dir) => Ok(dir),
        None => Ok(current_dir()?),
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build settings derived from the global flags.
    pub fn build_config(&self, cli: &Cli) -> BuildConfig {
        BuildConfig::new(&self.project_root)
            .with_interpreter(cli.python.clone())
            .with_dry_run(cli.dry_run)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Build) | None => {
                let cmd = super::build::BuildCommand::new(self.build_config(cli));
                cmd.execute(ui)
            }
        }
    }
}
