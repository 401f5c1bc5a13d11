//! Build configuration.
//!
//! The file names and tool names are fixed by convention; only the
//! interpreter, project directory and dry-run switch can be changed.

use std::path::{Path, PathBuf};

/// Interpreter used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Entry-point script packaged into the executable.
pub const ENTRY_FILE: &str = "main.py";

/// Optional icon embedded into the executable.
pub const ICON_FILE: &str = "app_icon.ico";

/// Name of the packaging tool as installed by pip.
pub const PACKAGER_PACKAGE: &str = "pyinstaller";

/// Module name of the packaging tool, run via `python -m`.
pub const PACKAGER_MODULE: &str = "PyInstaller";

/// Display name of the packaging tool.
pub const PACKAGER_NAME: &str = "PyInstaller";

/// Directory the packaging tool writes the executable to.
pub const OUTPUT_DIR: &str = "dist";

/// Settings for a single build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Interpreter program, looked up on PATH unless it is a path.
    pub interpreter: String,

    /// Directory that holds the entry file and receives the output.
    pub project_dir: PathBuf,

    /// Print commands instead of running them.
    pub dry_run: bool,
}

impl BuildConfig {
    /// Create a config for `project_dir` with default settings.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            project_dir: project_dir.into(),
            dry_run: false,
        }
    }

    /// Use a different interpreter.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Toggle dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Absolute location of the entry file.
    pub fn entry_path(&self) -> PathBuf {
        self.project_dir.join(ENTRY_FILE)
    }

    /// Absolute location of the icon file.
    pub fn icon_path(&self) -> PathBuf {
        self.project_dir.join(ICON_FILE)
    }

    /// Absolute location of the output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.project_dir.join(OUTPUT_DIR)
    }
}
