//! Error types for pyfreeze operations.
//!
//! This module defines [`PyfreezeError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each build stage that can abort the run has its own variant
//! - Use `anyhow::Error` (via `PyfreezeError::Other`) for unexpected errors
//! - [`PyfreezeError::exit_code`] decides the process exit status

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pyfreeze operations.
#[derive(Debug, Error)]
pub enum PyfreezeError {
    /// The interpreter could not be run or reported a failure.
    #[error("Python is not installed or not in PATH. Please install Python first.")]
    MissingInterpreter { interpreter: String },

    /// Installing the packaging tool through pip failed.
    #[error("Failed to install {package}: {message}")]
    DependencyInstallFailure { package: String, message: String },

    /// The directory to build in does not exist.
    #[error("Project directory not found: {}", path.display())]
    MissingProjectDir { path: PathBuf },

    /// The entry-point script is missing from the project directory.
    #[error("{file} not found. Please make sure your main Python file is named \"{file}\".")]
    MissingEntryFile { file: String, path: PathBuf },

    /// The packaging tool ran and failed.
    #[error("Command failed: {command}")]
    PackagingFailure { command: String, code: Option<i32> },

    /// A child process could not be started at all.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PyfreezeError {
    /// Process exit status to report for this error.
    ///
    /// Packaging failures pass the tool's own status through; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PackagingFailure {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for pyfreeze operations.
pub type Result<T> = std::result::Result<T, PyfreezeError>;
