//! Entry file and icon checks.

use std::path::PathBuf;

use super::config::{BuildConfig, ENTRY_FILE, ICON_FILE};
use crate::error::{PyfreezeError, Result};

/// Whether the optional icon is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    /// The icon exists at the given path.
    Present(PathBuf),
    /// No icon; the packaging tool's default icon is used.
    Absent,
}

impl IconStatus {
    /// Check if the icon exists.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Confirm the project directory exists.
///
/// Every stage runs inside it, so a missing directory would otherwise show
/// up as a failure to start the interpreter.
pub fn validate_project_dir(config: &BuildConfig) -> Result<()> {
    let dir = config.project_dir();
    if dir.is_dir() {
        Ok(())
    } else {
        Err(PyfreezeError::MissingProjectDir {
            path: dir.to_path_buf(),
        })
    }
}

/// Confirm the entry file exists, returning its path.
pub fn validate_entry(config: &BuildConfig) -> Result<PathBuf> {
    let path = config.entry_path();
    if path.is_file() {
        tracing::debug!("Entry file found at {}", path.display());
        Ok(path)
    } else {
        Err(PyfreezeError::MissingEntryFile {
            file: ENTRY_FILE.to_string(),
            path,
        })
    }
}

/// Look for the optional icon file.
pub fn detect_icon(config: &BuildConfig) -> IconStatus {
    let path = config.icon_path();
    if path.is_file() {
        IconStatus::Present(path)
    } else {
        tracing::debug!("No {} in {}", ICON_FILE, config.project_dir().display());
        IconStatus::Absent
    }
}
