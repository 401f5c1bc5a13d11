//! pyfreeze - Package a Python entry point into a standalone executable.
//!
//! pyfreeze checks for a Python interpreter, installs PyInstaller through
//! pip, verifies that `main.py` exists, then runs PyInstaller in one-file,
//! windowed mode, adding `app_icon.ico` when it is present.
//!
//! # Modules
//!
//! - [`build`] - Build stages and the pipeline that runs them
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use pyfreeze::build::{BuildConfig, IconStatus};
//! use pyfreeze::build::packager::packaging_command;
//!
//! let config = BuildConfig::new("my-app");
//! let command = packaging_command(&config, &IconStatus::Absent);
//! assert_eq!(
//!     command.to_string(),
//!     "python -m PyInstaller --onefile --windowed main.py"
//! );
//! ```

pub mod build;
pub mod cli;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{PyfreezeError, Result};
