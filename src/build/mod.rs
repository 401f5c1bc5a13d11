//! Building a standalone executable from a Python entry point.
//!
//! - [`config`] - Build settings and the fixed file names
//! - [`runner`] - Seam between the stages and real processes
//! - [`interpreter`] - Interpreter verification
//! - [`dependency`] - Packaging tool installation
//! - [`input`] - Entry file and icon checks
//! - [`packager`] - Packaging command construction and invocation
//! - [`pipeline`] - Runs the stages in order

pub mod config;
pub mod dependency;
pub mod input;
pub mod interpreter;
pub mod packager;
pub mod pipeline;
pub mod runner;

pub use config::{BuildConfig, ENTRY_FILE, ICON_FILE, OUTPUT_DIR};
pub use input::IconStatus;
pub use interpreter::InterpreterVersion;
pub use pipeline::{BuildPipeline, BuildReport};
pub use runner::{MockResponse, MockRunner, ProcessRunner, SystemRunner};
