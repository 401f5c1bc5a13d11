//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. With no subcommand the build
//! command runs.

pub mod build;
pub mod completions;
pub mod dispatcher;

pub use dispatcher::{resolve_project_root, Command, CommandDispatcher, CommandResult};
