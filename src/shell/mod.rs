//! External process execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, ProcessSpec};
pub use platform::is_ci;
