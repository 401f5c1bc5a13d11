//! Process runner abstraction.
//!
//! Build stages talk to external tools through [`ProcessRunner`] so they can
//! be exercised against [`MockRunner`] without a Python installation.

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PyfreezeError, Result};
use crate::shell::{execute, CommandOptions, CommandResult, ProcessSpec};

/// Runs external processes on behalf of the build stages.
pub trait ProcessRunner {
    /// Run to completion, capturing stdout and stderr.
    fn capture(&self, spec: &ProcessSpec) -> Result<CommandResult>;

    /// Run to completion with the parent's standard streams.
    fn run_inherited(&self, spec: &ProcessSpec) -> Result<CommandResult>;
}

/// Runs real processes in a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    /// Create a runner whose children start in `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl ProcessRunner for SystemRunner {
    fn capture(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        execute(spec, &CommandOptions::captured(Some(self.cwd.clone())))
    }

    fn run_inherited(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        execute(spec, &CommandOptions::inherited(Some(self.cwd.clone())))
    }
}

/// Scripted outcome for a [`MockRunner`] call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Exit 0 with the given stdout.
    Success(String),
    /// Exit with the given code and stderr.
    Failure(i32, String),
    /// The process could not be started.
    SpawnError(String),
}

/// Records every call and answers from a script.
///
/// Responses are matched by substring against the rendered command line;
/// the first match wins and unmatched calls succeed with no output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Vec<(String, MockResponse)>,
    calls: RefCell<Vec<ProcessSpec>>,
}

impl MockRunner {
    /// Create a runner where every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls whose command line contains `pattern` with `response`.
    pub fn respond(mut self, pattern: &str, response: MockResponse) -> Self {
        self.responses.push((pattern.to_string(), response));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ProcessSpec> {
        self.calls.borrow().clone()
    }

    fn answer(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        self.calls.borrow_mut().push(spec.clone());

        let line = spec.to_string();
        let response = self
            .responses
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| MockResponse::Success(String::new()));

        match response {
            MockResponse::Success(stdout) => {
                Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
            }
            MockResponse::Failure(code, stderr) => Ok(CommandResult::failure(
                Some(code),
                String::new(),
                stderr,
                Duration::ZERO,
            )),
            MockResponse::SpawnError(message) => Err(PyfreezeError::CommandSpawn {
                command: line,
                message,
            }),
        }
    }
}

impl ProcessRunner for MockRunner {
    fn capture(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        self.answer(spec)
    }

    fn run_inherited(&self, spec: &ProcessSpec) -> Result<CommandResult> {
        self.answer(spec)
    }
}
