//! Interpreter verification.
//!
//! Runs `<python> --version` and aborts the build when the interpreter
//! cannot be started or reports a failure.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::config::BuildConfig;
use super::runner::ProcessRunner;
use crate::error::{PyfreezeError, Result};
use crate::shell::ProcessSpec;
use crate::ui::UserInterface;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)python\s+(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// Version reported by the interpreter.
///
/// The raw first line is always kept; the numeric parts are filled in
/// when the line looks like `Python X.Y[.Z]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterVersion {
    raw: String,
    parts: Option<(u32, u32, Option<u32>)>,
}

impl InterpreterVersion {
    /// Parse the combined output of a version query.
    pub fn parse(output: &str) -> Self {
        let raw = output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("unknown version")
            .to_string();

        let parts = VERSION_REGEX.captures(&raw).and_then(|caps| {
            let major = caps.get(1)?.as_str().parse().ok()?;
            let minor = caps.get(2)?.as_str().parse().ok()?;
            let patch = caps.get(3).and_then(|m| m.as_str().parse().ok());
            Some((major, minor, patch))
        });

        Self { raw, parts }
    }

    /// The version line as printed by the interpreter.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Major version, if the line could be parsed.
    pub fn major(&self) -> Option<u32> {
        self.parts.map(|(major, _, _)| major)
    }

    /// Minor version, if the line could be parsed.
    pub fn minor(&self) -> Option<u32> {
        self.parts.map(|(_, minor, _)| minor)
    }

    /// Patch version, if present.
    pub fn patch(&self) -> Option<u32> {
        self.parts.and_then(|(_, _, patch)| patch)
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Command that asks the interpreter for its version.
pub fn version_query(config: &BuildConfig) -> ProcessSpec {
    ProcessSpec::new(&config.interpreter).arg("--version")
}

/// Confirm the interpreter runs and report its version.
pub fn verify_interpreter(
    config: &BuildConfig,
    runner: &dyn ProcessRunner,
    ui: &mut dyn UserInterface,
) -> Result<InterpreterVersion> {
    let spec = version_query(config);
    let mut spinner = ui.start_spinner("Checking Python installation...");

    let result = match runner.capture(&spec) {
        Ok(result) if result.success => result,
        Ok(result) => {
            tracing::debug!(
                "'{}' exited with {:?}: {}",
                spec,
                result.exit_code,
                result.combined_output()
            );
            spinner.finish_error("Python check failed");
            return Err(PyfreezeError::MissingInterpreter {
                interpreter: config.interpreter.clone(),
            });
        }
        Err(e) => {
            tracing::debug!("Interpreter check failed: {}", e);
            spinner.finish_error("Python check failed");
            return Err(PyfreezeError::MissingInterpreter {
                interpreter: config.interpreter.clone(),
            });
        }
    };

    let version = InterpreterVersion::parse(&result.combined_output());
    tracing::debug!(
        "Interpreter '{}' is {} (major {:?}, minor {:?})",
        config.interpreter,
        version,
        version.major(),
        version.minor()
    );
    spinner.finish_success(&format!("Python detected: {}", version));

    Ok(version)
}
