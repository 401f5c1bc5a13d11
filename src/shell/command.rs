//! External process execution.

use crate::error::{PyfreezeError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program and its arguments, run directly without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Program to run, resolved against PATH.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl ProcessSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Whether any argument equals `arg` or starts with `arg=`.
    pub fn has_flag(&self, arg: &str) -> bool {
        self.args
            .iter()
            .any(|a| a == arg || a.strip_prefix(arg).is_some_and(|rest| rest.starts_with('=')))
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing an external process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout followed by stderr, trimmed.
    pub fn combined_output(&self) -> String {
        let mut out = String::new();
        out.push_str(self.stdout.trim());
        let err = self.stderr.trim();
        if !err.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(err);
        }
        out
    }
}

/// Options for process execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Capture both streams.
    pub fn captured(cwd: Option<PathBuf>) -> Self {
        Self {
            cwd,
            capture_stdout: true,
            capture_stderr: true,
        }
    }

    /// Inherit both streams so the child writes straight to the console.
    pub fn inherited(cwd: Option<PathBuf>) -> Self {
        Self {
            cwd,
            ..Default::default()
        }
    }
}

/// Run a process to completion.
///
/// A non-zero exit is reported through [`CommandResult::success`]; only a
/// failure to start the process is an `Err`.
pub fn execute(spec: &ProcessSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Spawning: {}", spec);

    let output = cmd.output().map_err(|e| PyfreezeError::CommandSpawn {
        command: spec.to_string(),
        message: e.to_string(),
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    tracing::debug!(
        "Finished in {:?} with status {:?}: {}",
        duration,
        output.status.code(),
        spec
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> ProcessSpec {
        if cfg!(target_os = "windows") {
            ProcessSpec::new("cmd").args(["/C", script])
        } else {
            ProcessSpec::new("sh").args(["-c", script])
        }
    }

    #[test]
    fn spec_displays_as_command_line() {
        let spec = ProcessSpec::new("python").args(["-m", "pip", "install", "pyinstaller"]);
        assert_eq!(spec.to_string(), "python -m pip install pyinstaller");
    }

    #[test]
    fn spec_has_flag_matches_exact_and_valued() {
        let spec = ProcessSpec::new("python")
            .arg("--onefile")
            .arg("--icon=app_icon.ico");
        assert!(spec.has_flag("--onefile"));
        assert!(spec.has_flag("--icon"));
        assert!(!spec.has_flag("--one"));
        assert!(!spec.has_flag("--windowed"));
    }

    #[test]
    fn execute_successful_command() {
        let result = execute(&sh("echo hello"), &CommandOptions::captured(None)).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute(&sh("exit 3"), &CommandOptions::captured(None)).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_missing_program_is_spawn_error() {
        let spec = ProcessSpec::new("pyfreeze-definitely-not-a-real-program");
        let err = execute(&spec, &CommandOptions::captured(None)).unwrap_err();

        match err {
            PyfreezeError::CommandSpawn { command, .. } => {
                assert_eq!(command, "pyfreeze-definitely-not-a-real-program");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();

        let script = if cfg!(target_os = "windows") {
            "dir /b"
        } else {
            "ls"
        };
        let options = CommandOptions::captured(Some(temp.path().to_path_buf()));
        let result = execute(&sh(script), &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn inherited_streams_are_not_captured() {
        let result = execute(&sh("echo streamed"), &CommandOptions::inherited(None)).unwrap();

        assert!(result.success);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn combined_output_joins_streams() {
        let result = CommandResult::success(
            "out\n".to_string(),
            "Python 2.7.18\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nPython 2.7.18");

        let result = CommandResult::success(String::new(), "err\n".to_string(), Duration::ZERO);
        assert_eq!(result.combined_output(), "err");
    }
}
