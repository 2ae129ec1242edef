//! Short-lived helper processes (notification tools).
//!
//! Runs a program to completion with captured output and an optional
//! timeout, so a hung notification tool cannot keep the timer process alive.

use anyhow::{Context, Result};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Configuration options for running a process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// The program to execute.
    pub program: String,

    /// Arguments to pass to the program.
    pub args: Vec<String>,

    /// Timeout for the entire process execution.
    pub timeout: Option<Duration>,
}

impl ProcessOptions {
    /// Create new options for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set a timeout for the process.
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }
}

/// Result from a completed process.
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status, `None` when the process was killed on timeout.
    pub status: Option<ExitStatus>,

    /// Captured stderr.
    pub stderr: String,

    /// Whether the process was killed due to timeout.
    pub timed_out: bool,
}

impl ProcessResult {
    /// Check if the process exited successfully.
    pub fn success(&self) -> bool {
        !self.timed_out && self.status.is_some_and(|s| s.success())
    }

    /// Get the exit code, if available.
    pub fn code(&self) -> Option<i32> {
        self.status.and_then(|s| s.code())
    }
}

/// Run a process to completion, discarding stdout and capturing stderr.
///
/// Fails only when the program cannot be started; a nonzero exit or a
/// timeout is reported through [`ProcessResult`].
pub async fn spawn_process(options: ProcessOptions) -> Result<ProcessResult> {
    let mut cmd = Command::new(&options.program);
    cmd.args(&options.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd
        .spawn()
        .with_context(|| format!("Failed to spawn process: {}", options.program))?;

    let output = child.wait_with_output();
    let output = match options.timeout {
        Some(duration) => match timeout(duration, output).await {
            Ok(output) => output,
            Err(_) => {
                return Ok(ProcessResult {
                    status: None,
                    stderr: String::new(),
                    timed_out: true,
                })
            }
        },
        None => output.await,
    }
    .context("Failed to wait for process to exit")?;

    Ok(ProcessResult {
        status: Some(output.status),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        timed_out: false,
    })
}
