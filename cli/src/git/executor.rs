//! External process execution for review.
//!
//! This module provides a trait-based abstraction over running git:
//! - [`Executor`] - Trait for running invocations (enables mocking in tests)
//! - [`ProcessExecutor`] - Implementation using `std::process::Command`

use std::process::{Command, Stdio};

use crate::error::Result;
use crate::git::error::GitError;
use crate::git::types::Invocation;

/// Trait for running external commands (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
pub trait Executor {
    /// Runs an invocation with the caller's standard streams attached and
    /// waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or exits
    /// unsuccessfully.
    fn execute(&self, invocation: &Invocation) -> Result<()>;

    /// Runs an invocation and returns its combined stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the captured output if the process cannot
    /// be started or exits unsuccessfully.
    fn capture(&self, invocation: &Invocation) -> Result<String>;
}

/// Runs invocations as child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor {
    verbose: bool,
}

impl ProcessExecutor {
    /// Creates an executor. In verbose mode every [`Executor::execute`]
    /// call is echoed to stderr before it runs.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn spawn_error(invocation: &Invocation, source: std::io::Error) -> GitError {
        GitError::Spawn {
            invocation: invocation.to_string(),
            source,
        }
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<()> {
        if self.verbose {
            eprintln!("{invocation}");
        }

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommandFailed {
                invocation: invocation.to_string(),
                status: status.to_string(),
            }
            .into())
        }
    }

    fn capture(&self, invocation: &Invocation) -> Result<String> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(combined)
        } else {
            Err(GitError::QueryFailed {
                invocation: invocation.to_string(),
                output: combined,
                status: output.status.to_string(),
            }
            .into())
        }
    }
}
