//! Git-specific error types.
//!
//! This module defines error types for git invocations:
//! - [`GitError`] - Failures to start or complete an external command

use thiserror::Error;

/// Errors raised while running an external command.
#[derive(Error, Debug)]
pub enum GitError {
    /// The process could not be started at all.
    #[error("could not start command: {source}")]
    Spawn {
        /// The invocation, as echoed in verbose mode.
        invocation: String,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The process ran with inherited streams and exited unsuccessfully.
    #[error("command failed: {status}")]
    CommandFailed {
        /// The invocation, as echoed in verbose mode.
        invocation: String,
        /// Exit status description.
        status: String,
    },

    /// A captured-output query exited unsuccessfully.
    #[error("{output}\n`{invocation}` failed: {status}")]
    QueryFailed {
        /// The invocation, as echoed in verbose mode.
        invocation: String,
        /// Combined stdout and stderr of the query.
        output: String,
        /// Exit status description.
        status: String,
    },
}

impl GitError {
    /// Returns the text of the invocation that failed.
    #[must_use]
    pub fn invocation(&self) -> &str {
        match self {
            Self::Spawn { invocation, .. }
            | Self::CommandFailed { invocation, .. }
            | Self::QueryFailed { invocation, .. } => invocation,
        }
    }

    /// Checks if this error came from a captured-output query.
    #[must_use]
    pub const fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailed { .. })
    }
}
