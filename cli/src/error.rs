//! Error types and result aliases for review.
//!
//! Every error is terminal: `main` reports it on stderr and exits 1.
//! Usage errors never reach this type, the argument parser exits 2 for
//! them itself.

use std::path::PathBuf;

use thiserror::Error;

use crate::git::GitError;

/// Main error type for review operations.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// `create` or `commit` without anything staged.
    #[error("No staged changes. Did you forget to \"git add\" your files?")]
    NoStagedChanges,

    /// A command that must start from the mainline was run elsewhere.
    #[error("You must run {command} from the {mainline} branch. (\"git checkout {mainline}\".)")]
    NotOnMainline {
        /// The command that was refused.
        command: &'static str,
        /// Name of the mainline branch.
        mainline: String,
    },

    /// A command that rewrites or publishes the feature commit was run on
    /// the mainline.
    #[error("Can't {action} {mainline} branch.")]
    OnMainline {
        /// What was refused, e.g. "commit to".
        action: &'static str,
        /// Name of the mainline branch.
        mainline: String,
    },

    /// Command exists in the vocabulary but has no implementation.
    #[error("{0}: not implemented")]
    NotImplemented(&'static str),

    /// No `.git` marker between the working directory and the filesystem root.
    #[error("Git root not found. Run from within the Git tree please.")]
    RootNotFound,

    /// Working directory could not be determined.
    #[error("could not get current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Working directory could not be changed to the repository root.
    #[error("could not chdir to {}: {source}", path.display())]
    ChangeDir {
        /// Target directory.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The hook path exists in some unreadable form.
    #[error("checking for hook file {}: {source}", path.display())]
    HookCheck {
        /// Hook path.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The hook was missing and could not be written.
    #[error("writing hook file {}: {source}", path.display())]
    HookWrite {
        /// Hook path.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to read configuration file {}: {message}", path.display())]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A repository state query failed. The captured output comes first.
    #[error("{output}{context}: {reason}")]
    Inspection {
        /// What was being checked, e.g. "checking current branch".
        context: &'static str,
        /// Combined output of the query, newline terminated when non-empty.
        output: String,
        /// Why the query failed.
        reason: String,
    },

    /// `create` failed to commit and the new branch was removed again.
    #[error("Commit to branch '{branch}' failed ({source}). Switched back to {mainline} and deleted the branch.")]
    CreateRolledBack {
        /// Branch that was created and deleted.
        branch: String,
        /// Branch checked out again.
        mainline: String,
        /// The failed commit.
        source: Box<ReviewError>,
    },

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git invocation error.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl ReviewError {
    /// Checks if this error is a refused workflow precondition, raised
    /// before any git state was changed.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoStagedChanges | Self::NotOnMainline { .. } | Self::OnMainline { .. }
        )
    }

    /// Returns the invocation to print for context when it was not already
    /// echoed in verbose mode.
    ///
    /// Queries report their own context, so only pass-through invocations
    /// are returned.
    #[must_use]
    pub fn failed_invocation(&self) -> Option<&str> {
        match self {
            Self::Git(err) if !err.is_query_failure() => Some(err.invocation()),
            _ => None,
        }
    }
}

/// Result type alias using [`ReviewError`].
pub type Result<T> = std::result::Result<T, ReviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_messages_name_the_fix() {
        assert!(ReviewError::NoStagedChanges.to_string().contains("git add"));

        let not_on = ReviewError::NotOnMainline {
            command: "create",
            mainline: "master".to_string(),
        };
        assert_eq!(
            not_on.to_string(),
            "You must run create from the master branch. (\"git checkout master\".)"
        );

        let on = ReviewError::OnMainline {
            action: "upload from",
            mainline: "master".to_string(),
        };
        assert_eq!(on.to_string(), "Can't upload from master branch.");
    }

    #[test]
    fn is_precondition_identifies_workflow_refusals() {
        assert!(ReviewError::NoStagedChanges.is_precondition());
        assert!(ReviewError::OnMainline {
            action: "commit to",
            mainline: "master".to_string()
        }
        .is_precondition());

        assert!(!ReviewError::RootNotFound.is_precondition());
        assert!(!ReviewError::NotImplemented("pending").is_precondition());
    }

    #[test]
    fn failed_invocation_only_for_pass_through_commands() {
        let failed: ReviewError = GitError::CommandFailed {
            invocation: "git rebase origin/master".to_string(),
            status: "exit status: 1".to_string(),
        }
        .into();
        assert_eq!(failed.failed_invocation(), Some("git rebase origin/master"));

        let query: ReviewError = GitError::QueryFailed {
            invocation: "git branch".to_string(),
            output: String::new(),
            status: "exit status: 128".to_string(),
        }
        .into();
        assert_eq!(query.failed_invocation(), None);

        assert_eq!(ReviewError::NoStagedChanges.failed_invocation(), None);
    }

    #[test]
    fn rolled_back_create_names_branch_and_mainline() {
        let err = ReviewError::CreateRolledBack {
            branch: "fix-typo".to_string(),
            mainline: "master".to_string(),
            source: Box::new(
                GitError::CommandFailed {
                    invocation: "git commit -q".to_string(),
                    status: "exit status: 1".to_string(),
                }
                .into(),
            ),
        };
        let msg = err.to_string();
        assert!(msg.contains("fix-typo"));
        assert!(msg.contains("master"));
        assert!(msg.contains("exit status: 1"));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReviewError = io_err.into();
        assert!(matches!(err, ReviewError::Io(_)));
    }
}
