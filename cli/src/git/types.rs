//! Git-related types for review.
//!
//! This module defines data structures for git operations:
//! - [`Invocation`] - A single external command call (program + arguments)
//! - [`RepoState`] - Repository state derived from git for one command

use std::fmt;

/// One call to an external program.
///
/// Displays as the program followed by its space-joined arguments, which is
/// the form echoed in verbose mode and printed for context on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute (usually `git`).
    pub program: String,

    /// Arguments, in order.
    pub args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation of `program` with the given arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// State of the repository as reported by git.
///
/// Computed fresh at the start of each command and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoState {
    /// Currently checked out branch as listed by `git branch`, `None` when
    /// no line is marked as current.
    pub current_branch: Option<String>,

    /// Whether `git status -s` reports at least one fully staged path.
    pub has_staged_changes: bool,
}

impl RepoState {
    /// Returns true if the checked out branch is `mainline`.
    #[must_use]
    pub fn is_on(&self, mainline: &str) -> bool {
        self.current_branch.as_deref() == Some(mainline)
    }
}
