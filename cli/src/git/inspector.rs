//! Repository state queries.
//!
//! All parsing of git's textual output lives here so that the command
//! handlers only ever see [`RepoState`] and booleans:
//! - [`parse_has_staged_changes`] - Short-status parsing
//! - [`parse_current_branch`] - Branch listing parsing
//! - [`RepoInspector`] - Runs the queries through an [`Executor`]

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ReviewError};
use crate::git::error::GitError;
use crate::git::executor::Executor;
use crate::git::types::{Invocation, RepoState};

/// A path that is staged with a clean working tree: one index status code
/// followed by exactly two spaces. `MM`, ` M` and `??` lines don't match.
static STAGED_CHANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ACDMR]  ").expect("staged change pattern is valid"));

/// Marks the checked out branch in `git branch` output.
const CURRENT_BRANCH_MARKER: &str = "* ";

/// Returns true if any line of `git status -s` output is a staged change.
pub fn parse_has_staged_changes(status: &str) -> bool {
    status.lines().any(|line| STAGED_CHANGE.is_match(line))
}

/// Returns the checked out branch from `git branch` output.
///
/// Detached HEAD is reported by git as `* (HEAD detached at ...)` and comes
/// back verbatim; no marked line at all gives `None`.
pub fn parse_current_branch(listing: &str) -> Option<&str> {
    listing
        .lines()
        .find_map(|line| line.strip_prefix(CURRENT_BRANCH_MARKER))
}

/// Queries git for the state the workflow preconditions depend on.
pub struct RepoInspector<'a> {
    executor: &'a dyn Executor,
    program: &'a str,
}

impl<'a> RepoInspector<'a> {
    /// Creates an inspector running `program` (usually `git`).
    pub fn new(executor: &'a dyn Executor, program: &'a str) -> Self {
        Self { executor, program }
    }

    /// Checks `git status -s` for staged changes.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let status = self.query(&["status", "-s"], "checking for staged changes")?;
        Ok(parse_has_staged_changes(&status))
    }

    /// Reads the checked out branch from `git branch`.
    pub fn current_branch(&self) -> Result<Option<String>> {
        let listing = self.query(&["branch"], "checking current branch")?;
        Ok(parse_current_branch(&listing).map(str::to_string))
    }

    /// Checks whether `branch` is checked out. False when there is no
    /// current branch line (detached HEAD, unborn repository).
    pub fn is_on(&self, branch: &str) -> Result<bool> {
        Ok(self.current_branch()?.as_deref() == Some(branch))
    }

    /// Derives the full repository state, staged changes first.
    pub fn state(&self) -> Result<RepoState> {
        let has_staged_changes = self.has_staged_changes()?;
        let current_branch = self.current_branch()?;
        Ok(RepoState {
            current_branch,
            has_staged_changes,
        })
    }

    fn query(&self, args: &[&str], context: &'static str) -> Result<String> {
        let invocation = Invocation::new(self.program, args.iter().copied());
        self.executor
            .capture(&invocation)
            .map_err(|err| match err {
                ReviewError::Git(GitError::QueryFailed { output, status, .. }) => {
                    inspection(context, output, status)
                }
                ReviewError::Git(GitError::Spawn { source, .. }) => {
                    inspection(context, String::new(), source.to_string())
                }
                other => other,
            })
    }
}

fn inspection(context: &'static str, mut output: String, reason: String) -> ReviewError {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    ReviewError::Inspection {
        context,
        output,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::executor::MockExecutor;

    #[test]
    fn staged_change_codes_match() {
        for code in ['A', 'C', 'D', 'M', 'R'] {
            let status = format!("{code}  src/lib.rs\n");
            assert!(parse_has_staged_changes(&status), "code {code}");
        }
    }

    #[test]
    fn other_spacing_does_not_match() {
        // staged and modified again
        assert!(!parse_has_staged_changes("MM src/lib.rs\n"));
        // modified, not staged
        assert!(!parse_has_staged_changes(" M src/lib.rs\n"));
        // single space
        assert!(!parse_has_staged_changes("M src/lib.rs\n"));
        assert!(!parse_has_staged_changes("?? notes.txt\n"));
        assert!(!parse_has_staged_changes("UU conflict.rs\n"));
        assert!(!parse_has_staged_changes(""));
    }

    #[test]
    fn any_staged_line_is_enough() {
        let status = " M README.md\n?? scratch/\nA  src/new.rs\n";
        assert!(parse_has_staged_changes(status));
    }

    #[test]
    fn current_branch_is_the_marked_line() {
        let listing = "  feature\n* master\n  other\n";
        assert_eq!(parse_current_branch(listing), Some("master"));
    }

    #[test]
    fn current_branch_missing_marker() {
        assert_eq!(parse_current_branch("  feature\n  master\n"), None);
        assert_eq!(parse_current_branch(""), None);
    }

    #[test]
    fn detached_head_is_not_a_branch_name() {
        let listing = "* (HEAD detached at 1a2b3c4)\n  master\n";
        assert_eq!(
            parse_current_branch(listing),
            Some("(HEAD detached at 1a2b3c4)")
        );
    }

    #[test]
    fn is_on_requires_exact_name() {
        let mut executor = MockExecutor::new();
        executor
            .expect_capture()
            .withf(|inv| inv.program == "git" && inv.args == ["branch"])
            .times(2)
            .returning(|_| Ok("* master-old\n  master\n".to_string()));

        let inspector = RepoInspector::new(&executor, "git");
        assert!(!inspector.is_on("master").unwrap());
        assert!(inspector.is_on("master-old").unwrap());
    }

    #[test]
    fn state_queries_status_then_branch() {
        let mut seq = mockall::Sequence::new();
        let mut executor = MockExecutor::new();
        executor
            .expect_capture()
            .withf(|inv| inv.args == ["status", "-s"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("A  src/new.rs\n".to_string()));
        executor
            .expect_capture()
            .withf(|inv| inv.args == ["branch"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("* feature\n  master\n".to_string()));

        let state = RepoInspector::new(&executor, "git").state().unwrap();
        assert!(state.has_staged_changes);
        assert_eq!(state.current_branch.as_deref(), Some("feature"));
    }

    #[test]
    fn failed_query_reports_output_and_context() {
        let mut executor = MockExecutor::new();
        executor.expect_capture().returning(|inv| {
            Err(GitError::QueryFailed {
                invocation: inv.to_string(),
                output: "fatal: not a git repository".to_string(),
                status: "exit status: 128".to_string(),
            }
            .into())
        });

        let err = RepoInspector::new(&executor, "git")
            .has_staged_changes()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "fatal: not a git repository\nchecking for staged changes: exit status: 128"
        );
    }
}
