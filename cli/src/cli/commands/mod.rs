//! Command implementations.

pub mod branch;
pub mod remote;
pub mod session;

pub use branch::{handle_commit, handle_create, handle_diff, handle_pending};
pub use remote::{handle_sync, handle_upload};
pub use session::Session;

use crate::error::Result;

/// Handles the `review help` command: extended usage on stdout.
pub fn handle_help() -> Result<()> {
    print!("{}", crate::cli::long_help());
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Expectation helpers for handler tests.

    use mockall::Sequence;

    use crate::git::{GitError, MockExecutor};

    /// `git status -s` output with one staged file.
    pub const STAGED: &str = "A  src/new.rs\n M README.md\n";
    /// `git status -s` output with only unstaged and untracked files.
    pub const UNSTAGED: &str = " M README.md\n?? notes.txt\n";
    /// `git branch` output on the mainline.
    pub const MASTER: &str = "  fix-typo\n* master\n";
    /// `git branch` output on a feature branch.
    pub const FEATURE: &str = "* fix-typo\n  master\n";

    /// Expects one captured query with exactly `args`, answering `output`.
    pub fn expect_query(
        executor: &mut MockExecutor,
        seq: &mut Sequence,
        args: &'static [&'static str],
        output: &'static str,
    ) {
        executor
            .expect_capture()
            .withf(move |inv| inv.program == "git" && inv.args == args)
            .times(1)
            .in_sequence(seq)
            .returning(move |_| Ok(output.to_string()));
    }

    /// Expects one pass-through invocation with exactly `args`.
    pub fn expect_run(
        executor: &mut MockExecutor,
        seq: &mut Sequence,
        args: &'static [&'static str],
        succeed: bool,
    ) {
        executor
            .expect_execute()
            .withf(move |inv| inv.program == "git" && inv.args == args)
            .times(1)
            .in_sequence(seq)
            .returning(move |inv| {
                if succeed {
                    Ok(())
                } else {
                    Err(GitError::CommandFailed {
                        invocation: inv.to_string(),
                        status: "exit status: 1".to_string(),
                    }
                    .into())
                }
            });
    }
}
