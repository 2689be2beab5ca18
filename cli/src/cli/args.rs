//! Command-line argument parsing.

use clap::{CommandFactory, Parser, Subcommand};

/// Extended description printed by `review help`.
const WORKFLOW_HELP: &str = "\
The review command is a wrapper for the git command that provides a simple
interface to the \"single-commit feature branch\" development model.

Start from an up-to-date mainline with your changes staged, run
`review create <name>`, then `review upload`. Address review comments by
staging more changes and running `review commit` followed by another
`review upload`. Use `review sync` to pick up changes from the remote.";

/// Single-commit feature branch workflow for git.
///
/// Every feature lives as exactly one amendable commit on its own branch,
/// rooted at the mainline and uploaded to the code review server.
#[derive(Parser, Debug)]
#[command(name = "review")]
#[command(after_long_help = WORKFLOW_HELP)]
#[command(arg_required_else_help = true)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Echo every git invocation to stderr before running it.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show this help.
    Help,

    /// Create a local branch and commit the staged changes to it.
    ///
    /// Must be run from the mainline branch with changes staged. If the
    /// commit fails the mainline is checked out again and the new branch
    /// is deleted.
    #[command(visible_alias = "cr")]
    Create {
        /// Name of the feature branch.
        name: String,
    },

    /// Amend the branch HEAD commit with the staged changes.
    #[command(visible_alias = "co")]
    Commit,

    /// View the changes introduced by the branch HEAD commit.
    #[command(visible_alias = "d")]
    Diff,

    /// Upload the HEAD commit to the code review server.
    #[command(visible_alias = "u")]
    Upload,

    /// Fetch from the remote and bring the current branch up to date.
    ///
    /// On the mainline this is a fast-forward-only pull. On a feature
    /// branch the HEAD commit is rebased on top of the fetched mainline;
    /// conflicts are left for you to resolve.
    #[command(visible_alias = "s")]
    Sync,

    /// Show local branches and their head commits.
    #[command(visible_alias = "p")]
    Pending,
}

/// Renders the extended usage shown by `review help`.
pub fn long_help() -> String {
    Cli::command().render_long_help().to_string()
}
