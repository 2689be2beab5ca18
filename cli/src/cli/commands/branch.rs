//! Local branch command handlers for the review CLI.
//!
//! This module implements the commands that shape the feature commit:
//! - [`handle_create`] - Branch off the mainline with the staged changes (`review create`)
//! - [`handle_commit`] - Amend the feature commit (`review commit`)
//! - [`handle_diff`] - Show the feature commit (`review diff`)
//! - [`handle_pending`] - List pending changes (`review pending`)

use crate::cli::commands::session::Session;
use crate::error::{Result, ReviewError};
use crate::git::Invocation;

/// One step undoing part of a failed operation.
struct Compensation {
    description: String,
    invocation: Invocation,
}

/// Handles the `review create <name>` command.
///
/// Requires staged changes and the mainline checked out. Creates branch
/// `name` and commits the staged changes to it. If the commit fails, the
/// mainline is checked out again and the new branch deleted.
///
/// # Errors
///
/// Returns an error if:
/// - Nothing is staged, or the mainline is not checked out
/// - A git invocation fails
/// - The commit fails (after the branch has been rolled back)
pub fn handle_create(session: &Session<'_>, name: &str) -> Result<()> {
    let state = session.inspector().state()?;
    if !state.has_staged_changes {
        return Err(ReviewError::NoStagedChanges);
    }

    let mainline = session.mainline();
    if !state.is_on(mainline) {
        return Err(ReviewError::NotOnMainline {
            command: "create",
            mainline: mainline.to_string(),
        });
    }

    tracing::info!("Creating and checking out branch {name:?}.");
    session.run(&["checkout", "-q", "-b", name])?;

    tracing::info!("Committing staged changes to branch.");
    let Err(err) = session.run(&["commit", "-q"]) else {
        return Ok(());
    };
    tracing::info!("Commit failed: {err}");

    let rollback = [
        Compensation {
            description: format!("Switching back to {mainline}."),
            invocation: session.git(&["checkout", "-q", mainline]),
        },
        Compensation {
            description: format!("Deleting branch {name:?}."),
            invocation: session.git(&["branch", "-q", "-d", name]),
        },
    ];
    if let Err(rollback_err) = compensate(session, &rollback) {
        tracing::error!("Commit to branch {name:?} failed: {err}");
        return Err(rollback_err);
    }

    Err(ReviewError::CreateRolledBack {
        branch: name.to_string(),
        mainline: mainline.to_string(),
        source: Box::new(err),
    })
}

/// Runs compensation steps in order. The first failure ends the rollback;
/// it is not compensated itself.
fn compensate(session: &Session<'_>, steps: &[Compensation]) -> Result<()> {
    for step in steps {
        tracing::info!("{}", step.description);
        session.execute(&step.invocation)?;
    }
    Ok(())
}

/// Handles the `review commit` command.
///
/// Amends the feature commit with the staged changes, reusing its message
/// and authorship.
///
/// # Errors
///
/// Returns an error if nothing is staged, the mainline is checked out, or
/// git fails.
pub fn handle_commit(session: &Session<'_>) -> Result<()> {
    let state = session.inspector().state()?;
    if !state.has_staged_changes {
        return Err(ReviewError::NoStagedChanges);
    }

    let mainline = session.mainline();
    if state.is_on(mainline) {
        return Err(ReviewError::OnMainline {
            action: "commit to",
            mainline: mainline.to_string(),
        });
    }

    tracing::info!("Amending head commit with staged changes.");
    session.run(&["commit", "-q", "--amend", "-C", "HEAD"])
}

/// Handles the `review diff` command: the change introduced by HEAD.
pub fn handle_diff(session: &Session<'_>) -> Result<()> {
    session.run(&["diff", "HEAD^", "HEAD"])
}

/// Handles the `review pending` command.
///
/// # Errors
///
/// Always fails; listing pending branches is not implemented.
pub const fn handle_pending(_session: &Session<'_>) -> Result<()> {
    Err(ReviewError::NotImplemented("pending"))
}
