//! Remote command handlers for the review CLI.
//!
//! - [`handle_upload`] - Push the feature commit for review (`review upload`)
//! - [`handle_sync`] - Bring the current branch up to date (`review sync`)

use crate::cli::commands::session::Session;
use crate::error::{Result, ReviewError};

/// Handles the `review upload` command.
///
/// Pushes HEAD to the review server's upload ref for the mainline.
///
/// # Errors
///
/// Returns an error if the mainline is checked out or the push fails.
pub fn handle_upload(session: &Session<'_>) -> Result<()> {
    let mainline = session.mainline();
    if session.inspector().is_on(mainline)? {
        return Err(ReviewError::OnMainline {
            action: "upload from",
            mainline: mainline.to_string(),
        });
    }

    let config = session.config();
    let refspec = config.upload_refspec();
    tracing::info!("Pushing commit to Gerrit code review server.");
    session.run(&["push", config.remote.as_str(), refspec.as_str()])
}

/// Handles the `review sync` command.
///
/// Fetches, then fast-forwards the mainline or rebases the feature commit
/// onto the fetched mainline. A conflicted rebase is left in progress for
/// the user to resolve.
///
/// # Errors
///
/// Returns an error if any git step fails.
pub fn handle_sync(session: &Session<'_>) -> Result<()> {
    tracing::info!("Fetching changes from remote repo.");
    session.run(&["fetch", "-q"])?;

    if session.inspector().is_on(session.mainline())? {
        return session.run(&["pull", "-q", "--ff-only"]);
    }

    let upstream = session.config().upstream();
    tracing::info!("Rebasing head commit atop {upstream}.");
    session.run(&["rebase", upstream.as_str()])
}
