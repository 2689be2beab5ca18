//! Commit-message hook installation.
//!
//! The review server needs a `Change-Id` trailer on every commit, which the
//! bundled `commit-msg` hook adds. The hook is written once and never
//! replaced, so local edits to it survive.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, ReviewError};

/// Hook location relative to the repository root.
pub const HOOK_FILE: &str = ".git/hooks/commit-msg";

/// Contents written to a missing hook.
pub const COMMIT_MSG_HOOK: &str = include_str!("commit-msg");

/// Outcome of [`install_hook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookStatus {
    /// A file was already present and was left untouched.
    Present,
    /// The hook was missing and has been written to this path.
    Installed(PathBuf),
}

/// Ensures `<root>/.git/hooks/commit-msg` exists.
pub fn install_commit_msg_hook(root: &Path) -> Result<()> {
    if let HookStatus::Installed(path) = install_hook(&root.join(HOOK_FILE), COMMIT_MSG_HOOK)? {
        tracing::info!(
            "Presubmit hook to add Change-Id to commit messages is missing.\n\
             Automatically creating it at {}.",
            path.display()
        );
    }
    Ok(())
}

/// Writes `contents` to `path` with owner-only execute permission unless
/// something already exists there.
///
/// Only a not-found error counts as absent; any other failure to inspect
/// the path is returned.
pub fn install_hook(path: &Path, contents: &str) -> Result<HookStatus> {
    match fs::metadata(path) {
        Ok(_) => return Ok(HookStatus::Present),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ReviewError::HookCheck {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    write_executable(path, contents).map_err(|source| ReviewError::HookWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(HookStatus::Installed(path.to_path_buf()))
}

fn write_executable(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }

    Ok(())
}
