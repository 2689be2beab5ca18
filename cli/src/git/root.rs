//! Repository root discovery.

use std::path::{Path, PathBuf};

use crate::error::{Result, ReviewError};

/// Directory (or worktree file) that marks a repository root.
pub const REPO_MARKER: &str = ".git";

/// Walks upward from `start` to the first directory containing `.git`.
pub fn locate_root(start: &Path) -> Result<PathBuf> {
    locate_marker(start, REPO_MARKER)
}

/// Walks upward from `start` to the first directory containing `marker`.
///
/// Fails with [`ReviewError::RootNotFound`] once the filesystem root has
/// been checked without a match.
pub fn locate_marker(start: &Path, marker: &str) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(marker).exists() {
            return Ok(dir.to_path_buf());
        }
        dir = dir.parent().ok_or(ReviewError::RootNotFound)?;
    }
}

/// Finds the repository root above the current directory and makes it the
/// process working directory.
///
/// The change is process-wide; the returned root is what the rest of the
/// run should use to build paths.
pub fn enter_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(ReviewError::CurrentDir)?;
    let root = locate_root(&cwd)?;

    if root != cwd {
        std::env::set_current_dir(&root).map_err(|source| ReviewError::ChangeDir {
            path: root.clone(),
            source,
        })?;
        tracing::info!("Working from repository root {}", root.display());
    }

    Ok(root)
}
