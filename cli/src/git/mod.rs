//! Git access for review.
//!
//! Git is treated as a black-box command executor:
//! - [`executor`] - Running invocations, with inherited or captured output
//! - [`inspector`] - Deriving repository state from git's text output
//! - [`root`] - Locating the repository root

pub mod error;
pub mod executor;
pub mod inspector;
pub mod root;
pub mod types;

pub use error::GitError;
pub use executor::{Executor, ProcessExecutor};
pub use inspector::RepoInspector;
pub use types::Invocation;

#[cfg(test)]
pub use executor::MockExecutor;
