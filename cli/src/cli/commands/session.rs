//! Shared context for command handlers.

use crate::config::ReviewConfig;
use crate::error::Result;
use crate::git::{Executor, Invocation, RepoInspector};

/// What every handler needs: a way to run git and the workflow settings.
pub struct Session<'a> {
    executor: &'a dyn Executor,
    config: &'a ReviewConfig,
}

impl<'a> Session<'a> {
    /// Creates a session running git through `executor`.
    pub fn new(executor: &'a dyn Executor, config: &'a ReviewConfig) -> Self {
        Self { executor, config }
    }

    /// Workflow settings.
    pub const fn config(&self) -> &'a ReviewConfig {
        self.config
    }

    /// Name of the mainline branch.
    pub fn mainline(&self) -> &'a str {
        &self.config.mainline
    }

    /// Inspector for the current repository state.
    pub fn inspector(&self) -> RepoInspector<'a> {
        RepoInspector::new(self.executor, &self.config.git)
    }

    /// Builds a git invocation using the configured program.
    pub fn git(&self, args: &[&str]) -> Invocation {
        Invocation::new(&self.config.git, args.iter().copied())
    }

    /// Runs git with inherited streams.
    pub fn run(&self, args: &[&str]) -> Result<()> {
        self.execute(&self.git(args))
    }

    /// Runs a prepared invocation with inherited streams.
    pub fn execute(&self, invocation: &Invocation) -> Result<()> {
        self.executor.execute(invocation)
    }
}
