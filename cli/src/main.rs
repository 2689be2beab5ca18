//! review - single-commit feature branch workflow for git
//!
//! Every feature is one amendable commit on its own branch, rooted at the
//! mainline and uploaded to a Gerrit-style code review server.

mod cli;
mod config;
mod error;
mod git;
mod hook;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::commands::{self, Session};
use crate::cli::{Cli, Commands};
use crate::error::{Result, ReviewError};
use crate::git::ProcessExecutor;

fn main() {
    // Usage errors exit 2 from here
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(if cli.verbose { "info" } else { "warn" }))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(false)
        .without_time()
        .init();

    // Run the command
    if let Err(e) = run(&cli) {
        // stderr is the last resort; nothing to do if it is gone
        let _ = report(&mut std::io::stderr().lock(), &e, cli.verbose);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // help works outside a repository
    if cli.command == Commands::Help {
        return commands::handle_help();
    }

    let root = git::root::enter_root()?;
    let config = config::load_config(&root)?;
    hook::install_commit_msg_hook(&root)?;

    let executor = ProcessExecutor::new(cli.verbose);
    let session = Session::new(&executor, &config);

    match &cli.command {
        Commands::Create { name } => commands::handle_create(&session, name),
        Commands::Commit => commands::handle_commit(&session),
        Commands::Diff => commands::handle_diff(&session),
        Commands::Upload => commands::handle_upload(&session),
        Commands::Sync => commands::handle_sync(&session),
        Commands::Pending => commands::handle_pending(&session),
        Commands::Help => commands::handle_help(),
    }
}

/// Writes a terminal error. Outside verbose mode the failed invocation was
/// never echoed, so it is written first for context.
fn report(out: &mut impl Write, e: &ReviewError, verbose: bool) -> std::io::Result<()> {
    if e.is_precondition() {
        return writeln!(out, "{e}");
    }

    if !verbose {
        if let Some(invocation) = e.failed_invocation() {
            writeln!(out, "{invocation}")?;
        }
    }
    writeln!(out, "Error: {e}")
}
