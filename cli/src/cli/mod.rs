//! CLI module for review.

pub mod args;
pub mod commands;

pub use args::{long_help, Cli, Commands};
