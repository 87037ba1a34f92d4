//! Command line interface for the modpack bundler.
//!
//! This module provides the CLI surface over the profile-management layer
//! and the bundle pipeline, with argument parsing, command execution, and
//! user feedback.

mod args;
pub mod commands;

pub use args::{Args, Command, ProfileCommand};

use crate::error::Result;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    commands::execute(args)
}
