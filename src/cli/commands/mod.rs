//! Command execution functions for bundler operations.

mod bundle;
mod profile;

use crate::cli::args::{Args, Command};
use crate::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Executes the parsed command and returns the process exit code.
pub fn execute(args: Args) -> Result<i32> {
    let project_dir = resolve_project_dir(&args.project)?;
    match args.command {
        Command::Bundle => bundle::run(&project_dir),
        Command::Profile { command } => profile::run(&project_dir, command),
    }
}

/// Resolves the `--project` argument to an absolute directory before any
/// command touches it, so a bad path fails with its CLI spelling intact.
fn resolve_project_dir(dir: &Path) -> Result<PathBuf> {
    let resolved = dir
        .canonicalize()
        .with_context(|| format!("resolving project directory {}", dir.display()))?;
    Ok(resolved)
}
