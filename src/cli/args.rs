//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling.

use crate::models::LoaderType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Modpack profile manager and bundle generator
#[derive(Parser, Debug)]
#[command(
    name = "modpack_bundler",
    version,
    about = "Modpack profile manager and bundle generator",
    long_about = "Manages versioned modpack profiles and packages a project directory into a distributable bundle.

A project is a directory whose immediate subdirectories are profiles. Bundling writes a deterministic manifest.json at the project root and archives the whole tree into <project>.zip.

Usage:
  modpack_bundler --project ./mypack profile add alpha --version 1.21.1 --loader fabric --loader-version 0.16.5
  modpack_bundler --project ./mypack bundle

Exit code 0 = both bundle artifacts exist at the project root."
)]
pub struct Args {
    /// Project directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the aggregate manifest and archive the project tree
    Bundle,

    /// Manage the project's profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

/// Profile management subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Create a profile directory and write its manifest
    Add {
        /// Profile name (also the directory name)
        name: String,

        /// Game version, e.g. 1.21.1
        #[arg(short, long, value_name = "VERSION")]
        version: String,

        /// Loader type: vanilla, forge, neoforge, fabric, quilt
        #[arg(short, long, value_name = "LOADER")]
        loader: LoaderType,

        /// Loader version, e.g. 0.16.5 (empty for vanilla)
        #[arg(long, value_name = "VERSION", default_value = "")]
        loader_version: String,
    },

    /// Update an existing profile's manifest, optionally renaming it
    Edit {
        /// Profile to edit
        name: String,

        /// New profile (and directory) name
        #[arg(long, value_name = "NAME")]
        rename: Option<String>,

        /// New game version
        #[arg(short, long, value_name = "VERSION")]
        version: Option<String>,

        /// New loader type
        #[arg(short, long, value_name = "LOADER")]
        loader: Option<LoaderType>,

        /// New loader version
        #[arg(long, value_name = "VERSION")]
        loader_version: Option<String>,
    },

    /// Delete a profile directory and everything in it
    Remove {
        /// Profile to remove
        name: String,
    },

    /// List the project's profiles
    List,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
