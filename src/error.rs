//! Comprehensive error types for bundler operations.
//!
//! The bundle pipeline has its own taxonomy in [`crate::bundler`]; the
//! types here aggregate everything the binary and the profile-management
//! layer can surface.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Profile CRUD and persistence errors
    #[error("project error: {0}")]
    Project(#[from] ProjectError),

    /// Bundle pipeline errors
    #[error("bundle error: {0}")]
    Bundle(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

/// Errors from profile CRUD and per-profile manifest persistence.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The project path does not exist or is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Profile name is empty or contains path separators
    #[error("invalid profile name: {0:?}")]
    InvalidName(String),

    /// A profile with this name already exists
    #[error("profile {0:?} already exists")]
    DuplicateProfile(String),

    /// No profile with this name is registered
    #[error("no profile named {0:?}")]
    UnknownProfile(String),

    /// The project directory could not be opened or listed
    #[error("failed to open project at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile directory could not be created
    #[error("failed to create profile directory {}: {source}", path.display())]
    CreateProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile directory could not be renamed
    #[error("failed to rename profile directory {}: {source}", path.display())]
    RenameProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile directory could not be deleted
    #[error("failed to remove profile directory {}: {source}", path.display())]
    RemoveProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile manifest could not be read
    #[error("failed to read profile manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile manifest is not valid JSON
    #[error("profile manifest {} is malformed: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The profile manifest file could not be created
    #[error("failed to write profile manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile manifest could not be serialized
    #[error("failed to encode profile manifest {}: {source}", path.display())]
    ManifestEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
