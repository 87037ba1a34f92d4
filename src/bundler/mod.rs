//! Bundle generation pipeline.
//!
//! Turns a project directory into two artifacts: a deterministic aggregate
//! manifest describing every file by relative path, SHA-1 digest, and size,
//! and a zip archive of the whole tree.
//!
//! # Overview
//!
//! A bundle run is a straight pipeline:
//!
//! 1. The builder lists the top-level profile directories and walks each
//!    one with [`TreeWalker`], hashing files via [`hash_file`].
//! 2. The packager serializes the result to `manifest.json` at the project
//!    root and archives the tree into `<project name>.zip`.
//! 3. [`bundle`] composes the two; it is the only entry point the CLI
//!    layer calls.
//!
//! Execution is single-threaded and synchronous throughout. At most one
//! bundle runs per project path at a time; the orchestrator rejects a
//! concurrent second call rather than racing the archive replacement.
//!
//! # Module Organization
//!
//! - [`builder`] - aggregate manifest assembly
//! - `error` - pipeline error taxonomy
//! - `hasher` - streaming SHA-1 content digests
//! - `manifest` - manifest data model and JSON shape
//! - `orchestrator` - the `bundle()` entry point
//! - `packager` - manifest document and zip archive writing
//! - `walker` - iterative directory traversal

pub mod builder;
mod error;
mod hasher;
mod manifest;
mod orchestrator;
mod packager;
mod walker;

pub use builder::build_manifest;
pub use error::{Error, PackagingError, Result};
pub use hasher::hash_file;
pub use manifest::{BundleManifest, FileMap, MANIFEST_NOT_FOUND, ManifestNode, ProfileEntry};
pub use orchestrator::bundle;
pub use packager::package;
pub use walker::{TreeWalker, WalkEntry};
