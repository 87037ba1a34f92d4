//! Bundle manifest data model.
//!
//! [`ManifestNode`] is a tagged union so serialization stays exhaustive
//! over the two entry kinds. All maps are `BTreeMap`: listings are sorted
//! by file name before insertion, so sorted key order, listing order, and
//! serialization order all agree, and two builds of an unchanged tree
//! produce byte-identical JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel recorded when a profile directory has no manifest file.
pub const MANIFEST_NOT_FOUND: &str = "not-found";

/// Children of a directory, keyed by project-root-relative POSIX path.
pub type FileMap = BTreeMap<String, ManifestNode>;

/// The aggregate manifest describing every profile's file tree, keyed by
/// top-level profile-directory name.
///
/// Built fresh on every bundle and persisted only as the manifest document
/// written to the project root.
pub type BundleManifest = BTreeMap<String, ProfileEntry>;

/// One filesystem entry beneath a profile directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode {
    /// Regular file with its content digest and size.
    File {
        /// Lowercase hex SHA-1 digest, or `None` when hashing failed and
        /// the entry was degraded rather than aborting the build.
        hash: Option<String>,
        /// File size in bytes.
        size: u64,
    },
    /// Directory with its children keyed by relative path.
    Directory { files: FileMap },
}

/// Per-profile-directory slice of the aggregate manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// Project-root-relative path of the profile's own manifest file, or
    /// [`MANIFEST_NOT_FOUND`].
    pub manifest: String,
    /// Root of the profile's file tree.
    pub files: FileMap,
}
