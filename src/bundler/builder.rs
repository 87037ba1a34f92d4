//! Aggregate manifest assembly.
//!
//! Walks each top-level profile directory and turns it into a nested tree
//! of [`ManifestNode`]s, hashing every file along the way. Pure read of the
//! filesystem; nothing is written here.

use crate::bundler::error::{Error, Result};
use crate::bundler::hasher;
use crate::bundler::manifest::{
    BundleManifest, FileMap, MANIFEST_NOT_FOUND, ManifestNode, ProfileEntry,
};
use crate::bundler::walker::TreeWalker;
use crate::models::MANIFEST_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the aggregate manifest for every profile directory under
/// `project_root`.
///
/// Each immediate subdirectory becomes one top-level entry carrying the
/// relative path of its own manifest file (or [`MANIFEST_NOT_FOUND`]) and a
/// nested tree of everything beneath it, keyed by project-root-relative
/// POSIX path.
///
/// A single file's hashing failure degrades that entry to a null hash and
/// the build continues; only a failure to list the project root itself is
/// fatal.
pub fn build_manifest(project_root: &Path) -> Result<BundleManifest> {
    let mut manifest = BundleManifest::new();
    for dir in profile_dirs(project_root)? {
        let Some(name) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let pointer = if dir.join(MANIFEST_FILE_NAME).is_file() {
            format!("{name}/{MANIFEST_FILE_NAME}")
        } else {
            MANIFEST_NOT_FOUND.to_string()
        };
        let files = build_tree(project_root, &dir);
        manifest.insert(name, ProfileEntry {
            manifest: pointer,
            files,
        });
    }
    Ok(manifest)
}

/// Immediate subdirectories of the project root, sorted by name.
/// Non-directory entries at this level are not bundle profiles.
fn profile_dirs(project_root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(project_root).map_err(|source| Error::Traversal {
        path: project_root.to_path_buf(),
        source,
    })?;
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Walks one profile directory into a nested file map.
///
/// Keys are relative to the project root, so every key begins with the
/// profile directory's name.
fn build_tree(project_root: &Path, profile_dir: &Path) -> FileMap {
    let mut root = FileMap::new();
    for entry in TreeWalker::walk(profile_dir) {
        let rel_path = relative_path(project_root, &entry.path);
        let node = if entry.is_dir {
            ManifestNode::Directory {
                files: FileMap::new(),
            }
        } else {
            file_node(&entry.path)
        };
        insert(&mut root, &rel_path, node);
    }
    root
}

fn file_node(path: &Path) -> ManifestNode {
    let hash = match hasher::hash_file(path) {
        Ok(digest) => Some(digest),
        Err(err) => {
            log::warn!("{err}; recording a null hash");
            None
        }
    };
    let size = match path.metadata() {
        Ok(meta) => meta.len(),
        Err(err) => {
            log::warn!("cannot stat {}: {err}", path.display());
            0
        }
    };
    ManifestNode::File { hash, size }
}

/// POSIX-style path of `path` relative to `root`, computed once per entry.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Inserts `node` at `rel_path`, descending through the directory nodes
/// created when the walk emitted each ancestor.
fn insert(root: &mut FileMap, rel_path: &str, node: ManifestNode) {
    let mut current = root;
    // Ancestor keys are the prefixes of rel_path ending at each '/' after
    // the profile-name segment; the profile root is the map itself.
    for (idx, _) in rel_path.match_indices('/').skip(1) {
        match current.get_mut(&rel_path[..idx]) {
            Some(ManifestNode::Directory { files }) => current = files,
            _ => {
                log::warn!("missing ancestor of {rel_path:?} in manifest tree");
                return;
            }
        }
    }
    current.insert(rel_path.to_string(), node);
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAR_BYTES: &[u8] = b"0123456789";
    const JAR_SHA1: &str = "87acec17cd9dcd20a716cc2cf67417b71c8a7016";

    fn seed_profile_a(root: &Path) {
        fs::create_dir_all(root.join("profileA/mods")).unwrap();
        fs::write(root.join("profileA/manifest.json"), b"{}").unwrap();
        fs::write(root.join("profileA/mods/x.jar"), JAR_BYTES).unwrap();
    }

    #[test]
    fn profile_tree_with_manifest_pointer() {
        let dir = tempfile::tempdir().unwrap();
        seed_profile_a(dir.path());

        let manifest = build_manifest(dir.path()).unwrap();
        let entry = &manifest["profileA"];
        assert_eq!(entry.manifest, "profileA/manifest.json");

        let ManifestNode::Directory { files } = &entry.files["profileA/mods"] else {
            panic!("profileA/mods should be a directory node");
        };
        assert_eq!(
            files["profileA/mods/x.jar"],
            ManifestNode::File {
                hash: Some(JAR_SHA1.to_string()),
                size: JAR_BYTES.len() as u64,
            }
        );
        // The profile's own manifest never shows up as content.
        assert!(!entry.files.contains_key("profileA/manifest.json"));
    }

    #[test]
    fn profile_without_manifest_gets_the_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bare")).unwrap();

        let manifest = build_manifest(dir.path()).unwrap();
        assert_eq!(manifest["bare"].manifest, MANIFEST_NOT_FOUND);
        assert!(manifest["bare"].files.is_empty());
    }

    #[test]
    fn empty_project_yields_an_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = build_manifest(dir.path()).unwrap();
        assert!(manifest.is_empty());
        assert_eq!(serde_json::to_string(&manifest).unwrap(), "{}");
    }

    #[test]
    fn top_level_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), b"hi").unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let manifest = build_manifest(dir.path()).unwrap();
        let keys: Vec<&String> = manifest.keys().collect();
        assert_eq!(keys, ["alpha"]);
    }

    #[test]
    fn two_builds_serialize_identically() {
        let dir = tempfile::tempdir().unwrap();
        seed_profile_a(dir.path());
        fs::create_dir_all(dir.path().join("profileB/config/deep")).unwrap();
        fs::write(dir.path().join("profileB/config/deep/opts.txt"), b"o").unwrap();

        let first = serde_json::to_string_pretty(&build_manifest(dir.path()).unwrap()).unwrap();
        let second = serde_json::to_string_pretty(&build_manifest(dir.path()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_file_appears_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        seed_profile_a(dir.path());
        fs::write(dir.path().join("profileA/mods/y.jar"), b"abc").unwrap();
        fs::write(dir.path().join("profileA/icon.png"), b"png").unwrap();

        let manifest = build_manifest(dir.path()).unwrap();
        let entry = &manifest["profileA"];

        let mut paths = Vec::new();
        collect_file_paths(&entry.files, &mut paths);
        paths.sort();
        assert_eq!(paths, [
            "profileA/icon.png",
            "profileA/mods/x.jar",
            "profileA/mods/y.jar",
        ]);
    }

    fn collect_file_paths(files: &FileMap, out: &mut Vec<String>) {
        for (path, node) in files {
            match node {
                ManifestNode::File { .. } => out.push(path.clone()),
                ManifestNode::Directory { files } => collect_file_paths(files, out),
            }
        }
    }
}
