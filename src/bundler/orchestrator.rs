//! Bundle entry point and per-project serialization.

use crate::bundler::builder::build_manifest;
use crate::bundler::error::{Error, Result};
use crate::bundler::packager;
use crate::models::Project;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Project paths with a bundle currently in flight.
static IN_FLIGHT: OnceLock<Mutex<HashSet<PathBuf>>> = OnceLock::new();

/// Holds a project path's in-flight slot, releasing it on every exit path.
struct BundleGuard {
    path: PathBuf,
}

impl BundleGuard {
    fn acquire(path: &Path) -> Result<Self> {
        let registry = IN_FLIGHT.get_or_init(|| Mutex::new(HashSet::new()));
        let mut in_flight = registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !in_flight.insert(path.to_path_buf()) {
            return Err(Error::InProgress(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl Drop for BundleGuard {
    fn drop(&mut self) {
        if let Some(registry) = IN_FLIGHT.get() {
            registry
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .remove(&self.path);
        }
    }
}

/// Bundles a project: builds the aggregate manifest, writes it to the
/// project root, and archives the whole tree into `<project name>.zip`.
///
/// The two artifacts are produced in that order; a manifest already written
/// is left in place if archiving fails, since the next run rebuilds it from
/// scratch anyway.
///
/// At most one bundle may be in flight per project path. A second call for
/// the same project fails with [`Error::InProgress`] instead of racing the
/// first run's delete-then-recreate of the archive.
pub fn bundle(project: &Project) -> Result<()> {
    if !project.path().is_dir() {
        return Err(Error::NotADirectory(project.path().to_path_buf()));
    }
    let root = fs::canonicalize(project.path()).map_err(|source| Error::Traversal {
        path: project.path().to_path_buf(),
        source,
    })?;
    let _guard = BundleGuard::acquire(&root)?;

    log::info!("bundling {} at {}", project.name(), root.display());
    let manifest = build_manifest(&root)?;
    packager::package(&root, &manifest, &format!("{}.zip", project.name()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_manifest_and_archive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("mypack");
        fs::create_dir_all(root.join("alpha/mods")).unwrap();
        fs::write(root.join("alpha/mods/x.jar"), b"0123456789").unwrap();

        let project = Project::load(&root).unwrap();
        bundle(&project).unwrap();

        assert!(root.join("manifest.json").is_file());
        assert!(root.join("mypack.zip").is_file());
    }

    #[test]
    fn missing_project_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("mypack");
        fs::create_dir(&root).unwrap();
        let project = Project::load(&root).unwrap();
        fs::remove_dir(&root).unwrap();

        let err = bundle(&project).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn guard_admits_one_bundle_per_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = fs::canonicalize(dir.path()).unwrap();

        let first = BundleGuard::acquire(&path).unwrap();
        let second = BundleGuard::acquire(&path);
        assert!(matches!(second, Err(Error::InProgress(_))));

        drop(first);
        BundleGuard::acquire(&path).unwrap();
    }

    #[test]
    fn guard_distinguishes_project_paths() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();

        let _first = BundleGuard::acquire(&fs::canonicalize(a.path()).unwrap()).unwrap();
        BundleGuard::acquire(&fs::canonicalize(b.path()).unwrap()).unwrap();
    }
}
