//! Manifest serialization and archive packaging.
//!
//! Writes the two bundle artifacts: the aggregate manifest document at the
//! project root, then a zip archive of the entire project tree (manifest
//! included). Any I/O failure here is fatal to the bundle; nothing is
//! retried.

use crate::bundler::error::PackagingError;
use crate::bundler::manifest::BundleManifest;
use crate::models::MANIFEST_FILE_NAME;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

type Result<T> = std::result::Result<T, PackagingError>;

/// Writes the manifest document and the project archive.
///
/// The manifest lands at `<project_root>/manifest.json`, overwriting any
/// previous one, and is itself included in the archive written right after
/// at `<project_root>/<archive_name>`. Entries whose path ends in `.zip`
/// are kept out of the archive so it can never contain itself or a stale
/// sibling archive.
pub fn package(project_root: &Path, manifest: &BundleManifest, archive_name: &str) -> Result<()> {
    write_manifest(project_root, manifest)?;
    write_archive(project_root, archive_name)
}

fn write_manifest(project_root: &Path, manifest: &BundleManifest) -> Result<()> {
    let path = project_root.join(MANIFEST_FILE_NAME);
    let file = File::create(&path).map_err(|source| PackagingError::ManifestWrite {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, manifest).map_err(PackagingError::ManifestEncode)?;
    writer
        .flush()
        .map_err(|source| PackagingError::ManifestWrite {
            path: path.clone(),
            source,
        })?;
    log::info!("wrote bundle manifest to {}", path.display());
    Ok(())
}

fn write_archive(project_root: &Path, archive_name: &str) -> Result<()> {
    let archive_path = project_root.join(archive_name);
    if archive_path.exists() {
        log::info!("replacing stale archive {}", archive_path.display());
        fs::remove_file(&archive_path).map_err(|source| PackagingError::RemoveStale {
            path: archive_path.clone(),
            source,
        })?;
    }

    let file = File::create(&archive_path).map_err(|source| PackagingError::ArchiveCreate {
        path: archive_path.clone(),
        source,
    })?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for entry in walkdir::WalkDir::new(project_root)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| PackagingError::ArchiveWalk {
            path: project_root.to_path_buf(),
            source,
        })?;
        let rel = entry
            .path()
            .strip_prefix(project_root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        if rel.ends_with(".zip") {
            log::debug!("excluding {rel} from the archive");
            continue;
        }
        if entry.file_type().is_dir() {
            zip.add_directory(rel.clone(), options)
                .map_err(|source| PackagingError::ArchiveEntry { entry: rel, source })?;
        } else {
            zip.start_file(rel.clone(), options)
                .map_err(|source| PackagingError::ArchiveEntry { entry: rel, source })?;
            let mut src = File::open(entry.path()).map_err(|source| PackagingError::EntryCopy {
                path: entry.path().to_path_buf(),
                source,
            })?;
            io::copy(&mut src, &mut zip).map_err(|source| PackagingError::EntryCopy {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }
    }

    zip.finish().map_err(|source| PackagingError::ArchiveFinish {
        path: archive_path.clone(),
        source,
    })?;
    log::info!("created archive {}", archive_path.display());
    Ok(())
}
