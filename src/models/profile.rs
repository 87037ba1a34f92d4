//! Profile records and their on-disk manifest files.
//!
//! A profile is one named variant of the modpack, stored as a subdirectory
//! of the project. Its `manifest.json` carries the name, game version, and
//! loader info; the bundle pipeline never reads that file beyond checking
//! it exists.

use crate::error::ProjectError;
use crate::models::LoaderInfo;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the per-profile manifest, and of the aggregate manifest at
/// the project root. Files with this name are metadata, never bundle
/// content.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

type Result<T> = std::result::Result<T, ProjectError>;

/// One named variant of the modpack (loader + version combination).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    path: PathBuf,
    version: String,
    loader_info: LoaderInfo,
}

/// Serialized form of a profile's `manifest.json`.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileManifest {
    name: String,
    version: String,
    loader: LoaderInfo,
}

impl Profile {
    /// Creates the profile directory under `parent` and returns the record.
    ///
    /// The manifest is not written yet; callers follow up with
    /// [`Profile::save_manifest`].
    pub fn create(
        parent: &Path,
        name: &str,
        version: impl Into<String>,
        loader_info: LoaderInfo,
    ) -> Result<Self> {
        validate_name(name)?;
        let path = parent.join(name);
        fs::create_dir_all(&path).map_err(|source| ProjectError::CreateProfile {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            path,
            version: version.into(),
            loader_info,
        })
    }

    /// Loads a profile by reading the `manifest.json` inside `path`.
    ///
    /// The directory name wins over the name recorded in the manifest, so a
    /// directory renamed behind our back still round-trips.
    pub fn load(path: &Path) -> Result<Self> {
        let manifest_path = path.join(MANIFEST_FILE_NAME);
        let raw = fs::read_to_string(&manifest_path).map_err(|source| {
            ProjectError::ManifestRead {
                path: manifest_path.clone(),
                source,
            }
        })?;
        let manifest: ProfileManifest =
            serde_json::from_str(&raw).map_err(|source| ProjectError::ManifestParse {
                path: manifest_path,
                source,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ProjectError::InvalidName(path.display().to_string()))?;
        Ok(Self {
            name,
            path: path.to_path_buf(),
            version: manifest.version,
            loader_info: manifest.loader,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Game version string, e.g. "1.21.1".
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn loader_info(&self) -> &LoaderInfo {
        &self.loader_info
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn set_loader_info(&mut self, loader_info: LoaderInfo) {
        self.loader_info = loader_info;
    }

    /// Writes the profile's `manifest.json` inside its own directory.
    pub fn save_manifest(&self) -> Result<()> {
        let manifest = ProfileManifest {
            name: self.name.clone(),
            version: self.version.clone(),
            loader: self.loader_info.clone(),
        };
        let manifest_path = self.path.join(MANIFEST_FILE_NAME);
        let file = fs::File::create(&manifest_path).map_err(|source| {
            ProjectError::ManifestWrite {
                path: manifest_path.clone(),
                source,
            }
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &manifest).map_err(|source| {
            ProjectError::ManifestEncode {
                path: manifest_path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(|source| ProjectError::ManifestWrite {
            path: manifest_path,
            source,
        })?;
        Ok(())
    }

    /// Renames the profile directory on disk and updates the record.
    pub fn rename(&mut self, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        let parent = self
            .path
            .parent()
            .ok_or_else(|| ProjectError::InvalidName(new_name.to_string()))?;
        let new_path = parent.join(new_name);
        fs::rename(&self.path, &new_path).map_err(|source| ProjectError::RenameProfile {
            path: self.path.clone(),
            source,
        })?;
        self.name = new_name.to_string();
        self.path = new_path;
        Ok(())
    }

    /// Deletes the profile directory and everything beneath it.
    pub fn remove(&self) -> Result<()> {
        fs::remove_dir_all(&self.path).map_err(|source| ProjectError::RemoveProfile {
            path: self.path.clone(),
            source,
        })
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ProjectError::InvalidName(name.to_string()));
    }
    Ok(())
}
