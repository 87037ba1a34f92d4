//! Project aggregate owning the profile collection.

use crate::error::ProjectError;
use crate::models::{LoaderInfo, LoaderType, MANIFEST_FILE_NAME, Profile};
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, ProjectError>;

/// The top-level directory and its set of profiles.
///
/// Profiles are owned exclusively by the project and unique by name. The
/// project is read-only for the bundle pipeline; only the profile CRUD
/// operations here mutate it.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    path: PathBuf,
    profiles: Vec<Profile>,
}

/// Field updates applied by [`Project::edit_profile`].
#[derive(Debug, Default, Clone)]
pub struct ProfileChanges {
    /// New profile (and directory) name.
    pub rename: Option<String>,
    /// New game version.
    pub version: Option<String>,
    /// New loader type, keeping the current loader version unless also set.
    pub loader: Option<LoaderType>,
    /// New loader version.
    pub loader_version: Option<String>,
}

impl Project {
    /// Opens a project directory and loads every profile found in it.
    ///
    /// The project name is the directory's file name after
    /// canonicalization, so `--project .` resolves to something usable.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(ProjectError::NotADirectory(path.to_path_buf()));
        }
        let path = fs::canonicalize(path).map_err(|source| ProjectError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ProjectError::InvalidName(path.display().to_string()))?;
        let mut project = Self {
            name,
            path,
            profiles: Vec::new(),
        };
        project.reload_profiles()?;
        Ok(project)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    /// Creates a new profile directory, writes its manifest, and registers
    /// the record. Membership is unique by name.
    pub fn add_profile(
        &mut self,
        name: &str,
        version: impl Into<String>,
        loader_info: LoaderInfo,
    ) -> Result<&Profile> {
        if self.profile(name).is_some() {
            return Err(ProjectError::DuplicateProfile(name.to_string()));
        }
        let profile = Profile::create(&self.path, name, version, loader_info)?;
        profile.save_manifest()?;
        self.profiles.push(profile);
        Ok(&self.profiles[self.profiles.len() - 1])
    }

    /// Applies `changes` to an existing profile and rewrites its manifest.
    pub fn edit_profile(&mut self, name: &str, changes: ProfileChanges) -> Result<&Profile> {
        if let Some(new_name) = &changes.rename {
            if new_name != name && self.profile(new_name).is_some() {
                return Err(ProjectError::DuplicateProfile(new_name.clone()));
            }
        }
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| ProjectError::UnknownProfile(name.to_string()))?;

        if let Some(new_name) = &changes.rename {
            if new_name != profile.name() {
                profile.rename(new_name)?;
            }
        }
        if let Some(version) = changes.version {
            profile.set_version(version);
        }
        if changes.loader.is_some() || changes.loader_version.is_some() {
            let mut loader_info = profile.loader_info().clone();
            if let Some(kind) = changes.loader {
                loader_info.kind = kind;
            }
            if let Some(loader_version) = changes.loader_version {
                loader_info.version = loader_version;
            }
            profile.set_loader_info(loader_info);
        }
        profile.save_manifest()?;
        Ok(&*profile)
    }

    /// Removes the profile record and deletes its directory.
    pub fn remove_profile(&mut self, name: &str) -> Result<()> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| ProjectError::UnknownProfile(name.to_string()))?;
        let profile = self.profiles.remove(idx);
        profile.remove()
    }

    /// Re-scans the project directory and rebuilds the profile collection.
    ///
    /// Only subdirectories carrying a readable profile manifest become
    /// profiles; other subdirectories are left alone (bundling still covers
    /// them).
    pub fn reload_profiles(&mut self) -> Result<()> {
        let entries = fs::read_dir(&self.path).map_err(|source| ProjectError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        let mut profiles = Vec::new();
        for dir in dirs {
            if !dir.join(MANIFEST_FILE_NAME).is_file() {
                continue;
            }
            match Profile::load(&dir) {
                Ok(profile) => profiles.push(profile),
                Err(err) => log::warn!("skipping profile at {}: {}", dir.display(), err),
            }
        }
        self.profiles = profiles;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> LoaderInfo {
        LoaderInfo::new(LoaderType::Forge, "47.2.0")
    }

    #[test]
    fn load_names_the_project_after_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("mypack");
        fs::create_dir(&root).unwrap();

        let project = Project::load(&root).unwrap();
        assert_eq!(project.name(), "mypack");
        assert!(project.profiles().is_empty());
    }

    #[test]
    fn load_rejects_a_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Project::load(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ProjectError::NotADirectory(_)));
    }

    #[test]
    fn add_profile_is_unique_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::load(dir.path()).unwrap();
        project.add_profile("alpha", "1.21.1", loader()).unwrap();

        let err = project.add_profile("alpha", "1.20.4", loader()).unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateProfile(_)));
        assert_eq!(project.profiles().len(), 1);
    }

    #[test]
    fn reload_picks_up_profiles_with_manifests() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::load(dir.path()).unwrap();
        project.add_profile("alpha", "1.21.1", loader()).unwrap();
        project.add_profile("beta", "1.20.4", loader()).unwrap();
        // A bare directory without a manifest is not a profile.
        fs::create_dir(dir.path().join("assets")).unwrap();

        let reloaded = Project::load(dir.path()).unwrap();
        let names: Vec<&str> = reloaded.profiles().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn edit_profile_renames_and_updates_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::load(dir.path()).unwrap();
        project.add_profile("alpha", "1.21.1", loader()).unwrap();

        let changes = ProfileChanges {
            rename: Some("beta".to_string()),
            version: Some("1.21.4".to_string()),
            loader: Some(LoaderType::Fabric),
            loader_version: Some("0.16.5".to_string()),
        };
        project.edit_profile("alpha", changes).unwrap();

        let profile = project.profile("beta").unwrap();
        assert_eq!(profile.version(), "1.21.4");
        assert_eq!(profile.loader_info().kind, LoaderType::Fabric);
        assert!(dir.path().join("beta").is_dir());
        assert!(!dir.path().join("alpha").exists());
    }

    #[test]
    fn edit_profile_rejects_rename_onto_existing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::load(dir.path()).unwrap();
        project.add_profile("alpha", "1.21.1", loader()).unwrap();
        project.add_profile("beta", "1.20.4", loader()).unwrap();

        let changes = ProfileChanges {
            rename: Some("beta".to_string()),
            ..Default::default()
        };
        let err = project.edit_profile("alpha", changes).unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateProfile(_)));
    }

    #[test]
    fn remove_profile_deletes_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::load(dir.path()).unwrap();
        project.add_profile("alpha", "1.21.1", loader()).unwrap();

        project.remove_profile("alpha").unwrap();
        assert!(project.profiles().is_empty());
        assert!(!dir.path().join("alpha").exists());

        let err = project.remove_profile("alpha").unwrap_err();
        assert!(matches!(err, ProjectError::UnknownProfile(_)));
    }
}
