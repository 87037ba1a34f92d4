//! Project and profile records.
//!
//! The models here back the profile CRUD surface: a [`Project`] owning an
//! ordered, name-unique collection of [`Profile`]s, each persisting a small
//! `manifest.json` in its own directory. The bundle pipeline consumes these
//! read-only.

mod loader;
mod profile;
mod project;

pub use loader::{LoaderInfo, LoaderType};
pub use profile::{MANIFEST_FILE_NAME, Profile};
pub use project::{ProfileChanges, Project};
