//! Loader metadata attached to a profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mod loader a profile targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderType {
    Vanilla,
    Forge,
    NeoForge,
    Fabric,
    Quilt,
}

impl LoaderType {
    /// Loader names accepted on the command line and in manifests.
    pub const NAMES: [&'static str; 5] = ["vanilla", "forge", "neoforge", "fabric", "quilt"];

    /// Returns the lowercase string form used in manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::Forge => "forge",
            Self::NeoForge => "neoforge",
            Self::Fabric => "fabric",
            Self::Quilt => "quilt",
        }
    }
}

impl fmt::Display for LoaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoaderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vanilla" => Ok(Self::Vanilla),
            "forge" => Ok(Self::Forge),
            "neoforge" => Ok(Self::NeoForge),
            "fabric" => Ok(Self::Fabric),
            "quilt" => Ok(Self::Quilt),
            other => Err(format!(
                "unknown loader: {}. Valid loaders: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Loader type plus loader version, as stored in a profile manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderInfo {
    /// Which loader the profile targets.
    #[serde(rename = "type")]
    pub kind: LoaderType,
    /// Loader version string, e.g. "0.16.5". Empty for vanilla.
    pub version: String,
}

impl LoaderInfo {
    pub fn new(kind: LoaderType, version: impl Into<String>) -> Self {
        Self {
            kind,
            version: version.into(),
        }
    }
}
