//! Asset key → URL resolution for illustrative images.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Resolves image keys to URLs under a fixed base path.
///
/// Resolution is pure string construction; whether the file exists is never
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResolver {
    /// Site base path the photo directory lives under.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Directory holding the photos, relative to the base path.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// File extension appended to every key.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_dir() -> String {
    "photos".to_string()
}

fn default_extension() -> String {
    "png".to_string()
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            dir: default_dir(),
            extension: default_extension(),
        }
    }
}

impl AssetResolver {
    /// URL for an asset key, e.g. `p102_cgroups` → `/photos/p102_cgroups.png`.
    pub fn resolve(&self, key: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let dir = self.dir.trim_matches('/');
        let ext = self.extension.trim_start_matches('.');

        if dir.is_empty() {
            format!("{base}/{key}.{ext}")
        } else {
            format!("{base}/{dir}/{key}.{ext}")
        }
    }

    /// File name for an asset key, without any directory.
    pub fn file_name(&self, key: &str) -> String {
        format!("{key}.{}", self.extension.trim_start_matches('.'))
    }

    /// Where an asset is expected on disk when `root` is served at the base path.
    pub fn local_path(&self, root: &Path, key: &str) -> PathBuf {
        let dir = self.dir.trim_matches('/');
        if dir.is_empty() {
            root.join(self.file_name(key))
        } else {
            root.join(dir).join(self.file_name(key))
        }
    }
}
