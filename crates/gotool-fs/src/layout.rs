//! Data directory layout
//!
//! Every piece of plugin state lives at a deterministic location derived
//! from the data directory root and the plugin name:
//!
//! ```text
//! <data_dir>/
//!   plugins/
//!     <plugin_name>/
//!       manifest.json
//! ```

use std::path::{Path, PathBuf};

/// Directory holding one directory per installed plugin.
pub const PLUGINS_DIR: &str = "plugins";

/// Manifest file name inside a plugin directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Root directory beneath which all plugin installation state is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Wrap an already validated data directory root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<data_dir>/plugins`
    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join(PLUGINS_DIR)
    }

    /// `<data_dir>/plugins/<plugin_name>`
    pub fn plugin_dir(&self, plugin_name: &str) -> PathBuf {
        self.plugins_dir().join(plugin_name)
    }

    /// `<data_dir>/plugins/<plugin_name>/manifest.json`
    pub fn manifest_path(&self, plugin_name: &str) -> PathBuf {
        self.plugin_dir(plugin_name).join(MANIFEST_FILE)
    }
}

impl AsRef<Path> for DataDir {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

impl std::fmt::Display for DataDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root.display())
    }
}

impl From<PathBuf> for DataDir {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for DataDir {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<&str> for DataDir {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path_is_keyed_by_plugin_name() {
        let data = DataDir::new("/home/user/.asdf");
        assert_eq!(
            data.manifest_path("go-enum"),
            PathBuf::from("/home/user/.asdf/plugins/go-enum/manifest.json")
        );
    }

    #[test]
    fn test_plugin_dir() {
        let data = DataDir::new("/data");
        assert_eq!(data.plugins_dir(), PathBuf::from("/data/plugins"));
        assert_eq!(data.plugin_dir("stringer"), PathBuf::from("/data/plugins/stringer"));
    }

    #[test]
    fn test_display_is_root() {
        let data = DataDir::from("/data");
        assert_eq!(data.to_string(), "/data");
    }
}
