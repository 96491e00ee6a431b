//! Fixed project layout touched by the migration.
//!
//! Every path is resolved against an explicit project root so no phase
//! depends on the process working directory.

use std::path::{Path, PathBuf};

/// Web-root directory name before migration.
pub const LEGACY_DIR: &str = "docroot";

/// Web-root directory name after migration.
pub const TARGET_DIR: &str = "public";

/// Composer manifest, relative to the root.
pub const MANIFEST_FILE: &str = "composer.json";

/// Optional local configuration, relative to the root.
pub const CONFIG_FILE: &str = "config/local.php";

/// Suffix appended to a file name to form its backup.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Resolved locations of everything the migration reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebrootLayout {
    root: PathBuf,
}

impl WebrootLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn legacy_dir(&self) -> PathBuf {
        self.root.join(LEGACY_DIR)
    }

    pub fn target_dir(&self) -> PathBuf {
        self.root.join(TARGET_DIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Renders `path` relative to the root for user-facing messages.
    ///
    /// Paths outside the root are shown relative to it (`../...`).
    pub fn display_relative(&self, path: &Path) -> String {
        let relative = match path.strip_prefix(&self.root) {
            Ok(inside) => inside.to_path_buf(),
            Err(_) => pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf()),
        };
        relative.to_string_lossy().replace('\\', "/")
    }
}

/// Returns the backup location for `path` (`<name>.backup`, same directory).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
