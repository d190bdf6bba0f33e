use crate::mavenization::domain::BundleId;
use crate::ports::outbound::LibraryWorkspace;
use crate::shared::error::MavenizeError;
use crate::shared::security::validate_entry_path;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// DirectoryWorkspace adapter staging embedded libraries on disk
///
/// Files land in `<root>/<symbolicName>_<version>/<entryPath>`. A temporary
/// workspace removes its directory when dropped.
pub struct DirectoryWorkspace {
    root: PathBuf,
    _temp_dir: Option<TempDir>,
}

impl DirectoryWorkspace {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            _temp_dir: None,
        }
    }

    /// Workspace in a fresh temporary directory
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("osgi-mavenize-")
            .tempdir()
            .map_err(|e| anyhow::anyhow!("Failed to create temporary work directory: {}", e))?;
        Ok(Self {
            root: temp_dir.path().to_path_buf(),
            _temp_dir: Some(temp_dir),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LibraryWorkspace for DirectoryWorkspace {
    fn stage(&self, bundle: &BundleId, entry_path: &str, bytes: &[u8]) -> Result<PathBuf> {
        validate_entry_path(entry_path)?;
        let target = self
            .root
            .join(bundle.versioned_name())
            .join(entry_path.trim().trim_start_matches("./"));

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| MavenizeError::FileWriteError {
                path: parent.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        fs::write(&target, bytes).map_err(|e| MavenizeError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;
        Ok(target)
    }
}
