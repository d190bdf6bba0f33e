use osgi_mavenize::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock LibraryWorkspace recording staged paths without touching the disk
#[derive(Default, Clone)]
pub struct MockLibraryWorkspace {
    pub staged: Arc<Mutex<Vec<PathBuf>>>,
    should_fail: bool,
}

impl MockLibraryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.staged.lock().unwrap().clone()
    }
}

impl LibraryWorkspace for MockLibraryWorkspace {
    fn stage(&self, bundle: &BundleId, entry_path: &str, _bytes: &[u8]) -> Result<PathBuf> {
        if self.should_fail {
            anyhow::bail!("Mock workspace is read-only");
        }
        let path = PathBuf::from("staged")
            .join(bundle.versioned_name())
            .join(entry_path);
        self.staged.lock().unwrap().push(path.clone());
        Ok(path)
    }
}
