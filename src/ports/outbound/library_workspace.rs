use crate::mavenization::domain::BundleId;
use crate::shared::Result;
use std::path::PathBuf;

/// LibraryWorkspace port for staging embedded libraries copied out of bundles
///
/// Staged files are keyed by bundle identity and entry path, so repeated
/// invocations never collide.
pub trait LibraryWorkspace {
    /// Writes `bytes` to the staging slot of `(bundle, entry_path)`
    ///
    /// # Returns
    /// Path of the staged copy
    fn stage(&self, bundle: &BundleId, entry_path: &str, bytes: &[u8]) -> Result<PathBuf>;
}
