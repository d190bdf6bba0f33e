use crate::mavenization::domain::BundleLocation;
use crate::shared::Result;

/// ArchiveReader port for reading bytes out of bundles and embedded libraries
pub trait ArchiveReader {
    /// Reads one entry relative to the location root
    ///
    /// # Returns
    /// `Ok(None)` when the entry does not exist
    ///
    /// # Errors
    /// Returns an error if the location itself cannot be opened or read
    fn read_entry(&self, location: &BundleLocation, relative_path: &str)
        -> Result<Option<Vec<u8>>>;

    /// Lists every file entry of the location, `/`-separated, in archive order
    fn list_entries(&self, location: &BundleLocation) -> Result<Vec<String>>;
}
