use osgi_mavenize::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock ArchiveReader holding entries keyed by (location, entry path)
#[derive(Default)]
pub struct MockArchiveReader {
    entries: HashMap<(PathBuf, String), Vec<u8>>,
}

impl MockArchiveReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, location: &str, entry: &str, bytes: &[u8]) -> Self {
        self.entries
            .insert((PathBuf::from(location), entry.to_string()), bytes.to_vec());
        self
    }

    /// Adds `entry` to `location`; its copy staged by [`super::MockLibraryWorkspace`]
    /// carries a `pom.properties` for `group:artifact:version`
    pub fn with_maven_library(
        self,
        location: &str,
        bundle: &BundleId,
        entry: &str,
        group: &str,
        artifact: &str,
        version: &str,
    ) -> Self {
        let staged = format!("staged/{}/{}", bundle.versioned_name(), entry);
        let metadata = format!("META-INF/maven/{}/{}/pom.properties", group, artifact);
        let properties = format!(
            "#Generated by Maven\ngroupId={}\nartifactId={}\nversion={}\n",
            group, artifact, version
        );
        self.with_entry(location, entry, b"PK")
            .with_entry(&staged, &metadata, properties.as_bytes())
    }
}

impl ArchiveReader for MockArchiveReader {
    fn read_entry(&self, location: &BundleLocation, relative_path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .entries
            .get(&(location.path().to_path_buf(), relative_path.to_string()))
            .cloned())
    }

    fn list_entries(&self, location: &BundleLocation) -> Result<Vec<String>> {
        let mut entries: Vec<String> = self
            .entries
            .keys()
            .filter(|(path, _)| path == location.path())
            .map(|(_, entry)| entry.clone())
            .collect();
        entries.sort();
        Ok(entries)
    }
}
