//! In-memory port implementations shared by the service unit tests

use crate::mavenization::domain::{BundleId, BundleLocation, BundleNode, RequirementSpec};
use crate::ports::outbound::{ArchiveReader, BundleGraphProvider, LibraryWorkspace};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Entries keyed by (location path, entry path)
#[derive(Default)]
pub struct InMemoryArchives {
    entries: HashMap<(PathBuf, String), Vec<u8>>,
}

impl InMemoryArchives {
    pub fn with(mut self, location: &str, entry: &str, bytes: &[u8]) -> Self {
        self.entries
            .insert((PathBuf::from(location), entry.to_string()), bytes.to_vec());
        self
    }

    /// Adds `entry` to `location` and makes its staged copy carry `pom.properties`
    pub fn with_maven_library(
        self,
        location: &str,
        bundle: &BundleId,
        entry: &str,
        gav: &str,
    ) -> Self {
        let parts: Vec<&str> = gav.split(':').collect();
        let staged = format!("staged/{}/{}", bundle.versioned_name(), entry);
        let metadata = format!("META-INF/maven/{}/{}/pom.properties", parts[0], parts[1]);
        let properties = format!(
            "groupId={}\nartifactId={}\nversion={}\n",
            parts[0], parts[1], parts[2]
        );
        self.with(location, entry, b"PK")
            .with(&staged, &metadata, properties.as_bytes())
    }
}

impl ArchiveReader for InMemoryArchives {
    fn read_entry(&self, location: &BundleLocation, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .entries
            .get(&(location.path().to_path_buf(), path.to_string()))
            .cloned())
    }

    fn list_entries(&self, location: &BundleLocation) -> Result<Vec<String>> {
        let mut entries: Vec<String> = self
            .entries
            .keys()
            .filter(|(loc, _)| loc == location.path())
            .map(|(_, entry)| entry.clone())
            .collect();
        entries.sort();
        Ok(entries)
    }
}

/// Stages under `staged/<versioned name>/<entry>` without touching the disk
#[derive(Default)]
pub struct RecordingWorkspace {
    pub staged: RefCell<Vec<PathBuf>>,
}

impl LibraryWorkspace for RecordingWorkspace {
    fn stage(&self, bundle: &BundleId, entry_path: &str, _bytes: &[u8]) -> Result<PathBuf> {
        let path = PathBuf::from("staged")
            .join(bundle.versioned_name())
            .join(entry_path);
        self.staged.borrow_mut().push(path.clone());
        Ok(path)
    }
}

#[derive(Default)]
pub struct InMemoryGraph {
    nodes: Vec<BundleNode>,
    requirements: HashMap<BundleId, Vec<RequirementSpec>>,
}

impl InMemoryGraph {
    pub fn with_bundle(mut self, node: BundleNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_requirement(mut self, from: &BundleId, spec: RequirementSpec) -> Self {
        self.requirements.entry(from.clone()).or_default().push(spec);
        self
    }
}

impl BundleGraphProvider for InMemoryGraph {
    fn bundles(&self) -> Result<Vec<BundleNode>> {
        Ok(self.nodes.clone())
    }

    fn bundle(&self, id: &BundleId) -> Option<BundleNode> {
        self.nodes.iter().find(|node| node.id() == id).cloned()
    }

    fn requirements(&self, id: &BundleId) -> Result<Vec<RequirementSpec>> {
        Ok(self.requirements.get(id).cloned().unwrap_or_default())
    }
}

pub fn id(name: &str, version: &str) -> BundleId {
    BundleId::parse(name, version).unwrap()
}

/// Archive bundle located at `<name>.jar`
pub fn node(name: &str, version: &str) -> BundleNode {
    BundleNode::new(
        id(name, version),
        BundleLocation::Archive(PathBuf::from(format!("{}.jar", name))),
    )
}
