use osgi_mavenize::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock BundleGraphProvider serving a hand-built graph
#[derive(Default)]
pub struct MockBundleGraphProvider {
    nodes: Vec<BundleNode>,
    requirements: HashMap<BundleId, Vec<RequirementSpec>>,
    should_fail: bool,
}

impl MockBundleGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Adds an archive bundle located at `<name>.jar`
    pub fn with_bundle(self, name: &str, version: &str) -> Self {
        self.with_node(Self::node(name, version))
    }

    pub fn with_node(mut self, node: BundleNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_requirement(mut self, from: &BundleId, to: &BundleId, optional: bool) -> Self {
        self.requirements.entry(from.clone()).or_default().push(RequirementSpec::new(
            to.clone(),
            optional,
            VersionRange::unbounded(),
        ));
        self
    }

    pub fn node(name: &str, version: &str) -> BundleNode {
        BundleNode::new(
            BundleId::parse(name, version).unwrap(),
            BundleLocation::Archive(PathBuf::from(format!("{}.jar", name))),
        )
    }
}

impl BundleGraphProvider for MockBundleGraphProvider {
    fn bundles(&self) -> Result<Vec<BundleNode>> {
        if self.should_fail {
            anyhow::bail!("Mock bundle graph failure");
        }
        Ok(self.nodes.clone())
    }

    fn bundle(&self, id: &BundleId) -> Option<BundleNode> {
        self.nodes.iter().find(|node| node.id() == id).cloned()
    }

    fn requirements(&self, id: &BundleId) -> Result<Vec<RequirementSpec>> {
        Ok(self.requirements.get(id).cloned().unwrap_or_default())
    }
}
