use crate::mavenization::domain::{
    BundleId, BundleLocation, BundleNode, OsgiVersion, RequirementSpec, VersionRange,
};
use crate::ports::outbound::BundleGraphProvider;
use crate::shared::error::MavenizeError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default)]
    bundle: Vec<BundleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleEntry {
    symbolic_name: String,
    version: String,
    location: PathBuf,
    #[serde(default)]
    classpath: Option<Vec<String>>,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    #[serde(default)]
    requires: Vec<RequireEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequireEntry {
    symbolic_name: String,
    /// May be omitted when only one bundle of that name is declared
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    range: Option<String>,
    #[serde(default)]
    optional: bool,
}

/// TomlBundleGraph adapter serving an already-resolved bundle graph from a TOML file
///
/// Bundle locations are resolved relative to the directory of the file.
/// The whole file is validated up front: duplicate identities, requirements
/// on undeclared bundles and malformed versions or ranges are parse errors.
#[derive(Debug)]
pub struct TomlBundleGraph {
    nodes: Vec<BundleNode>,
    requirements: HashMap<BundleId, Vec<RequirementSpec>>,
}

impl TomlBundleGraph {
    /// Loads and validates the graph file at `path`
    ///
    /// # Errors
    /// Returns `GraphFileNotFound` if the file does not exist and
    /// `GraphParseError` for any syntax or consistency problem
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MavenizeError::GraphFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the resolved bundle graph with --graph <file>".to_string(),
            }
            .into());
        }
        validate_regular_file(path, "bundle graph")?;
        let content = fs::read_to_string(path).map_err(|e| MavenizeError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base_dir).map_err(|e| {
            MavenizeError::GraphParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }

    /// Parses graph file content; relative locations are joined onto `base_dir`
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let file: GraphFile = toml::from_str(content)?;

        let mut nodes = Vec::with_capacity(file.bundle.len());
        for entry in &file.bundle {
            let id = BundleId::parse(&entry.symbolic_name, &entry.version)?;
            if nodes.iter().any(|node: &BundleNode| node.id() == &id) {
                anyhow::bail!("bundle {} is declared more than once", id);
            }
            let location_path = if entry.location.is_absolute() {
                entry.location.clone()
            } else {
                base_dir.join(&entry.location)
            };
            let mut node = BundleNode::new(id, BundleLocation::from_path(location_path));
            if let Some(classpath) = &entry.classpath {
                node = node.with_classpath(classpath.iter().cloned());
            }
            for (name, value) in &entry.headers {
                node = node.with_header(name.clone(), value.clone());
            }
            nodes.push(node);
        }

        let mut requirements = HashMap::new();
        for (entry, node) in file.bundle.iter().zip(&nodes) {
            let specs = entry
                .requires
                .iter()
                .map(|require| Self::requirement_spec(node.id(), require, &nodes))
                .collect::<Result<Vec<_>>>()?;
            requirements.insert(node.id().clone(), specs);
        }

        Ok(Self {
            nodes,
            requirements,
        })
    }

    fn requirement_spec(
        from: &BundleId,
        require: &RequireEntry,
        nodes: &[BundleNode],
    ) -> Result<RequirementSpec> {
        let to = match &require.version {
            Some(version) => {
                let version = OsgiVersion::parse(version)?;
                nodes
                    .iter()
                    .map(BundleNode::id)
                    .find(|id| {
                        id.symbolic_name() == require.symbolic_name && id.version() == &version
                    })
                    .cloned()
            }
            None => {
                let mut candidates = nodes
                    .iter()
                    .map(BundleNode::id)
                    .filter(|id| id.symbolic_name() == require.symbolic_name);
                match (candidates.next(), candidates.next()) {
                    (Some(id), None) => Some(id.clone()),
                    (Some(_), Some(_)) => anyhow::bail!(
                        "{} requires '{}' without a version, but several versions are declared",
                        from,
                        require.symbolic_name
                    ),
                    (None, _) => None,
                }
            }
        };
        let Some(to) = to else {
            anyhow::bail!(
                "{} requires undeclared bundle '{}'",
                from,
                require.symbolic_name
            );
        };
        let range = match &require.range {
            Some(range) => VersionRange::parse(range)?,
            None => VersionRange::unbounded(),
        };
        Ok(RequirementSpec::new(to, require.optional, range))
    }
}

impl BundleGraphProvider for TomlBundleGraph {
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
