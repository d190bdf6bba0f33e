use super::OsgiVersion;
use crate::shared::error::MavenizeError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum length for symbolic names (security limit)
const MAX_SYMBOLIC_NAME_LENGTH: usize = 255;

/// Manifest header naming the host of a source bundle
pub const SOURCE_BUNDLE_HEADER: &str = "Eclipse-SourceBundle";

/// Bundle identity: symbolic name plus OSGi version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BundleId {
    symbolic_name: String,
    version: OsgiVersion,
}

impl BundleId {
    pub fn new(symbolic_name: impl Into<String>, version: OsgiVersion) -> Result<Self> {
        let symbolic_name = symbolic_name.into();
        let trimmed = symbolic_name.trim();
        if trimmed.is_empty() {
            return Err(MavenizeError::validation("bundle symbolic name must not be empty").into());
        }
        if trimmed.len() > MAX_SYMBOLIC_NAME_LENGTH {
            return Err(MavenizeError::validation(format!(
                "bundle symbolic name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_SYMBOLIC_NAME_LENGTH
            ))
            .into());
        }
        if trimmed.contains(['/', '\\', ',']) {
            return Err(MavenizeError::validation(format!(
                "bundle symbolic name '{}' contains a path or list separator",
                trimmed
            ))
            .into());
        }
        Ok(Self {
            symbolic_name: trimmed.to_string(),
            version,
        })
    }

    /// Convenience constructor parsing the version literal
    pub fn parse(symbolic_name: &str, version: &str) -> Result<Self> {
        Self::new(symbolic_name, OsgiVersion::parse(version)?)
    }

    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    pub fn version(&self) -> &OsgiVersion {
        &self.version
    }

    /// `symbolicName_version`, the most specific identity string used by options
    pub fn versioned_name(&self) -> String {
        format!("{}_{}", self.symbolic_name, self.version)
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.symbolic_name, self.version)
    }
}

/// Where a bundle's bytes live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleLocation {
    /// Exploded bundle directory
    Directory(PathBuf),
    /// Bundle jar (or any zip archive)
    Archive(PathBuf),
}

impl BundleLocation {
    /// Infers the location kind from the file system, defaulting to an archive
    /// for paths that do not exist yet
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            BundleLocation::Directory(path)
        } else {
            BundleLocation::Archive(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            BundleLocation::Directory(path) | BundleLocation::Archive(path) => path,
        }
    }
}

/// Host reference declared by a source bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBundleTarget {
    pub symbolic_name: String,
    pub version: Option<OsgiVersion>,
}

impl SourceBundleTarget {
    /// Parses `host.name;version="1.0.0";roots:="."`
    pub fn parse(header: &str) -> Result<Self> {
        let mut clauses = header.split(';').map(str::trim);
        let symbolic_name = clauses.next().unwrap_or_default();
        if symbolic_name.is_empty() {
            return Err(MavenizeError::validation(format!(
                "{} header '{}' does not name a host bundle",
                SOURCE_BUNDLE_HEADER, header
            ))
            .into());
        }

        let mut version = None;
        for clause in clauses {
            let Some((name, value)) = clause.split_once('=') else {
                continue;
            };
            // `roots:=` is a directive, `version=` an attribute
            if name.trim() == "version" {
                let literal = value.trim().trim_matches('"');
                version = Some(OsgiVersion::parse(literal)?);
            }
        }

        Ok(Self {
            symbolic_name: symbolic_name.to_string(),
            version,
        })
    }
}

/// An already-resolved bundle as exposed by the bundle graph provider
#[derive(Debug, Clone, PartialEq)]
pub struct BundleNode {
    id: BundleId,
    location: BundleLocation,
    classpath: Vec<String>,
    headers: BTreeMap<String, String>,
}

impl BundleNode {
    pub fn new(id: BundleId, location: BundleLocation) -> Self {
        Self {
            id,
            location,
            classpath: vec![".".to_string()],
            headers: BTreeMap::new(),
        }
    }

    pub fn with_classpath<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classpath = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &BundleId {
        &self.id
    }

    pub fn location(&self) -> &BundleLocation {
        &self.location
    }

    /// Declared `Bundle-ClassPath` entries, `.` included
    pub fn classpath(&self) -> &[String] {
        &self.classpath
    }

    /// Classpath entries that name embedded libraries (everything but `.`)
    pub fn embedded_entries(&self) -> impl Iterator<Item = &str> {
        self.classpath
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty() && *entry != "." && *entry != "./")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn is_source_bundle(&self) -> bool {
        self.header(SOURCE_BUNDLE_HEADER).is_some()
    }

    /// Host declared by the source-bundle header, if this is a source bundle
    pub fn source_target(&self) -> Option<Result<SourceBundleTarget>> {
        self.header(SOURCE_BUNDLE_HEADER)
            .map(SourceBundleTarget::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_id_rejects_empty_name() {
        let result = BundleId::parse("", "1.0.0");
        assert!(result.is_err());
        let result = BundleId::parse("   ", "1.0.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_bundle_id_versioned_name() {
        let id = BundleId::parse("org.example.core", "1.0.0.qualifier").unwrap();
        assert_eq!(id.versioned_name(), "org.example.core_1.0.0.qualifier");
        assert_eq!(id.to_string(), "org.example.core_1.0.0.qualifier");
    }

    #[test]
    fn test_bundle_id_rejects_separators() {
        assert!(BundleId::parse("org/example", "1.0.0").is_err());
        assert!(BundleId::parse("a,b", "1.0.0").is_err());
    }

    #[test]
    fn test_embedded_entries_skip_dot() {
        let id = BundleId::parse("org.example", "1.0.0").unwrap();
        let node = BundleNode::new(id, BundleLocation::Archive(PathBuf::from("a.jar")))
            .with_classpath([".", "lib/a.jar", " ", "lib/b.jar"]);
        let entries: Vec<&str> = node.embedded_entries().collect();
        assert_eq!(entries, vec!["lib/a.jar", "lib/b.jar"]);
    }

    #[test]
    fn test_source_bundle_target_parse() {
        let target =
            SourceBundleTarget::parse("org.example.core;version=\"1.2.0.v1\";roots:=\".\"")
                .unwrap();
        assert_eq!(target.symbolic_name, "org.example.core");
        assert_eq!(
            target.version,
            Some(OsgiVersion::new(1, 2, 0, "v1"))
        );
    }

    #[test]
    fn test_source_bundle_target_without_version() {
        let target = SourceBundleTarget::parse("org.example.core").unwrap();
        assert_eq!(target.symbolic_name, "org.example.core");
        assert!(target.version.is_none());
    }

    #[test]
    fn test_source_bundle_detection() {
        let id = BundleId::parse("org.example.core.source", "1.0.0").unwrap();
        let node = BundleNode::new(id, BundleLocation::Archive(PathBuf::from("s.jar")))
            .with_header(SOURCE_BUNDLE_HEADER, "org.example.core;version=\"1.0.0\"");
        assert!(node.is_source_bundle());
        let target = node.source_target().unwrap().unwrap();
        assert_eq!(target.symbolic_name, "org.example.core");
    }
}
