use crate::mavenization::domain::{
    ArtifactCoordinate, BundleId, BundlePattern, OsgiVersion, RangeBound, VersionRange,
};
use crate::shared::error::MavenizeError;
use crate::shared::Result;

/// Namespaces that keep three segments in the derived groupId
pub const DEFAULT_DEEP_GROUP_PREFIXES: &[&str] =
    &["org.eclipse", "org.apache", "org.codehaus", "com.sun"];

/// Placeholder substituted in group-id remap templates
pub const BUNDLE_GROUP_ID_PLACEHOLDER: &str = "${bundle.groupId}";

const SNAPSHOT_SUFFIX: &str = "SNAPSHOT";

/// Predicate deciding that a qualifier denotes a snapshot build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotRule {
    /// Qualifier equals the given literal
    Qualifier(String),
    /// `SNAPSHOT` or `<anything>-SNAPSHOT`
    MavenSnapshot,
}

impl SnapshotRule {
    pub fn matches(&self, qualifier: &str) -> bool {
        match self {
            SnapshotRule::Qualifier(literal) => qualifier == literal,
            SnapshotRule::MavenSnapshot => {
                let upper = qualifier.to_ascii_uppercase();
                upper == SNAPSHOT_SUFFIX || upper.ends_with("-SNAPSHOT")
            }
        }
    }
}

/// Rewrites the derived groupId of bundles matching `pattern`
#[derive(Debug, Clone)]
pub struct GroupIdRemap {
    pattern: BundlePattern,
    template: String,
}

impl GroupIdRemap {
    pub fn new(pattern: &str, template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(MavenizeError::validation(format!(
                "group id remap for '{}' has an empty template",
                pattern
            ))
            .into());
        }
        Ok(Self {
            pattern: BundlePattern::parse(pattern)?,
            template,
        })
    }

    fn apply(&self, symbolic_name: &str, derived: &str) -> Option<String> {
        self.pattern
            .matches(symbolic_name)
            .then(|| self.template.replace(BUNDLE_GROUP_ID_PLACEHOLDER, derived))
    }
}

/// Naming policy injected into the strategy
#[derive(Debug, Clone)]
pub struct CoordinatePolicy {
    pub deep_group_prefixes: Vec<String>,
    pub group_id_prefix: Option<String>,
    /// First matching rule wins
    pub group_id_remaps: Vec<GroupIdRemap>,
    pub trim_qualifiers: bool,
    /// Any matching rule marks a version as snapshot
    pub snapshot_rules: Vec<SnapshotRule>,
}

impl Default for CoordinatePolicy {
    fn default() -> Self {
        Self {
            deep_group_prefixes: DEFAULT_DEEP_GROUP_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            group_id_prefix: None,
            group_id_remaps: Vec::new(),
            trim_qualifiers: false,
            snapshot_rules: vec![
                SnapshotRule::Qualifier("qualifier".to_string()),
                SnapshotRule::MavenSnapshot,
            ],
        }
    }
}

/// CoordinateStrategy service - maps OSGi identities and versions to Maven ones
///
/// Every function is a pure function of its arguments and the policy.
#[derive(Debug, Clone, Default)]
pub struct CoordinateStrategy {
    policy: CoordinatePolicy,
}

impl CoordinateStrategy {
    pub fn new(policy: CoordinatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CoordinatePolicy {
        &self.policy
    }

    /// Derives the groupId: three segments under a deep-group prefix, two
    /// otherwise, the whole name when it is shorter; then remap, then prefix
    pub fn group_id(&self, symbolic_name: &str) -> Result<String> {
        let name = require_name(symbolic_name)?;
        let depth = if self.is_deep_group(name) { 3 } else { 2 };
        let segments: Vec<&str> = name.split('.').collect();
        let mut group_id = if segments.len() < depth {
            name.to_string()
        } else {
            segments[..depth].join(".")
        };

        if let Some(remapped) = self
            .policy
            .group_id_remaps
            .iter()
            .find_map(|remap| remap.apply(name, &group_id))
        {
            group_id = remapped;
        }

        if let Some(prefix) = self.policy.group_id_prefix.as_deref() {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                group_id = if prefix.ends_with('.') {
                    format!("{}{}", prefix, group_id)
                } else {
                    format!("{}.{}", prefix, group_id)
                };
            }
        }

        Ok(group_id)
    }

    fn is_deep_group(&self, name: &str) -> bool {
        self.policy.deep_group_prefixes.iter().any(|prefix| {
            name == prefix
                || name
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    pub fn artifact_id(&self, symbolic_name: &str) -> Result<String> {
        Ok(require_name(symbolic_name)?.to_string())
    }

    /// File-name stem of an embedded library path: `lib/foo-1.2.jar` -> `foo-1.2`
    pub fn embedded_artifact_id(&self, entry_path: &str) -> Result<String> {
        let file_name = entry_path
            .trim()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        let stem = match file_name.rsplit_once('.') {
            Some((stem, _extension)) if !stem.is_empty() => stem,
            _ => file_name,
        };
        if stem.is_empty() {
            return Err(MavenizeError::validation(format!(
                "embedded library path '{}' has no file name",
                entry_path
            ))
            .into());
        }
        Ok(stem.to_string())
    }

    pub fn is_snapshot(&self, version: &OsgiVersion) -> bool {
        self.policy
            .snapshot_rules
            .iter()
            .any(|rule| rule.matches(version.qualifier()))
    }

    /// `major.minor.micro` plus `-SNAPSHOT`, `-<qualifier>` or nothing
    pub fn maven_version(&self, version: &OsgiVersion) -> String {
        let triple = version.numeric_triple();
        if self.is_snapshot(version) {
            format!("{}-{}", triple, SNAPSHOT_SUFFIX)
        } else if !version.qualifier().is_empty() && !self.policy.trim_qualifiers {
            format!("{}-{}", triple, version.qualifier())
        } else {
            triple
        }
    }

    /// Translates an OSGi range into Maven range syntax.
    ///
    /// Open-ended ranges collapse to the snapshot version when the low bound
    /// is a snapshot. Bounds drop trailing zero components and qualifiers.
    ///
    /// # Errors
    /// Returns a validation error for a range without any bound
    pub fn maven_version_range(&self, range: &VersionRange) -> Result<String> {
        match (range.low(), range.high()) {
            (None, None) => Err(MavenizeError::validation(
                "cannot translate a version range without bounds",
            )
            .into()),
            (Some(low), None) if self.is_snapshot(&low.version) => Ok(format!(
                "{}-{}",
                low.version.numeric_triple(),
                SNAPSHOT_SUFFIX
            )),
            (Some(low), None) => Ok(format!("{}{},)", low_delimiter(low), trimmed_bound(low))),
            (None, Some(high)) => Ok(format!(
                "(,{}{}",
                trimmed_bound(high),
                high_delimiter(high)
            )),
            (Some(low), Some(high)) => Ok(format!(
                "{}{},{}{}",
                low_delimiter(low),
                trimmed_bound(low),
                trimmed_bound(high),
                high_delimiter(high)
            )),
        }
    }

    /// Coordinate of a bundle's own artifact
    pub fn main_coordinate(&self, bundle: &BundleId) -> Result<ArtifactCoordinate> {
        Ok(ArtifactCoordinate::new(
            self.group_id(bundle.symbolic_name())?,
            self.artifact_id(bundle.symbolic_name())?,
            self.maven_version(bundle.version()),
        ))
    }

    /// Coordinate synthesized for an explicitly mavenized embedded library
    pub fn embedded_coordinate(
        &self,
        bundle: &BundleId,
        entry_path: &str,
    ) -> Result<ArtifactCoordinate> {
        Ok(ArtifactCoordinate::new(
            self.group_id(bundle.symbolic_name())?,
            self.embedded_artifact_id(entry_path)?,
            self.maven_version(bundle.version()),
        ))
    }
}

fn require_name(symbolic_name: &str) -> Result<&str> {
    let name = symbolic_name.trim();
    if name.is_empty() {
        return Err(MavenizeError::validation("bundle symbolic name must not be empty").into());
    }
    Ok(name)
}

fn low_delimiter(bound: &RangeBound) -> char {
    if bound.inclusive {
        '['
    } else {
        '('
    }
}

fn high_delimiter(bound: &RangeBound) -> char {
    if bound.inclusive {
        ']'
    } else {
        ')'
    }
}

/// `1.0.0` -> `1`, `1.1.0` -> `1.1`, `1.0.1` -> `1.0.1`; qualifiers dropped
fn trimmed_bound(bound: &RangeBound) -> String {
    let version = &bound.version;
    if version.minor() == 0 && version.micro() == 0 {
        version.major().to_string()
    } else if version.micro() == 0 {
        format!("{}.{}", version.major(), version.minor())
    } else {
        version.numeric_triple()
    }
}
