use super::EmbeddedDirective;
use crate::shared::error::MavenizeError;
use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";
pub const SOURCES_CLASSIFIER: &str = "sources";

/// Maven coordinate: `groupId:artifactId:type[:classifier]:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub artifact_type: String,
    pub classifier: Option<String>,
}

impl ArtifactCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: DEFAULT_ARTIFACT_TYPE.to_string(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Parses `groupId:artifactId:type[:classifier]:version`
    pub fn parse(literal: &str) -> Result<Self> {
        let parts: Vec<&str> = literal.trim().split(':').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(MavenizeError::validation(format!(
                "coordinate '{}' contains an empty component",
                literal
            ))
            .into());
        }
        match parts.as_slice() {
            [group_id, artifact_id, artifact_type, version] => Ok(Self {
                group_id: group_id.to_string(),
                artifact_id: artifact_id.to_string(),
                version: version.to_string(),
                artifact_type: artifact_type.to_string(),
                classifier: None,
            }),
            [group_id, artifact_id, artifact_type, classifier, version] => Ok(Self {
                group_id: group_id.to_string(),
                artifact_id: artifact_id.to_string(),
                version: version.to_string(),
                artifact_type: artifact_type.to_string(),
                classifier: Some(classifier.to_string()),
            }),
            _ => Err(MavenizeError::validation(format!(
                "coordinate '{}' must have the form groupId:artifactId:type[:classifier]:version",
                literal
            ))
            .into()),
        }
    }

    /// True when both coordinates name the same file modulo version
    pub fn same_artifact(&self, other: &ArtifactCoordinate) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.artifact_type == other.artifact_type
            && self.classifier == other.classifier
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id, self.artifact_id, self.artifact_type
        )?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// One physical artifact produced (or referenced) for a bundle
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedArtifact {
    pub coordinate: ArtifactCoordinate,
    /// File backing the artifact; `None` for replaced libraries, which are never copied
    pub source_file: Option<PathBuf>,
    pub directive: EmbeddedDirective,
    pub embedded_library: bool,
    /// False for coordinates assumed to be published already
    pub newly_produced: bool,
}

/// Dependency scope in the produced POM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyScope {
    #[default]
    Compile,
    Provided,
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyScope::Compile => write!(f, "compile"),
            DependencyScope::Provided => write!(f, "provided"),
        }
    }
}

/// POM dependency entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDependency {
    /// Coordinate whose `version` holds either an exact version or a Maven range
    pub coordinate: ArtifactCoordinate,
    pub scope: DependencyScope,
    pub optional: bool,
}

/// POM stub shared by the artifacts of one artifact bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomModel {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub dependencies: Vec<PomDependency>,
}

impl PomModel {
    pub fn for_coordinate(coordinate: &ArtifactCoordinate) -> Self {
        Self {
            group_id: coordinate.group_id.clone(),
            artifact_id: coordinate.artifact_id.clone(),
            version: coordinate.version.clone(),
            packaging: coordinate.artifact_type.clone(),
            dependencies: Vec::new(),
        }
    }

    /// Adds `dependency` unless the same artifact is already listed or it
    /// points back at this POM; the first entry for an artifact wins
    pub fn add_dependency(&mut self, dependency: PomDependency) -> bool {
        let dep = &dependency.coordinate;
        let is_self = dep.group_id == self.group_id
            && dep.artifact_id == self.artifact_id
            && dep.classifier.is_none();
        if is_self
            || self
                .dependencies
                .iter()
                .any(|existing| existing.coordinate.same_artifact(dep))
        {
            return false;
        }
        self.dependencies.push(dependency);
        true
    }
}

/// A POM plus the ordered artifacts sharing it
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    pub pom: PomModel,
    pub artifacts: Vec<ConvertedArtifact>,
}

impl ArtifactBundle {
    /// The artifact the POM was derived from
    pub fn primary(&self) -> Option<&ConvertedArtifact> {
        self.artifacts.first()
    }
}
