use super::ArtifactCoordinate;
use crate::shared::error::MavenizeError;
use crate::shared::Result;
use std::fmt;

/// Action for one embedded classpath entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmbeddedDirective {
    /// Look for `pom.properties` metadata inside the library
    #[default]
    AutoDetect,
    /// Publish the library under a coordinate derived from its bundle
    Mavenize,
    Ignore,
    /// Refer to an already published artifact instead of the embedded copy
    Replace(ArtifactCoordinate),
}

impl EmbeddedDirective {
    /// Parses `mavenize | ignore | auto_detect | g:a:type[:classifier]:v`
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        let literal = value.trim();
        match literal.to_ascii_lowercase().as_str() {
            "mavenize" => return Ok(EmbeddedDirective::Mavenize),
            "ignore" => return Ok(EmbeddedDirective::Ignore),
            "auto_detect" | "auto-detect" => return Ok(EmbeddedDirective::AutoDetect),
            _ => {}
        }
        if literal.contains(':') {
            if let Ok(coordinate) = ArtifactCoordinate::parse(literal) {
                return Ok(EmbeddedDirective::Replace(coordinate));
            }
        }
        Err(MavenizeError::InvalidDirective {
            key: key.to_string(),
            value: value.to_string(),
            expected: "mavenize, ignore, auto_detect or groupId:artifactId:type[:classifier]:version"
                .to_string(),
        }
        .into())
    }
}

impl fmt::Display for EmbeddedDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddedDirective::AutoDetect => write!(f, "auto_detect"),
            EmbeddedDirective::Mavenize => write!(f, "mavenize"),
            EmbeddedDirective::Ignore => write!(f, "ignore"),
            EmbeddedDirective::Replace(coordinate) => write!(f, "{}", coordinate),
        }
    }
}

/// Action for a bundle as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleDirective {
    #[default]
    Mavenize,
    /// Skip the main artifact when at least one embedded library was converted
    Omit,
    Ignore,
}

impl BundleDirective {
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mavenize" => Ok(BundleDirective::Mavenize),
            "omit" => Ok(BundleDirective::Omit),
            "ignore" => Ok(BundleDirective::Ignore),
            _ => Err(MavenizeError::InvalidDirective {
                key: key.to_string(),
                value: value.to_string(),
                expected: "mavenize, omit or ignore".to_string(),
            }
            .into()),
        }
    }
}
