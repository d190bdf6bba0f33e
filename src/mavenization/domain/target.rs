use crate::shared::error::MavenizeError;
use std::fmt;
use std::str::FromStr;

/// Platform the produced artifacts are meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetType {
    /// Plain Java: embedded libraries are unwrapped into artifacts of their own
    #[default]
    Java,
    /// Raw OSGi: bundles are published as-is
    Osgi,
}

impl TargetType {
    pub fn unwraps_embedded_libraries(&self) -> bool {
        matches!(self, TargetType::Java)
    }
}

impl FromStr for TargetType {
    type Err = MavenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(TargetType::Java),
            "osgi" => Ok(TargetType::Osgi),
            other => Err(MavenizeError::validation(format!(
                "unknown target type '{}', expected 'java' or 'osgi'",
                other
            ))),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Java => write!(f, "java"),
            TargetType::Osgi => write!(f, "osgi"),
        }
    }
}
