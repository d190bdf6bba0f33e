use crate::shared::error::MavenizeError;
use crate::shared::Result;
use std::fmt;

/// OSGi version value object: `major.minor.micro[.qualifier]`
///
/// Missing numeric components default to zero. Ordering is numeric on the
/// first three components, then lexicographic on the qualifier (an empty
/// qualifier sorts lowest), which is exactly the OSGi comparison rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OsgiVersion {
    major: u64,
    minor: u64,
    micro: u64,
    qualifier: String,
}

impl OsgiVersion {
    pub fn new(major: u64, minor: u64, micro: u64, qualifier: impl Into<String>) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: qualifier.into(),
        }
    }

    /// Parses an OSGi version literal such as `1`, `1.2`, `1.2.3` or `1.2.3.v2024`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MavenizeError::validation("version must not be empty").into());
        }

        let mut parts = trimmed.splitn(4, '.');
        let major = parse_component(trimmed, parts.next())?;
        let minor = parse_component(trimmed, parts.next())?;
        let micro = parse_component(trimmed, parts.next())?;
        let qualifier = parts.next().unwrap_or_default();

        if !qualifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(MavenizeError::validation(format!(
                "invalid qualifier '{}' in version '{}'",
                qualifier, trimmed
            ))
            .into());
        }

        Ok(Self::new(major, minor, micro, qualifier))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn micro(&self) -> u64 {
        self.micro
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// `major.minor.micro` without the qualifier
    pub fn numeric_triple(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.micro)
    }
}

fn parse_component(whole: &str, component: Option<&str>) -> Result<u64> {
    match component {
        None => Ok(0),
        Some(digits) => digits.parse::<u64>().map_err(|_| {
            MavenizeError::validation(format!(
                "invalid numeric component '{}' in version '{}'",
                digits, whole
            ))
            .into()
        }),
    }
}

impl fmt::Display for OsgiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

/// One end of a version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeBound {
    pub version: OsgiVersion,
    pub inclusive: bool,
}

impl RangeBound {
    pub fn inclusive(version: OsgiVersion) -> Self {
        Self {
            version,
            inclusive: true,
        }
    }

    pub fn exclusive(version: OsgiVersion) -> Self {
        Self {
            version,
            inclusive: false,
        }
    }
}

/// Version range with independently optional, independently inclusive bounds
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionRange {
    low: Option<RangeBound>,
    high: Option<RangeBound>,
}

impl VersionRange {
    pub fn new(low: Option<RangeBound>, high: Option<RangeBound>) -> Self {
        Self { low, high }
    }

    /// Range accepting every version
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// `[version, ∞)`, the meaning of a bare OSGi version in a range position
    pub fn at_least(version: OsgiVersion) -> Self {
        Self::new(Some(RangeBound::inclusive(version)), None)
    }

    /// Parses OSGi range syntax: `[1.0,2.0)`, `(1,2]` or a bare version
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let opening = trimmed.chars().next();
        if !matches!(opening, Some('[') | Some('(')) {
            return Ok(Self::at_least(OsgiVersion::parse(trimmed)?));
        }

        let closing = trimmed.chars().last();
        let high_inclusive = match closing {
            Some(']') => true,
            Some(')') => false,
            _ => {
                return Err(MavenizeError::validation(format!(
                    "version range '{}' must end with ']' or ')'",
                    trimmed
                ))
                .into())
            }
        };

        let body = &trimmed[1..trimmed.len() - 1];
        let (low, high) = body.split_once(',').ok_or_else(|| {
            MavenizeError::validation(format!(
                "version range '{}' must contain two comma-separated bounds",
                trimmed
            ))
        })?;

        Ok(Self::new(
            Some(RangeBound {
                version: OsgiVersion::parse(low)?,
                inclusive: opening == Some('['),
            }),
            Some(RangeBound {
                version: OsgiVersion::parse(high)?,
                inclusive: high_inclusive,
            }),
        ))
    }

    pub fn low(&self) -> Option<&RangeBound> {
        self.low.as_ref()
    }

    pub fn high(&self) -> Option<&RangeBound> {
        self.high.as_ref()
    }

    pub fn is_unbounded(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    pub fn includes(&self, version: &OsgiVersion) -> bool {
        let above_low = match &self.low {
            None => true,
            Some(bound) if bound.inclusive => version >= &bound.version,
            Some(bound) => version > &bound.version,
        };
        let below_high = match &self.high {
            None => true,
            Some(bound) if bound.inclusive => version <= &bound.version,
            Some(bound) => version < &bound.version,
        };
        above_low && below_high
    }

    /// Narrowest range satisfying both `self` and `other`.
    ///
    /// When both sides bound at the same version, the exclusive flag wins.
    pub fn intersect(&self, other: &VersionRange) -> VersionRange {
        let low = match (&self.low, &other.low) {
            (None, bound) | (bound, None) => bound.clone(),
            (Some(a), Some(b)) => Some(if a.version == b.version {
                RangeBound {
                    version: a.version.clone(),
                    inclusive: a.inclusive && b.inclusive,
                }
            } else if a.version > b.version {
                a.clone()
            } else {
                b.clone()
            }),
        };
        let high = match (&self.high, &other.high) {
            (None, bound) | (bound, None) => bound.clone(),
            (Some(a), Some(b)) => Some(if a.version == b.version {
                RangeBound {
                    version: a.version.clone(),
                    inclusive: a.inclusive && b.inclusive,
                }
            } else if a.version < b.version {
                a.clone()
            } else {
                b.clone()
            }),
        };
        VersionRange { low, high }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.low, &self.high) {
            (None, None) => write!(f, "0.0.0"),
            (Some(low), None) if low.inclusive => write!(f, "{}", low.version),
            (low, high) => {
                let (open, low_text) = match low {
                    Some(b) => (if b.inclusive { '[' } else { '(' }, b.version.to_string()),
                    None => ('(', String::new()),
                };
                let (close, high_text) = match high {
                    Some(b) => (if b.inclusive { ']' } else { ')' }, b.version.to_string()),
                    None => (')', String::new()),
                };
                write!(f, "{}{},{}{}", open, low_text, high_text, close)
            }
        }
    }
}
