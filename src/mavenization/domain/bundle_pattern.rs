use super::BundleId;
use crate::shared::error::MavenizeError;
use crate::shared::Result;

/// Maximum length of a single pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 1024;

/// Compiled bundle identity pattern.
///
/// Syntax: comma-separated alternatives of `.`-separated segments. `*`
/// matches exactly one segment, `**` any number of segments (including
/// none), `*` inside a literal segment matches any run of characters within
/// that segment, and a leading `!` turns the alternative into an exclude.
/// A matching exclude vetoes the whole pattern. A pattern made only of
/// excludes matches everything it does not exclude; an empty pattern
/// matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePattern {
    original: String,
    includes: Vec<Vec<Segment>>,
    excludes: Vec<Vec<Segment>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `*`
    One,
    /// `**`
    AnyDepth,
    Literal(String),
    /// Literal with in-segment wildcards, split at each `*`
    Glob(Vec<String>),
}

impl Segment {
    fn parse(pattern: &str, raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(invalid(pattern, "empty segment"));
        }
        match raw {
            "*" => Ok(Segment::One),
            "**" => Ok(Segment::AnyDepth),
            _ if raw.contains("**") => Err(invalid(
                pattern,
                &format!("'**' must be a whole segment, found '{}'", raw),
            )),
            _ if raw.contains('*') => Ok(Segment::Glob(
                raw.split('*').map(str::to_string).collect(),
            )),
            _ => Ok(Segment::Literal(raw.to_string())),
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        match self {
            Segment::One | Segment::AnyDepth => true,
            Segment::Literal(literal) => literal == candidate,
            Segment::Glob(parts) => glob_matches(parts, candidate),
        }
    }
}

fn invalid(pattern: &str, reason: &str) -> anyhow::Error {
    MavenizeError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// `parts` come from splitting the segment at `*`: the first part anchors
/// the start, the last part anchors the end, the rest must appear in order
fn glob_matches(parts: &[String], candidate: &str) -> bool {
    let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
        return false;
    };
    if !candidate.starts_with(first.as_str()) {
        return false;
    }
    let mut position = first.len();
    for middle in &parts[1..parts.len() - 1] {
        match candidate[position..].find(middle.as_str()) {
            Some(found) => position += found + middle.len(),
            None => return false,
        }
    }
    candidate.len() >= position + last.len() && candidate[position..].ends_with(last.as_str())
}

fn segments_match(pattern: &[Segment], candidate: &[&str]) -> bool {
    match pattern.split_first() {
        None => candidate.is_empty(),
        Some((Segment::AnyDepth, rest)) => {
            (0..=candidate.len()).any(|skip| segments_match(rest, &candidate[skip..]))
        }
        Some((segment, rest)) => match candidate.split_first() {
            Some((head, tail)) => segment.matches(head) && segments_match(rest, tail),
            None => false,
        },
    }
}

impl BundlePattern {
    /// Pattern matching every candidate
    pub fn any() -> Self {
        Self {
            original: String::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(invalid(
                pattern,
                &format!("pattern is longer than {} characters", MAX_PATTERN_LENGTH),
            ));
        }
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Ok(Self::any());
        }

        let mut includes = Vec::new();
        let mut excludes = Vec::new();
        for alternative in trimmed.split(',').map(str::trim) {
            if alternative.is_empty() {
                return Err(invalid(pattern, "empty alternative"));
            }
            let (negated, body) = match alternative.strip_prefix('!') {
                Some(rest) => (true, rest.trim()),
                None => (false, alternative),
            };
            if body.is_empty() {
                return Err(invalid(pattern, "'!' must be followed by a pattern"));
            }
            let segments = body
                .split('.')
                .map(|raw| Segment::parse(pattern, raw))
                .collect::<Result<Vec<_>>>()?;
            if negated {
                excludes.push(segments);
            } else {
                includes.push(segments);
            }
        }

        Ok(Self {
            original: trimmed.to_string(),
            includes,
            excludes,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Tests one identity string
    pub fn matches(&self, candidate: &str) -> bool {
        self.matches_any(&[candidate])
    }

    /// Tests several identity strings of the same subject: an exclude hitting
    /// any of them vetoes, an include hitting any of them matches
    pub fn matches_any(&self, candidates: &[&str]) -> bool {
        let split: Vec<Vec<&str>> = candidates.iter().map(|c| c.split('.').collect()).collect();
        let excluded = self
            .excludes
            .iter()
            .any(|exclude| split.iter().any(|segments| segments_match(exclude, segments)));
        if excluded {
            return false;
        }
        self.includes.is_empty()
            || self
                .includes
                .iter()
                .any(|include| split.iter().any(|segments| segments_match(include, segments)))
    }

    /// Matches `symbolicName_version` or bare `symbolicName`
    pub fn matches_bundle(&self, bundle: &BundleId) -> bool {
        let versioned = bundle.versioned_name();
        self.matches_any(&[versioned.as_str(), bundle.symbolic_name()])
    }
}
