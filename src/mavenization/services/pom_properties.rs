use crate::mavenization::domain::ArtifactCoordinate;
use std::collections::HashMap;

const MAVEN_METADATA_ROOT: [&str; 2] = ["META-INF", "maven"];
const POM_PROPERTIES_FILE: &str = "pom.properties";

/// Tests whether `entry` is `META-INF/maven/<groupId>/<artifactId>/pom.properties`
///
/// Exactly five segments; deeper or shallower copies are shaded leftovers and
/// do not describe the library itself.
pub fn is_pom_properties_entry(entry: &str) -> bool {
    let segments: Vec<&str> = entry.trim_start_matches('/').split('/').collect();
    matches!(
        segments.as_slice(),
        [meta, maven, group, artifact, file]
            if *meta == MAVEN_METADATA_ROOT[0]
                && *maven == MAVEN_METADATA_ROOT[1]
                && !group.is_empty()
                && !artifact.is_empty()
                && *file == POM_PROPERTIES_FILE
    )
}

/// Parses Java properties text into key/value pairs
///
/// Supports `=`, `:` and whitespace separators and `#`/`!` comments.
/// Line continuations are not needed for Maven metadata and are not handled.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let split_at = line.find(['=', ':', ' ', '\t'])?;
            let key = line[..split_at].trim();
            let rest = line[split_at..].trim_start();
            let value = rest
                .strip_prefix('=')
                .or_else(|| rest.strip_prefix(':'))
                .unwrap_or(rest)
                .trim();
            (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Reads the Maven coordinate recorded in a `pom.properties` file
///
/// # Returns
/// `None` if groupId, artifactId or version is missing or empty
pub fn coordinate_from_properties(content: &str) -> Option<ArtifactCoordinate> {
    let properties = parse_properties(content);
    let get = |key: &str| {
        properties
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    };
    Some(ArtifactCoordinate::new(
        get("groupId")?,
        get("artifactId")?,
        get("version")?,
    ))
}
