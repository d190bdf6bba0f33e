//! Configuration file support for osgi-mavenize.
//!
//! Provides YAML-based configuration through `mavenize.config.yml` files:
//! the ordered option set, coordinate naming rules and the build target.

use anyhow::{bail, Context};
use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::mavenization::domain::{OptionSet, TargetType};
use crate::mavenization::services::{CoordinatePolicy, GroupIdRemap, SnapshotRule};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "mavenize.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub target: Option<String>,
    pub format: Option<String>,
    pub work_dir: Option<PathBuf>,
    /// Kept as a mapping so that declaration order survives parsing.
    pub options: Option<Mapping>,
    pub coordinates: Option<CoordinatesConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, Value>,
}

/// Overrides for the coordinate naming rules.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CoordinatesConfig {
    pub deep_group_prefixes: Option<Vec<String>>,
    pub group_id_prefix: Option<String>,
    #[serde(default)]
    pub group_id_remaps: Vec<GroupIdRemapConfig>,
    pub trim_qualifiers: Option<bool>,
    pub snapshot_qualifiers: Option<Vec<String>>,
    pub maven_snapshot_qualifiers: Option<bool>,
}

/// Rewrites the groupId of bundles matching `pattern`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupIdRemapConfig {
    pub pattern: String,
    pub group_id: String,
}

impl ConfigFile {
    /// Options in file order; scalar values are stringified.
    pub fn option_set(&self) -> Result<OptionSet> {
        let mut options = OptionSet::new();
        let Some(mapping) = &self.options else {
            return Ok(options);
        };
        for (key, value) in mapping {
            let key =
                scalar_to_string(key).context("Invalid config: option keys must be scalars")?;
            let value = scalar_to_string(value).with_context(|| {
                format!("Invalid config: option '{}' must have a scalar value", key)
            })?;
            options.insert(key, value);
        }
        Ok(options)
    }

    pub fn target(&self) -> Result<Option<TargetType>> {
        self.target
            .as_deref()
            .map(|target| target.parse::<TargetType>().map_err(anyhow::Error::from))
            .transpose()
    }

    /// Default naming policy with every configured field applied on top.
    pub fn coordinate_policy(&self) -> Result<CoordinatePolicy> {
        let mut policy = CoordinatePolicy::default();
        let Some(coordinates) = &self.coordinates else {
            return Ok(policy);
        };

        if let Some(prefixes) = &coordinates.deep_group_prefixes {
            policy.deep_group_prefixes = prefixes.clone();
        }
        if let Some(prefix) = &coordinates.group_id_prefix {
            policy.group_id_prefix = Some(prefix.clone()).filter(|p| !p.trim().is_empty());
        }
        policy.group_id_remaps = coordinates
            .group_id_remaps
            .iter()
            .map(|remap| GroupIdRemap::new(&remap.pattern, remap.group_id.clone()))
            .collect::<Result<Vec<_>>>()?;
        if let Some(trim) = coordinates.trim_qualifiers {
            policy.trim_qualifiers = trim;
        }
        if coordinates.snapshot_qualifiers.is_some()
            || coordinates.maven_snapshot_qualifiers.is_some()
        {
            let qualifiers = coordinates
                .snapshot_qualifiers
                .clone()
                .unwrap_or_else(|| vec!["qualifier".to_string()]);
            let mut rules: Vec<SnapshotRule> =
                qualifiers.into_iter().map(SnapshotRule::Qualifier).collect();
            if coordinates.maven_snapshot_qualifiers.unwrap_or(true) {
                rules.push(SnapshotRule::MavenSnapshot);
            }
            policy.snapshot_rules = rules;
        }
        Ok(policy)
    }
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        _ => bail!("expected a string, number or boolean"),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Fails early on values that would only be rejected mid-walk.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.target()?;
    config.option_set()?;
    config.coordinate_policy()?;
    if let Some(format) = &config.format {
        if let Err(e) = format.parse::<crate::application::dto::OutputFormat>() {
            bail!("{}\n\n💡 Hint: Set 'format' to 'json' or 'markdown'.", e);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mavenization::domain::BundleId;
    use crate::mavenization::services::CoordinateStrategy;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
target: osgi
format: markdown
work_dir: build/staging
options:
  "org.example.**@requirements.provided": "org.eclipse.**"
  "org.example.core/lib/a.jar": ignore
  "@embeddedLibraries.optional": true
coordinates:
  deep_group_prefixes: [org.eclipse]
  group_id_prefix: osgified
  group_id_remaps:
    - pattern: "org.example.**"
      group_id: "com.acme.${bundle.groupId}"
  trim_qualifiers: true
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.target().unwrap(), Some(TargetType::Osgi));
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.work_dir, Some(PathBuf::from("build/staging")));

        let options = config.option_set().unwrap();
        let keys: Vec<&str> = options.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "org.example.**@requirements.provided",
                "org.example.core/lib/a.jar",
                "@embeddedLibraries.optional",
            ]
        );
        assert_eq!(options.get("@embeddedLibraries.optional"), Some("true"));

        let policy = config.coordinate_policy().unwrap();
        assert_eq!(policy.deep_group_prefixes, vec!["org.eclipse".to_string()]);
        assert_eq!(policy.group_id_prefix.as_deref(), Some("osgified"));
        assert_eq!(policy.group_id_remaps.len(), 1);
        assert!(policy.trim_qualifiers);
    }

    #[test]
    fn test_snapshot_rules_from_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
coordinates:
  snapshot_qualifiers: [nightly]
  maven_snapshot_qualifiers: false
"#,
        );

        let policy = load_config_from_path(&path)
            .unwrap()
            .coordinate_policy()
            .unwrap();
        assert_eq!(
            policy.snapshot_rules,
            vec![SnapshotRule::Qualifier("nightly".to_string())]
        );

        let strategy = CoordinateStrategy::new(policy);
        let nightly = BundleId::parse("org.example.core", "1.0.0.nightly").unwrap();
        let qualifier = BundleId::parse("org.example.core", "1.0.0.qualifier").unwrap();
        assert!(strategy.is_snapshot(nightly.version()));
        assert!(!strategy.is_snapshot(qualifier.version()));
    }

    #[test]
    fn test_missing_sections_keep_defaults() {
        let config = ConfigFile::default();
        assert!(config.option_set().unwrap().is_empty());
        assert_eq!(config.target().unwrap(), None);
        let policy = config.coordinate_policy().unwrap();
        assert_eq!(
            policy.snapshot_rules,
            CoordinatePolicy::default().snapshot_rules
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "target: java\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.target().unwrap(), Some(TargetType::Java));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "target: android\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("android"));
    }

    #[test]
    fn test_non_scalar_option_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "options:\n  \"a@directive\": [mavenize]\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("must have a scalar value"));
    }

    #[test]
    fn test_invalid_remap_pattern_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
coordinates:
  group_id_remaps:
    - pattern: "org..example"
      group_id: "com.acme"
"#,
        );

        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "target: java\nflavour: vanilla\n");

        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("flavour"));
    }
}
