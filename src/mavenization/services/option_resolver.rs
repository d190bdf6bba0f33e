use crate::mavenization::domain::{BundleId, BundlePattern, OptionSet, Requirement};
use crate::shared::error::MavenizeError;
use crate::shared::Result;

/// Matched `(key, value)` pairs in option-set order
pub type ResolvedOptions = Vec<(String, String)>;

/// How option keys are related to a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Every key ending with the suffix whose prefix pattern matches the bundle
    MatchPattern,
    /// Exact keys only, most specific first; at most one result
    EqualValue,
}

/// OptionResolver service - scoped lookups in the flat option set
///
/// Pure functions over the option set; no state.
pub struct OptionResolver;

impl OptionResolver {
    /// Resolves the options addressed to `bundle` under `suffix`
    ///
    /// # Errors
    /// Returns an error if a candidate key's prefix is not a valid pattern
    pub fn resolve(
        bundle: &BundleId,
        options: &OptionSet,
        suffix: &str,
        mode: ResolutionMode,
    ) -> Result<ResolvedOptions> {
        if suffix.is_empty() {
            return Err(MavenizeError::validation("option suffix must not be empty").into());
        }
        match mode {
            ResolutionMode::MatchPattern => Self::resolve_by_pattern(bundle, options, suffix),
            ResolutionMode::EqualValue => Ok(Self::resolve_by_key(bundle, options, suffix)),
        }
    }

    fn resolve_by_pattern(
        bundle: &BundleId,
        options: &OptionSet,
        suffix: &str,
    ) -> Result<ResolvedOptions> {
        let mut resolved = Vec::new();
        for (key, value) in options.iter() {
            let Some(prefix) = key.strip_suffix(suffix) else {
                continue;
            };
            if BundlePattern::parse(prefix)?.matches_bundle(bundle) {
                resolved.push((key.to_string(), value.to_string()));
            }
        }
        Ok(resolved)
    }

    fn resolve_by_key(bundle: &BundleId, options: &OptionSet, suffix: &str) -> ResolvedOptions {
        let candidates = [
            format!("{}{}", bundle.versioned_name(), suffix),
            format!("{}{}", bundle.symbolic_name(), suffix),
            suffix.to_string(),
        ];
        candidates
            .into_iter()
            .find_map(|key| {
                options
                    .get(&key)
                    .map(|value| (key.clone(), value.to_string()))
            })
            .into_iter()
            .collect()
    }

    /// First pattern-matched value for `bundle`, in option-set order
    pub fn first_value(
        bundle: &BundleId,
        options: &OptionSet,
        suffix: &str,
    ) -> Result<Option<(String, String)>> {
        Ok(Self::resolve(bundle, options, suffix, ResolutionMode::MatchPattern)?
            .into_iter()
            .next())
    }

    /// First pattern-matched value parsed as a boolean, or `default`
    ///
    /// # Errors
    /// Returns a validation error for values that are not booleans
    pub fn boolean_option(
        bundle: &BundleId,
        options: &OptionSet,
        suffix: &str,
        default: bool,
    ) -> Result<bool> {
        match Self::first_value(bundle, options, suffix)? {
            None => Ok(default),
            Some((key, value)) => parse_bool(&value).ok_or_else(|| {
                MavenizeError::validation(format!(
                    "option '{}' expects a boolean, found '{}'",
                    key, value
                ))
                .into()
            }),
        }
    }

    /// Tests whether any option scoped to `requirement.from` names
    /// `requirement.to` in its value pattern.
    ///
    /// An entry whose value pattern excludes the target only fails that entry.
    pub fn requirement_matches(
        requirement: &Requirement,
        options: &OptionSet,
        suffix: &str,
    ) -> Result<bool> {
        let scoped = Self::resolve(
            &requirement.from,
            options,
            suffix,
            ResolutionMode::MatchPattern,
        )?;
        for (_, value) in scoped {
            if BundlePattern::parse(&value)?.matches_bundle(&requirement.to) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
