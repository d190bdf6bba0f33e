use super::{ArtifactBundle, BundleId, BundleNode, ConvertedArtifact};
use std::collections::HashMap;

/// Embedded entry whose configured directive could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub path: String,
    pub reason: String,
}

/// Outcome of converting a single bundle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterResult {
    /// Main artifact first (when emitted), then embedded libraries in classpath order
    pub artifacts: Vec<ConvertedArtifact>,
    /// Entries that could not be copied out of the bundle
    pub missing_embedded: Vec<String>,
    /// Auto-detected entries without Maven metadata
    pub unhandled_embedded: Vec<String>,
    pub ignored_embedded: Vec<String>,
    pub rejected_embedded: Vec<RejectedEntry>,
    pub warnings: Vec<String>,
}

impl ConverterResult {
    pub fn main_artifact(&self) -> Option<&ConvertedArtifact> {
        self.artifacts.iter().find(|a| !a.embedded_library)
    }

    pub fn embedded_artifacts(&self) -> impl Iterator<Item = &ConvertedArtifact> {
        self.artifacts.iter().filter(|a| a.embedded_library)
    }

    pub fn has_problems(&self) -> bool {
        !self.missing_embedded.is_empty()
            || !self.unhandled_embedded.is_empty()
            || !self.rejected_embedded.is_empty()
    }
}

/// Everything one mavenize invocation produced.
///
/// Created empty, filled only by the dependency walk and the source-bundle
/// post-pass, then handed to the caller read-only.
#[derive(Debug, Default)]
pub struct MavenizationResult {
    conversions: Vec<(BundleId, ConverterResult)>,
    index: HashMap<BundleId, usize>,
    source_bundles: Vec<BundleNode>,
    artifact_bundles: HashMap<BundleId, Vec<ArtifactBundle>>,
    warnings: Vec<String>,
}

impl MavenizationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_converted(&self, bundle: &BundleId) -> bool {
        self.index.contains_key(bundle)
    }

    /// Memoizes a conversion; returns false if the bundle was already recorded
    pub fn record_conversion(&mut self, bundle: BundleId, result: ConverterResult) -> bool {
        if self.index.contains_key(&bundle) {
            return false;
        }
        self.index.insert(bundle.clone(), self.conversions.len());
        self.conversions.push((bundle, result));
        true
    }

    pub fn converter_result(&self, bundle: &BundleId) -> Option<&ConverterResult> {
        self.index.get(bundle).map(|&i| &self.conversions[i].1)
    }

    /// Conversions in the order the walk recorded them
    pub fn conversions(&self) -> impl Iterator<Item = (&BundleId, &ConverterResult)> {
        self.conversions.iter().map(|(id, result)| (id, result))
    }

    pub fn conversion_count(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_deferred_source(&self, bundle: &BundleId) -> bool {
        self.source_bundles.iter().any(|node| node.id() == bundle)
    }

    /// Defers a source bundle; returns false if it was already deferred
    pub fn defer_source_bundle(&mut self, node: BundleNode) -> bool {
        if self.is_deferred_source(node.id()) {
            return false;
        }
        self.source_bundles.push(node);
        true
    }

    pub fn source_bundles(&self) -> &[BundleNode] {
        &self.source_bundles
    }

    pub fn set_artifact_bundles(&mut self, bundle: BundleId, bundles: Vec<ArtifactBundle>) {
        self.artifact_bundles.insert(bundle, bundles);
    }

    pub fn artifact_bundles(&self, bundle: &BundleId) -> &[ArtifactBundle] {
        self.artifact_bundles
            .get(bundle)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn artifact_bundles_mut(&mut self, bundle: &BundleId) -> Option<&mut Vec<ArtifactBundle>> {
        self.artifact_bundles.get_mut(bundle)
    }

    /// Every bundle's artifact bundles, in conversion order
    pub fn all_artifact_bundles(&self) -> impl Iterator<Item = (&BundleId, &[ArtifactBundle])> {
        self.conversions
            .iter()
            .map(|(id, _)| (id, self.artifact_bundles(id)))
    }

    pub fn artifact_bundle_count(&self) -> usize {
        self.artifact_bundles.values().map(Vec::len).sum()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Walk-level warnings (unknown requirement targets, orphaned source bundles)
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_problems(&self) -> bool {
        self.conversions.iter().any(|(_, result)| result.has_problems())
    }
}
