use crate::mavenization::domain::{
    ArtifactBundle, ConvertedArtifact, ConverterResult, MavenizationResult, PomDependency,
};
use crate::ports::outbound::ManifestFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    tool: Tool,
    summary: Summary,
    bundles: Vec<BundleEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    source_bundles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    bundles: usize,
    artifact_bundles: usize,
    artifacts: usize,
    newly_produced: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BundleEntry {
    bundle: String,
    artifact_bundles: Vec<ArtifactBundleEntry>,
    #[serde(skip_serializing_if = "Diagnostics::is_empty")]
    diagnostics: Diagnostics,
}

#[derive(Debug, Serialize)]
struct ArtifactBundleEntry {
    pom: Pom,
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Pom {
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dependency {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(rename = "type")]
    artifact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    scope: String,
    optional: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    coordinate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    directive: String,
    embedded: bool,
    newly_produced: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unhandled: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignored: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rejected: Vec<Rejected>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl Diagnostics {
    fn is_empty(&self) -> bool {
        self.missing.is_empty()
            && self.unhandled.is_empty()
            && self.ignored.is_empty()
            && self.rejected.is_empty()
            && self.warnings.is_empty()
    }
}

#[derive(Debug, Serialize)]
struct Rejected {
    path: String,
    reason: String,
}

/// JsonManifestFormatter adapter rendering the artifact graph as a JSON manifest
///
/// Bundles appear in conversion order; every artifact bundle lists its POM
/// (with dependencies) and the files that share it.
pub struct JsonManifestFormatter;

impl JsonManifestFormatter {
    pub fn new() -> Self {
        Self
    }

    fn dependency(dependency: &PomDependency) -> Dependency {
        let coordinate = &dependency.coordinate;
        Dependency {
            group_id: coordinate.group_id.clone(),
            artifact_id: coordinate.artifact_id.clone(),
            version: coordinate.version.clone(),
            artifact_type: coordinate.artifact_type.clone(),
            classifier: coordinate.classifier.clone(),
            scope: dependency.scope.to_string(),
            optional: dependency.optional,
        }
    }

    fn artifact(artifact: &ConvertedArtifact) -> Artifact {
        Artifact {
            coordinate: artifact.coordinate.to_string(),
            classifier: artifact.coordinate.classifier.clone(),
            file: artifact
                .source_file
                .as_ref()
                .map(|path| path.display().to_string()),
            directive: artifact.directive.to_string(),
            embedded: artifact.embedded_library,
            newly_produced: artifact.newly_produced,
        }
    }

    fn artifact_bundle(bundle: &ArtifactBundle) -> ArtifactBundleEntry {
        ArtifactBundleEntry {
            pom: Pom {
                group_id: bundle.pom.group_id.clone(),
                artifact_id: bundle.pom.artifact_id.clone(),
                version: bundle.pom.version.clone(),
                packaging: bundle.pom.packaging.clone(),
                dependencies: bundle.pom.dependencies.iter().map(Self::dependency).collect(),
            },
            artifacts: bundle.artifacts.iter().map(Self::artifact).collect(),
        }
    }

    fn diagnostics(result: &ConverterResult) -> Diagnostics {
        Diagnostics {
            missing: result.missing_embedded.clone(),
            unhandled: result.unhandled_embedded.clone(),
            ignored: result.ignored_embedded.clone(),
            rejected: result
                .rejected_embedded
                .iter()
                .map(|r| Rejected {
                    path: r.path.clone(),
                    reason: r.reason.clone(),
                })
                .collect(),
            warnings: result.warnings.clone(),
        }
    }
}

impl Default for JsonManifestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for JsonManifestFormatter {
    fn format(&self, result: &MavenizationResult) -> Result<String> {
        let bundles: Vec<BundleEntry> = result
            .conversions()
            .map(|(id, converted)| BundleEntry {
                bundle: id.versioned_name(),
                artifact_bundles: result
                    .artifact_bundles(id)
                    .iter()
                    .map(Self::artifact_bundle)
                    .collect(),
                diagnostics: Self::diagnostics(converted),
            })
            .collect();

        let artifacts = || {
            result
                .all_artifact_bundles()
                .flat_map(|(_, bundles)| bundles.iter())
                .flat_map(|bundle| bundle.artifacts.iter())
        };
        let manifest = Manifest {
            tool: Tool {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            summary: Summary {
                bundles: result.conversion_count(),
                artifact_bundles: result.artifact_bundle_count(),
                artifacts: artifacts().count(),
                newly_produced: artifacts().filter(|a| a.newly_produced).count(),
            },
            bundles,
            source_bundles: result
                .source_bundles()
                .iter()
                .map(|node| node.id().versioned_name())
                .collect(),
            warnings: result.warnings().to_vec(),
        };

        serde_json::to_string_pretty(&manifest)
            .map_err(|e| anyhow::anyhow!("Failed to serialize manifest: {}", e))
    }
}
