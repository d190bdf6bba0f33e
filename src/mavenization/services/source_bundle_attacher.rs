use crate::mavenization::domain::{
    ArtifactCoordinate, BundleId, BundleNode, ConvertedArtifact, EmbeddedDirective,
    MavenizationResult, SOURCES_CLASSIFIER,
};

/// SourceBundleAttacher - post-pass pairing source bundles with their hosts
///
/// Source bundles never get POMs of their own. Each one is attached to every
/// ArtifactBundle its host produced as a `sources` artifact; a source bundle
/// whose host cannot be determined is reported and dropped.
pub struct SourceBundleAttacher;

impl SourceBundleAttacher {
    pub fn attach(result: &mut MavenizationResult) {
        let sources: Vec<BundleNode> = result.source_bundles().to_vec();
        for source in &sources {
            match Self::host_of(source) {
                Ok(host) => Self::attach_to_host(result, source, &host),
                Err(reason) => result.warn(format!(
                    "{}: source bundle dropped, {}",
                    source.id(),
                    reason
                )),
            }
        }
    }

    fn host_of(source: &BundleNode) -> std::result::Result<BundleId, String> {
        let target = match source.source_target() {
            Some(Ok(target)) => target,
            Some(Err(e)) => return Err(e.to_string()),
            None => return Err("no source-bundle header".to_string()),
        };
        let Some(version) = target.version else {
            return Err(format!(
                "host '{}' is declared without a version",
                target.symbolic_name
            ));
        };
        BundleId::new(target.symbolic_name, version).map_err(|e| e.to_string())
    }

    fn attach_to_host(result: &mut MavenizationResult, source: &BundleNode, host: &BundleId) {
        if !result.is_converted(host) {
            result.warn(format!(
                "{}: source bundle dropped, host {} was not mavenized",
                source.id(),
                host
            ));
            return;
        }
        if result.artifact_bundles(host).is_empty() {
            result.warn(format!(
                "{}: source bundle dropped, host {} produced no artifacts",
                source.id(),
                host
            ));
            return;
        }
        let Some(bundles) = result.artifact_bundles_mut(host) else {
            return;
        };
        for bundle in bundles.iter_mut() {
            let embedded_library = bundle
                .primary()
                .map(|artifact| artifact.embedded_library)
                .unwrap_or(false);
            let coordinate = ArtifactCoordinate::new(
                bundle.pom.group_id.clone(),
                bundle.pom.artifact_id.clone(),
                bundle.pom.version.clone(),
            )
            .with_classifier(SOURCES_CLASSIFIER);
            bundle.artifacts.push(ConvertedArtifact {
                coordinate,
                source_file: Some(source.location().path().to_path_buf()),
                directive: EmbeddedDirective::Mavenize,
                embedded_library,
                newly_produced: true,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mavenization::domain::{
        ArtifactBundle, ConverterResult, PomModel, SOURCE_BUNDLE_HEADER,
    };
    use crate::mavenization::services::test_support::{id, node};
    use std::path::Path;

    fn main_bundle(gav: &str) -> ArtifactBundle {
        let coordinate = ArtifactCoordinate::parse(gav).unwrap();
        ArtifactBundle {
            pom: PomModel::for_coordinate(&coordinate),
            artifacts: vec![ConvertedArtifact {
                coordinate,
                source_file: None,
                directive: EmbeddedDirective::Mavenize,
                embedded_library: false,
                newly_produced: true,
            }],
        }
    }

    fn result_with_host() -> MavenizationResult {
        let mut result = MavenizationResult::new();
        let host = id("org.example.core", "1.0.0");
        result.record_conversion(host.clone(), ConverterResult::default());
        result.set_artifact_bundles(
            host,
            vec![
                main_bundle("org.example:org.example.core:jar:1.0.0"),
                main_bundle("hans:wurst:jar:3"),
            ],
        );
        result
    }

    fn source(header: &str) -> BundleNode {
        node("org.example.core.source", "1.0.0").with_header(SOURCE_BUNDLE_HEADER, header)
    }

    #[test]
    fn test_sources_attached_to_every_host_bundle() {
        let mut result = result_with_host();
        result.defer_source_bundle(source("org.example.core;version=\"1.0.0\";roots:=\".\""));

        SourceBundleAttacher::attach(&mut result);

        let bundles = result.artifact_bundles(&id("org.example.core", "1.0.0"));
        assert_eq!(
            bundles[0].artifacts[1].coordinate.to_string(),
            "org.example:org.example.core:jar:sources:1.0.0"
        );
        assert_eq!(
            bundles[1].artifacts[1].coordinate.to_string(),
            "hans:wurst:jar:sources:3"
        );
        assert_eq!(
            bundles[0].artifacts[1].source_file.as_deref(),
            Some(Path::new("org.example.core.source.jar"))
        );
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_unknown_host_is_warned() {
        let mut result = result_with_host();
        result.defer_source_bundle(source("org.other;version=\"1.0.0\""));

        SourceBundleAttacher::attach(&mut result);

        assert_eq!(result.warnings().len(), 1);
        let bundles = result.artifact_bundles(&id("org.example.core", "1.0.0"));
        assert_eq!(bundles[0].artifacts.len(), 1);
    }

    #[test]
    fn test_host_without_version_is_warned() {
        let mut result = result_with_host();
        result.defer_source_bundle(source("org.example.core"));

        SourceBundleAttacher::attach(&mut result);

        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("without a version"));
    }
}
