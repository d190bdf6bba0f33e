use crate::mavenization::domain::{ArtifactBundle, BundleId, ConverterResult, MavenizationResult};
use crate::ports::outbound::ManifestFormatter;
use crate::shared::Result;

/// Markdown table header for produced artifacts
const ARTIFACT_TABLE_HEADER: &str = "| Artifact | Directive | Embedded | Newly Produced | File |\n";

/// Markdown table separator line for produced artifacts
const ARTIFACT_TABLE_SEPARATOR: &str = "|----------|-----------|----------|----------------|------|\n";

/// Markdown table header for POM dependencies
const DEPENDENCY_TABLE_HEADER: &str = "| Dependency | Version | Scope | Optional |\n";

/// Markdown table separator line for POM dependencies
const DEPENDENCY_TABLE_SEPARATOR: &str = "|------------|---------|-------|----------|\n";

/// MarkdownFormatter adapter rendering a human-readable mavenization report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "yes"
        } else {
            "no"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String) {
        output.push_str("# OSGi Mavenization Report\n\n");
    }

    fn render_summary(&self, output: &mut String, result: &MavenizationResult) {
        let artifacts: Vec<_> = result
            .all_artifact_bundles()
            .flat_map(|(_, bundles)| bundles.iter())
            .flat_map(|bundle| bundle.artifacts.iter())
            .collect();
        let newly_produced = artifacts.iter().filter(|a| a.newly_produced).count();

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n|--------|-------|\n");
        output.push_str(&format!("| Bundles converted | {} |\n", result.conversion_count()));
        output.push_str(&format!(
            "| Artifact bundles (POMs) | {} |\n",
            result.artifact_bundle_count()
        ));
        output.push_str(&format!("| Artifacts | {} |\n", artifacts.len()));
        output.push_str(&format!("| Newly produced | {} |\n", newly_produced));
        output.push_str(&format!(
            "| Source bundles | {} |\n\n",
            result.source_bundles().len()
        ));
    }

    fn render_bundle(
        &self,
        output: &mut String,
        id: &BundleId,
        bundles: &[ArtifactBundle],
        converted: &ConverterResult,
    ) {
        output.push_str(&format!("### {}\n\n", id));
        if bundles.is_empty() {
            output.push_str("*No artifacts produced.*\n\n");
        }
        for bundle in bundles {
            self.render_artifact_bundle(output, bundle);
        }
        self.render_diagnostics(output, converted);
    }

    fn render_artifact_bundle(&self, output: &mut String, bundle: &ArtifactBundle) {
        let pom = &bundle.pom;
        output.push_str(&format!(
            "#### `{}:{}:{}`\n\n",
            pom.group_id, pom.artifact_id, pom.version
        ));

        output.push_str(ARTIFACT_TABLE_HEADER);
        output.push_str(ARTIFACT_TABLE_SEPARATOR);
        for artifact in &bundle.artifacts {
            let file = artifact
                .source_file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&artifact.coordinate.to_string()),
                Self::escape_cell(&artifact.directive.to_string()),
                Self::yes_no(artifact.embedded_library),
                Self::yes_no(artifact.newly_produced),
                Self::escape_cell(&file)
            ));
        }
        output.push('\n');

        if pom.dependencies.is_empty() {
            return;
        }
        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for dependency in &pom.dependencies {
            let coordinate = &dependency.coordinate;
            let name = match &coordinate.classifier {
                Some(classifier) => format!(
                    "{}:{}:{}",
                    coordinate.group_id, coordinate.artifact_id, classifier
                ),
                None => format!("{}:{}", coordinate.group_id, coordinate.artifact_id),
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_cell(&name),
                Self::escape_cell(&coordinate.version),
                dependency.scope,
                Self::yes_no(dependency.optional)
            ));
        }
        output.push('\n');
    }

    fn render_diagnostics(&self, output: &mut String, converted: &ConverterResult) {
        let mut lines = Vec::new();
        for entry in &converted.missing_embedded {
            lines.push(format!("- ❌ Missing embedded library `{}`", entry));
        }
        for entry in &converted.unhandled_embedded {
            lines.push(format!("- ❓ No Maven metadata in `{}`", entry));
        }
        for entry in &converted.rejected_embedded {
            lines.push(format!(
                "- ⛔ Rejected `{}`: {}",
                entry.path,
                entry.reason.lines().next().unwrap_or_default()
            ));
        }
        for entry in &converted.ignored_embedded {
            lines.push(format!("- Ignored `{}`", entry));
        }
        for warning in &converted.warnings {
            lines.push(format!("- ⚠️ {}", warning));
        }
        if lines.is_empty() {
            return;
        }
        output.push_str(&lines.join("\n"));
        output.push_str("\n\n");
    }

    fn render_warnings(&self, output: &mut String, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        output.push_str("## Warnings\n\n");
        for warning in warnings {
            output.push_str(&format!("- {}\n", warning));
        }
        output.push('\n');
    }
}

impl ManifestFormatter for MarkdownFormatter {
    fn format(&self, result: &MavenizationResult) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output);
        self.render_summary(&mut output, result);

        output.push_str("## Bundles\n\n");
        for (id, converted) in result.conversions() {
            self.render_bundle(&mut output, id, result.artifact_bundles(id), converted);
        }

        self.render_warnings(&mut output, result.warnings());
        Ok(output)
    }
}
