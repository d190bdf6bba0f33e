use crate::mavenization::domain::MavenizationResult;
use crate::shared::Result;

/// ManifestFormatter port for rendering a mavenization result
///
/// This port abstracts the output format (JSON manifest, Markdown report, ...).
pub trait ManifestFormatter {
    /// Formats the artifact bundles, POMs and diagnostics of `result`
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, result: &MavenizationResult) -> Result<String>;
}
