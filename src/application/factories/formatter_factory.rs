use crate::adapters::outbound::formatters::{JsonManifestFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ManifestFormatter;

/// Factory for creating manifest formatters
///
/// Selects the infrastructure adapter for an output format so the CLI
/// only ever deals with the `ManifestFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use osgi_mavenize::application::dto::OutputFormat;
    /// use osgi_mavenize::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ManifestFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonManifestFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use osgi_mavenize::application::dto::OutputFormat;
    /// use osgi_mavenize::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON manifest...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON manifest...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
