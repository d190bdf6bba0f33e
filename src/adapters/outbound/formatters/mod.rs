/// Formatter adapters for the supported manifest output formats
mod json_formatter;
mod markdown_formatter;

pub use json_formatter::JsonManifestFormatter;
pub use markdown_formatter::MarkdownFormatter;
