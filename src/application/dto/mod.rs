/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod mavenize_request;
mod mavenize_response;
mod output_format;

pub use mavenize_request::MavenizeRequest;
pub use mavenize_response::MavenizeResponse;
pub use output_format::OutputFormat;
