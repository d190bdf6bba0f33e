/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (resolved bundle state, archives,
/// staging area, console, output).
pub mod archive_reader;
pub mod bundle_graph_provider;
pub mod formatter;
pub mod library_workspace;
pub mod output_presenter;
pub mod progress_reporter;

pub use archive_reader::ArchiveReader;
pub use bundle_graph_provider::BundleGraphProvider;
pub use formatter::ManifestFormatter;
pub use library_workspace::LibraryWorkspace;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
