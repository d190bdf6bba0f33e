/// Mock implementations for testing
mod mock_archive_reader;
mod mock_bundle_graph_provider;
mod mock_library_workspace;
mod mock_progress_reporter;

pub use mock_archive_reader::MockArchiveReader;
pub use mock_bundle_graph_provider::MockBundleGraphProvider;
pub use mock_library_workspace::MockLibraryWorkspace;
pub use mock_progress_reporter::MockProgressReporter;
