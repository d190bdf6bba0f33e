/// Filesystem adapters: bundle graph file, bundle archives, staging area, output
mod archive_reader;
mod file_writer;
mod library_workspace;
mod toml_bundle_graph;

pub use archive_reader::FileSystemArchiveReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use library_workspace::DirectoryWorkspace;
pub use toml_bundle_graph::TomlBundleGraph;
