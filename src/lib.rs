//! osgi-mavenize - turns resolved OSGi bundles into Maven artifacts
//!
//! Given an already-resolved graph of bundles, this library decides which
//! Maven artifacts each bundle produces (the bundle itself, embedded
//! libraries, attached sources), how they are named and versioned, and
//! which POM dependencies link them. Behavior is steered by an ordered set
//! of pattern-keyed options.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`mavenization`): bundle model, coordinate rules and the dependency walk
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use osgi_mavenize::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let graph = TomlBundleGraph::load(Path::new("bundles.toml"))?;
//! let workspace = DirectoryWorkspace::temporary()?;
//!
//! // Create use case
//! let use_case = MavenizeBundlesUseCase::new(
//!     graph,
//!     FileSystemArchiveReader::new(),
//!     workspace,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let options = OptionSet::new().with("org.example.**@directive", "mavenize");
//! let request = MavenizeRequest::new(options, CoordinatePolicy::default(), TargetType::Java);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = JsonManifestFormatter::new().format(&response.result)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod mavenization;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryWorkspace, FileSystemArchiveReader, FileSystemWriter, StdoutPresenter,
        TomlBundleGraph,
    };
    pub use crate::adapters::outbound::formatters::{JsonManifestFormatter, MarkdownFormatter};
    pub use crate::application::dto::{MavenizeRequest, MavenizeResponse, OutputFormat};
    pub use crate::application::use_cases::MavenizeBundlesUseCase;
    pub use crate::mavenization::domain::{
        ArtifactBundle, ArtifactCoordinate, BundleId, BundleLocation, BundleNode,
        ConvertedArtifact, ConverterResult, MavenizationResult, OptionSet, PomModel,
        RequirementSpec, TargetType, VersionRange,
    };
    pub use crate::mavenization::services::{
        BundleConverter, CoordinatePolicy, CoordinateStrategy, DependencyWalker,
        EmbeddedLibraryResolver, OptionResolver, SourceBundleAttacher,
    };
    pub use crate::ports::outbound::{
        ArchiveReader, BundleGraphProvider, LibraryWorkspace, ManifestFormatter, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
