pub mod artifact;
pub mod bundle;
pub mod bundle_pattern;
pub mod directive;
pub mod mavenization_result;
pub mod options;
pub mod requirement;
pub mod target;
pub mod version;

pub use artifact::{
    ArtifactBundle, ArtifactCoordinate, ConvertedArtifact, DependencyScope, PomDependency,
    PomModel, DEFAULT_ARTIFACT_TYPE, SOURCES_CLASSIFIER,
};
pub use bundle::{BundleId, BundleLocation, BundleNode, SourceBundleTarget, SOURCE_BUNDLE_HEADER};
pub use bundle_pattern::BundlePattern;
pub use directive::{BundleDirective, EmbeddedDirective};
pub use mavenization_result::{ConverterResult, MavenizationResult, RejectedEntry};
pub use options::OptionSet;
pub use requirement::{Requirement, RequirementSpec};
pub use target::TargetType;
pub use version::{OsgiVersion, RangeBound, VersionRange};
