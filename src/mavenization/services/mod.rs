pub mod bundle_converter;
pub mod coordinate_strategy;
pub mod dependency_walker;
pub mod embedded_library_resolver;
pub mod option_resolver;
pub mod pom_properties;
pub mod source_bundle_attacher;

#[cfg(test)]
pub(crate) mod test_support;

pub use bundle_converter::{BundleConverter, BUNDLE_DIRECTIVE_SUFFIX};
pub use coordinate_strategy::{
    CoordinatePolicy, CoordinateStrategy, GroupIdRemap, SnapshotRule, DEFAULT_DEEP_GROUP_PREFIXES,
};
pub use dependency_walker::DependencyWalker;
pub use embedded_library_resolver::EmbeddedLibraryResolver;
pub use option_resolver::{OptionResolver, ResolutionMode, ResolvedOptions};
pub use source_bundle_attacher::SourceBundleAttacher;
