use super::{CoordinateStrategy, EmbeddedLibraryResolver, OptionResolver};
use crate::mavenization::domain::{
    BundleDirective, BundleId, BundleNode, ConvertedArtifact, ConverterResult, EmbeddedDirective,
    OptionSet,
};
use crate::ports::outbound::{ArchiveReader, LibraryWorkspace};
use crate::shared::Result;

/// Option suffix selecting the whole-bundle directive
pub const BUNDLE_DIRECTIVE_SUFFIX: &str = "@directive";

/// BundleConverter - produces the full artifact set of a single bundle
pub struct BundleConverter<'a, A: ArchiveReader, W: LibraryWorkspace> {
    strategy: &'a CoordinateStrategy,
    embedded: EmbeddedLibraryResolver<'a, A, W>,
}

impl<'a, A: ArchiveReader, W: LibraryWorkspace> BundleConverter<'a, A, W> {
    pub fn new(
        strategy: &'a CoordinateStrategy,
        embedded: EmbeddedLibraryResolver<'a, A, W>,
    ) -> Self {
        Self { strategy, embedded }
    }

    /// Whole-bundle directive: first pattern-matched `@directive` value
    ///
    /// # Errors
    /// Returns an error if the value is not `mavenize`, `omit` or `ignore`
    pub fn bundle_directive(bundle: &BundleId, options: &OptionSet) -> Result<BundleDirective> {
        match OptionResolver::first_value(bundle, options, BUNDLE_DIRECTIVE_SUFFIX)? {
            Some((key, value)) => BundleDirective::parse(&key, &value),
            None => Ok(BundleDirective::default()),
        }
    }

    /// Converts `bundle`: main artifact first (unless omitted), then its
    /// embedded libraries in classpath order
    ///
    /// # Errors
    /// Returns an error for an unparseable bundle directive or a bundle
    /// identity no coordinate can be derived from
    pub fn convert(&self, bundle: &BundleNode, options: &OptionSet) -> Result<ConverterResult> {
        let directive = Self::bundle_directive(bundle.id(), options)?;
        if directive == BundleDirective::Ignore {
            return Ok(ConverterResult::default());
        }

        let mut result = self.embedded.resolve(bundle, options)?;
        if directive == BundleDirective::Omit && !result.artifacts.is_empty() {
            return Ok(result);
        }

        let main = ConvertedArtifact {
            coordinate: self.strategy.main_coordinate(bundle.id())?,
            source_file: Some(bundle.location().path().to_path_buf()),
            directive: EmbeddedDirective::Mavenize,
            embedded_library: false,
            newly_produced: true,
        };
        result.artifacts.insert(0, main);
        Ok(result)
    }
}
