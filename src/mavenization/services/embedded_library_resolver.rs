use super::pom_properties::{coordinate_from_properties, is_pom_properties_entry};
use super::CoordinateStrategy;
use crate::mavenization::domain::{
    ArtifactCoordinate, BundleLocation, BundleNode, ConvertedArtifact, ConverterResult,
    EmbeddedDirective, OptionSet, RejectedEntry, TargetType,
};
use crate::ports::outbound::{ArchiveReader, LibraryWorkspace};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// EmbeddedLibraryResolver - turns a bundle's embedded classpath entries into artifacts
///
/// Every entry gets a directive from the option set (keyed by
/// `<symbolicName>_<version>/<entryPath>`, then `<symbolicName>/<entryPath>`,
/// default `auto_detect`). Problems with a single entry are recorded in the
/// returned [`ConverterResult`] and never abort the bundle.
pub struct EmbeddedLibraryResolver<'a, A: ArchiveReader, W: LibraryWorkspace> {
    archives: &'a A,
    workspace: &'a W,
    strategy: &'a CoordinateStrategy,
    target: TargetType,
}

/// Outcome of copying an entry into the workspace
enum Staged {
    Copied(PathBuf),
    Missing,
}

impl<'a, A: ArchiveReader, W: LibraryWorkspace> EmbeddedLibraryResolver<'a, A, W> {
    pub fn new(
        archives: &'a A,
        workspace: &'a W,
        strategy: &'a CoordinateStrategy,
        target: TargetType,
    ) -> Self {
        Self {
            archives,
            workspace,
            strategy,
            target,
        }
    }

    /// Resolves all embedded entries of `bundle` in classpath order
    ///
    /// # Returns
    /// A partial converter result holding only embedded artifacts and the
    /// per-entry diagnostics
    ///
    /// # Errors
    /// Returns an error only for invocation-level problems, such as a bundle
    /// identity the coordinate strategy refuses
    pub fn resolve(&self, bundle: &BundleNode, options: &OptionSet) -> Result<ConverterResult> {
        let mut result = ConverterResult::default();
        let entries: Vec<&str> = bundle.embedded_entries().collect();
        if entries.is_empty() {
            return Ok(result);
        }

        if !self.target.unwraps_embedded_libraries() {
            result.warnings.push(format!(
                "{}: {} embedded libraries kept inside the bundle for target '{}'",
                bundle.id(),
                entries.len(),
                self.target
            ));
            return Ok(result);
        }

        for entry in entries {
            let directive = match Self::directive_for(bundle, entry, options) {
                Ok(directive) => directive,
                Err(e) => {
                    result.rejected_embedded.push(RejectedEntry {
                        path: entry.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            self.resolve_entry(bundle, entry, directive, &mut result)?;
        }
        Ok(result)
    }

    fn directive_for(
        bundle: &BundleNode,
        entry: &str,
        options: &OptionSet,
    ) -> Result<EmbeddedDirective> {
        let keys = [
            format!("{}/{}", bundle.id().versioned_name(), entry),
            format!("{}/{}", bundle.id().symbolic_name(), entry),
        ];
        match keys
            .iter()
            .find_map(|key| options.get(key).map(|value| (key, value)))
        {
            Some((key, value)) => EmbeddedDirective::parse(key, value),
            None => Ok(EmbeddedDirective::AutoDetect),
        }
    }

    fn resolve_entry(
        &self,
        bundle: &BundleNode,
        entry: &str,
        directive: EmbeddedDirective,
        result: &mut ConverterResult,
    ) -> Result<()> {
        match directive {
            EmbeddedDirective::Ignore => {
                result.ignored_embedded.push(entry.to_string());
            }
            EmbeddedDirective::Replace(coordinate) => {
                result.artifacts.push(ConvertedArtifact {
                    coordinate: coordinate.clone(),
                    source_file: None,
                    directive: EmbeddedDirective::Replace(coordinate),
                    embedded_library: true,
                    newly_produced: false,
                });
            }
            EmbeddedDirective::Mavenize => {
                let Staged::Copied(staged) = self.stage(bundle, entry, result) else {
                    return Ok(());
                };
                result.artifacts.push(ConvertedArtifact {
                    coordinate: self.strategy.embedded_coordinate(bundle.id(), entry)?,
                    source_file: Some(staged),
                    directive: EmbeddedDirective::Mavenize,
                    embedded_library: true,
                    newly_produced: true,
                });
            }
            EmbeddedDirective::AutoDetect => {
                let Staged::Copied(staged) = self.stage(bundle, entry, result) else {
                    return Ok(());
                };
                match self.detect(&staged) {
                    Ok(Some(coordinate)) => result.artifacts.push(ConvertedArtifact {
                        coordinate,
                        source_file: Some(staged),
                        directive: EmbeddedDirective::AutoDetect,
                        embedded_library: true,
                        newly_produced: false,
                    }),
                    Ok(None) => result.unhandled_embedded.push(entry.to_string()),
                    Err(e) => {
                        result.warnings.push(format!(
                            "{}: cannot inspect embedded library '{}': {}",
                            bundle.id(),
                            entry,
                            e
                        ));
                        result.unhandled_embedded.push(entry.to_string());
                    }
                }
            }
        }
        Ok(())
    }

    fn stage(&self, bundle: &BundleNode, entry: &str, result: &mut ConverterResult) -> Staged {
        let copied = self
            .archives
            .read_entry(bundle.location(), entry)
            .and_then(|bytes| match bytes {
                Some(bytes) => self.workspace.stage(bundle.id(), entry, &bytes).map(Some),
                None => Ok(None),
            });
        match copied {
            Ok(Some(path)) => Staged::Copied(path),
            Ok(None) => {
                result.missing_embedded.push(entry.to_string());
                Staged::Missing
            }
            Err(e) => {
                result.warnings.push(format!(
                    "{}: cannot copy embedded library '{}': {}",
                    bundle.id(),
                    entry,
                    e
                ));
                result.missing_embedded.push(entry.to_string());
                Staged::Missing
            }
        }
    }

    /// Coordinate recorded by the first `pom.properties` in archive order
    fn detect(&self, staged: &Path) -> Result<Option<ArtifactCoordinate>> {
        let library = BundleLocation::Archive(staged.to_path_buf());
        let Some(metadata) = self
            .archives
            .list_entries(&library)?
            .into_iter()
            .find(|entry| is_pom_properties_entry(entry))
        else {
            return Ok(None);
        };
        let Some(bytes) = self.archives.read_entry(&library, &metadata)? else {
            return Ok(None);
        };
        Ok(coordinate_from_properties(&String::from_utf8_lossy(&bytes)))
    }
}
