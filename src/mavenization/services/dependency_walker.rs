use super::{BundleConverter, CoordinateStrategy, OptionResolver, SourceBundleAttacher};
use crate::mavenization::domain::{
    ArtifactBundle, BundleId, BundleNode, DependencyScope, MavenizationResult, OptionSet,
    PomDependency, PomModel, Requirement,
};
use crate::ports::outbound::{ArchiveReader, BundleGraphProvider, LibraryWorkspace};
use crate::shared::Result;
use std::collections::HashMap;

pub const REQUIREMENTS_PROVIDED_SUFFIX: &str = "@requirements.provided";
pub const REQUIREMENTS_OPTIONAL_SUFFIX: &str = "@requirements.optional";
pub const EMBEDDED_PROVIDED_SUFFIX: &str = "@embeddedLibraries.provided";
pub const EMBEDDED_OPTIONAL_SUFFIX: &str = "@embeddedLibraries.optional";

/// Work item of the explicit walk stack
enum Frame {
    /// Convert the bundle and schedule its requirements
    Enter(BundleNode),
    /// All requirements have memo entries; assemble the bundle's POMs
    Exit(BundleId),
}

/// DependencyWalker - walks the requirement graph and builds the artifact graph
///
/// Each bundle is converted exactly once: its memo entry is written before
/// any of its requirements are visited, so cycles resolve against that entry.
/// The walk uses an explicit stack and never recurses.
pub struct DependencyWalker<'a, G, A, W>
where
    G: BundleGraphProvider,
    A: ArchiveReader,
    W: LibraryWorkspace,
{
    graph: &'a G,
    converter: BundleConverter<'a, A, W>,
    strategy: &'a CoordinateStrategy,
    options: &'a OptionSet,
}

impl<'a, G, A, W> DependencyWalker<'a, G, A, W>
where
    G: BundleGraphProvider,
    A: ArchiveReader,
    W: LibraryWorkspace,
{
    pub fn new(
        graph: &'a G,
        converter: BundleConverter<'a, A, W>,
        strategy: &'a CoordinateStrategy,
        options: &'a OptionSet,
    ) -> Self {
        Self {
            graph,
            converter,
            strategy,
            options,
        }
    }

    /// Mavenizes every bundle of `bundles` and everything they require,
    /// then attaches deferred source bundles to their hosts
    ///
    /// # Errors
    /// Returns the first invocation-level error (invalid configuration,
    /// provider failure); per-entry problems are recorded in the result
    pub fn mavenize_all(&self, bundles: &[BundleNode]) -> Result<MavenizationResult> {
        let mut result = MavenizationResult::new();
        for bundle in bundles {
            self.mavenize(bundle, &mut result)?;
        }
        SourceBundleAttacher::attach(&mut result);
        Ok(result)
    }

    /// Walks the graph from `root`, skipping bundles already in `result`
    pub fn mavenize(&self, root: &BundleNode, result: &mut MavenizationResult) -> Result<()> {
        let mut requirements: HashMap<BundleId, Vec<Requirement>> = HashMap::new();
        let mut stack = vec![Frame::Enter(root.clone())];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(bundle) => {
                    let id = bundle.id().clone();
                    if result.is_converted(&id) || result.is_deferred_source(&id) {
                        continue;
                    }
                    if bundle.is_source_bundle() {
                        result.defer_source_bundle(bundle);
                        continue;
                    }

                    let converted = self.converter.convert(&bundle, self.options)?;
                    result.record_conversion(id.clone(), converted);

                    let collapsed = Requirement::collapse(&id, self.graph.requirements(&id)?);
                    stack.push(Frame::Exit(id.clone()));
                    // Reversed so requirements are entered in declaration order
                    for requirement in collapsed.iter().rev() {
                        if requirement.is_self_edge() || result.is_converted(&requirement.to) {
                            continue;
                        }
                        match self.graph.bundle(&requirement.to) {
                            Some(target) => stack.push(Frame::Enter(target)),
                            None => result.warn(format!(
                                "{}: requirement on unknown bundle {} skipped",
                                id, requirement.to
                            )),
                        }
                    }
                    requirements.insert(id, collapsed);
                }
                Frame::Exit(id) => {
                    let collapsed = requirements.remove(&id).unwrap_or_default();
                    let bundles = self.assemble(&id, &collapsed, result)?;
                    result.set_artifact_bundles(id, bundles);
                }
            }
        }
        Ok(())
    }

    /// One ArtifactBundle per artifact the bundle produced
    fn assemble(
        &self,
        id: &BundleId,
        requirements: &[Requirement],
        result: &MavenizationResult,
    ) -> Result<Vec<ArtifactBundle>> {
        let Some(converted) = result.converter_result(id) else {
            return Ok(Vec::new());
        };
        if converted.artifacts.is_empty() {
            return Ok(Vec::new());
        }

        let required = self.requirement_dependencies(requirements, result)?;
        let embedded_scope = scope(OptionResolver::boolean_option(
            id,
            self.options,
            EMBEDDED_PROVIDED_SUFFIX,
            false,
        )?);
        let embedded_optional =
            OptionResolver::boolean_option(id, self.options, EMBEDDED_OPTIONAL_SUFFIX, false)?;

        let mut bundles = Vec::with_capacity(converted.artifacts.len());
        for artifact in &converted.artifacts {
            let mut pom = PomModel::for_coordinate(&artifact.coordinate);
            for dependency in &required {
                pom.add_dependency(dependency.clone());
            }
            if !artifact.embedded_library {
                for library in converted.embedded_artifacts() {
                    pom.add_dependency(PomDependency {
                        coordinate: library.coordinate.clone(),
                        scope: embedded_scope,
                        optional: embedded_optional,
                    });
                }
            }
            bundles.push(ArtifactBundle {
                pom,
                artifacts: vec![artifact.clone()],
            });
        }
        Ok(bundles)
    }

    /// Dependencies contributed by the bundle's collapsed requirements, in
    /// requirement order
    fn requirement_dependencies(
        &self,
        requirements: &[Requirement],
        result: &MavenizationResult,
    ) -> Result<Vec<PomDependency>> {
        let mut dependencies = Vec::new();
        for requirement in requirements.iter().filter(|r| !r.is_self_edge()) {
            let Some(target) = result.converter_result(&requirement.to) else {
                continue;
            };
            let dependency_scope = scope(OptionResolver::requirement_matches(
                requirement,
                self.options,
                REQUIREMENTS_PROVIDED_SUFFIX,
            )?);
            let optional = requirement.optional
                || OptionResolver::requirement_matches(
                    requirement,
                    self.options,
                    REQUIREMENTS_OPTIONAL_SUFFIX,
                )?;
            let use_range = !requirement.range.is_unbounded()
                && requirement.range.includes(requirement.to.version());

            for artifact in &target.artifacts {
                let mut coordinate = artifact.coordinate.clone();
                if use_range && !artifact.embedded_library {
                    coordinate.version = self.strategy.maven_version_range(&requirement.range)?;
                }
                dependencies.push(PomDependency {
                    coordinate,
                    scope: dependency_scope,
                    optional,
                });
            }
        }
        Ok(dependencies)
    }
}

fn scope(provided: bool) -> DependencyScope {
    if provided {
        DependencyScope::Provided
    } else {
        DependencyScope::Compile
    }
}
