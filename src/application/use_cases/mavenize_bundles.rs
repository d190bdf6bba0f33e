use crate::application::dto::{MavenizeRequest, MavenizeResponse};
use crate::mavenization::domain::{BundleId, ConverterResult, MavenizationResult};
use crate::mavenization::services::{
    BundleConverter, CoordinateStrategy, DependencyWalker, EmbeddedLibraryResolver,
    SourceBundleAttacher,
};
use crate::ports::outbound::{ArchiveReader, BundleGraphProvider, LibraryWorkspace, ProgressReporter};
use crate::shared::Result;

/// MavenizeBundlesUseCase - converts every bundle of the graph into Maven artifacts
///
/// Walks the graph from each input bundle in provider order, attaches
/// source bundles once all hosts are known, then reports every collected
/// diagnostic through the progress reporter.
///
/// # Type Parameters
/// * `G` - BundleGraphProvider implementation
/// * `A` - ArchiveReader implementation
/// * `W` - LibraryWorkspace implementation
/// * `PR` - ProgressReporter implementation
pub struct MavenizeBundlesUseCase<G, A, W, PR> {
    graph: G,
    archive_reader: A,
    workspace: W,
    progress_reporter: PR,
}

impl<G, A, W, PR> MavenizeBundlesUseCase<G, A, W, PR>
where
    G: BundleGraphProvider,
    A: ArchiveReader,
    W: LibraryWorkspace,
    PR: ProgressReporter,
{
    /// Creates a new MavenizeBundlesUseCase with injected dependencies
    pub fn new(graph: G, archive_reader: A, workspace: W, progress_reporter: PR) -> Self {
        Self {
            graph,
            archive_reader,
            workspace,
            progress_reporter,
        }
    }

    /// Executes the mavenization
    ///
    /// # Errors
    /// Returns the first invocation-level error: an unreadable graph, an
    /// invalid option value or pattern, or an identity the coordinate rules
    /// refuse. Per-entry problems end up in the response instead.
    pub fn execute(&self, request: MavenizeRequest) -> Result<MavenizeResponse> {
        // Step 1: Load the input bundles
        self.progress_reporter.report("📖 Loading bundle graph...");
        let bundles = self.graph.bundles()?;
        self.progress_reporter
            .report(&format!("✅ Detected {} bundle(s)", bundles.len()));

        // Step 2: Wire the conversion services
        let strategy = CoordinateStrategy::new(request.coordinate_policy);
        let resolver = EmbeddedLibraryResolver::new(
            &self.archive_reader,
            &self.workspace,
            &strategy,
            request.target,
        );
        let converter = BundleConverter::new(&strategy, resolver);
        let walker = DependencyWalker::new(&self.graph, converter, &strategy, &request.options);

        // Step 3: Walk from every input bundle
        self.progress_reporter.report(&format!(
            "🔧 Mavenizing bundles for target '{}'...",
            request.target
        ));
        let mut result = MavenizationResult::new();
        let total = bundles.len();
        for (idx, bundle) in bundles.iter().enumerate() {
            self.progress_reporter.report_progress(
                idx + 1,
                total,
                Some(&bundle.id().versioned_name()),
            );
            walker.mavenize(bundle, &mut result)?;
        }

        // Step 4: Source bundles need every host converted first
        SourceBundleAttacher::attach(&mut result);

        // Step 5: Surface diagnostics
        let diagnostic_count = self.report_diagnostics(&result);

        self.progress_reporter.report_completion(&format!(
            "✅ Mavenized {} bundle(s) into {} artifact bundle(s)",
            result.conversion_count(),
            result.artifact_bundle_count()
        ));

        Ok(MavenizeResponse::new(result, diagnostic_count))
    }

    fn report_diagnostics(&self, result: &MavenizationResult) -> usize {
        let mut count = 0;
        for (id, converted) in result.conversions() {
            for message in Self::bundle_diagnostics(id, converted) {
                self.progress_reporter.report_warning(&message);
                count += 1;
            }
        }
        for warning in result.warnings() {
            self.progress_reporter.report_warning(warning);
            count += 1;
        }
        count
    }

    fn bundle_diagnostics(id: &BundleId, converted: &ConverterResult) -> Vec<String> {
        let missing = converted
            .missing_embedded
            .iter()
            .map(|entry| format!("{}: embedded library '{}' not found", id, entry));
        let unhandled = converted.unhandled_embedded.iter().map(|entry| {
            format!(
                "{}: no Maven metadata found in embedded library '{}'",
                id, entry
            )
        });
        let rejected = converted.rejected_embedded.iter().map(|entry| {
            format!(
                "{}: embedded library '{}' rejected: {}",
                id,
                entry.path,
                entry.reason.lines().next().unwrap_or_default()
            )
        });
        missing
            .chain(unhandled)
            .chain(rejected)
            .chain(converted.warnings.iter().cloned())
            .collect()
    }
}
