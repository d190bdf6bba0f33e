use crate::mavenization::domain::MavenizationResult;

/// MavenizeResponse - Internal response DTO from the mavenize use case
///
/// Carries the full artifact graph, which adapters then format into
/// the requested manifest.
#[derive(Debug)]
pub struct MavenizeResponse {
    pub result: MavenizationResult,
    /// Number of diagnostics reported while walking
    pub diagnostic_count: usize,
}

impl MavenizeResponse {
    pub fn new(result: MavenizationResult, diagnostic_count: usize) -> Self {
        Self {
            result,
            diagnostic_count,
        }
    }

    /// True when any bundle had missing, unhandled or rejected embedded entries
    pub fn has_problems(&self) -> bool {
        self.result.has_problems()
    }
}
