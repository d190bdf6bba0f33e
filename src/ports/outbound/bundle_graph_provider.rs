use crate::mavenization::domain::{BundleId, BundleNode, RequirementSpec};
use crate::shared::Result;

/// BundleGraphProvider port exposing an already-resolved bundle graph
///
/// The mavenizer never resolves OSGi requirements itself; whatever resolution
/// semantics (package imports, `Require-Bundle`, ...) the host environment
/// uses are already reflected in what this port returns.
pub trait BundleGraphProvider {
    /// The input bundles, in the order they should be walked
    fn bundles(&self) -> Result<Vec<BundleNode>>;

    /// Looks up any bundle of the resolved state by identity
    fn bundle(&self, id: &BundleId) -> Option<BundleNode>;

    /// Raw requirement specifications of `id`; several may target the same bundle
    ///
    /// # Errors
    /// Returns an error if the resolved state cannot answer for `id`
    fn requirements(&self, id: &BundleId) -> Result<Vec<RequirementSpec>>;
}
