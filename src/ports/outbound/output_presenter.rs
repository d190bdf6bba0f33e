use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where the rendered manifest ends up (stdout, a file).
pub trait OutputPresenter {
    /// Presents the rendered manifest
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails or the
    /// destination is refused (e.g. a symlink)
    fn present(&self, content: &str) -> Result<()>;
}
