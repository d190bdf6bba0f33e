/// ProgressReporter port for user feedback while bundles are walked
///
/// All diagnostics of a mavenization (missing embedded entries, unknown
/// requirement targets, orphaned source bundles) flow through this port.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress over the input bundles
    ///
    /// # Arguments
    /// * `current` - Bundles processed so far
    /// * `total` - Number of input bundles
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem; the invocation continues
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
