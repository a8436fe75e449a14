/// ProgressReporter port for user-facing status messages
///
/// Messages go to stderr so they never mix with a BOM written to stdout.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress of a counted step (e.g. merging additional BOMs)
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Items expected
    /// * `message` - Optional label for the item being processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
