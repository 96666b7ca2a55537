/// ProgressReporter port for reporting progress during the scan
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// the report itself stays alone on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position within a known total
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the scan
    fn report_completion(&self, message: &str);
}
