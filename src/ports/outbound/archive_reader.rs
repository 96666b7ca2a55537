use crate::shared::Result;
use std::path::Path;

/// ArchiveReader port for listing the entries of an archive file
///
/// Abstracts zip access so tests can substitute a fake without touching
/// the file system. Only entry names are needed; the audit never reads
/// entry contents.
pub trait ArchiveReader {
    /// Lists entry names of the archive at `archive_path`, in directory order
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not a valid
    /// zip archive. Callers treat this as a per-artifact failure and
    /// continue with the remaining artifacts.
    fn entry_names(&self, archive_path: &Path) -> Result<Vec<String>>;
}
