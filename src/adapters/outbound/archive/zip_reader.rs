use crate::ports::outbound::ArchiveReader;
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// ZipArchiveReader adapter listing jar entries via the zip crate
///
/// Entry names are returned in central-directory order, so labels come
/// out in the order the archive lists them. The archive handle is
/// scoped to this call and released before the next artifact is opened.
pub struct ZipArchiveReader;

impl ZipArchiveReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipArchiveReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveReader for ZipArchiveReader {
    fn entry_names(&self, archive_path: &Path) -> Result<Vec<String>> {
        let file = File::open(archive_path).map_err(|e| AuditError::ArchiveReadError {
            path: archive_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut archive = ZipArchive::new(file).map_err(|e| AuditError::ArchiveReadError {
            path: archive_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut names = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive
                .by_index(index)
                .map_err(|e| AuditError::ArchiveReadError {
                    path: archive_path.to_path_buf(),
                    details: e.to_string(),
                })?;
            names.push(entry.name().to_string());
        }

        Ok(names)
    }
}
