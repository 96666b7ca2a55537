use manifest_audit::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ArchiveReader for testing
///
/// Serves entry listings from memory; unknown paths yield an empty
/// archive, and paths registered as broken fail to open.
pub struct MockArchiveReader {
    entries: HashMap<PathBuf, Vec<String>>,
    broken: Vec<PathBuf>,
}

impl MockArchiveReader {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            broken: Vec::new(),
        }
    }

    pub fn with_archive(mut self, path: &str, entries: &[&str]) -> Self {
        self.entries.insert(
            PathBuf::from(path),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }

    pub fn with_broken_archive(mut self, path: &str) -> Self {
        self.broken.push(PathBuf::from(path));
        self
    }
}

impl Default for MockArchiveReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveReader for MockArchiveReader {
    fn entry_names(&self, archive_path: &Path) -> Result<Vec<String>> {
        if self.broken.iter().any(|p| p == archive_path) {
            anyhow::bail!("Mock corrupt archive: {}", archive_path.display());
        }
        Ok(self
            .entries
            .get(archive_path)
            .cloned()
            .unwrap_or_default())
    }
}
