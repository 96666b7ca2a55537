use crate::audit::domain::Configuration;
use crate::ports::outbound::ConfigurationProvider;
use crate::shared::error::{AuditError, ResolutionError};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// DirectoryConfigurationProvider adapter for directory-tree layouts
///
/// Treats each immediate subdirectory of a root directory as one
/// configuration: the subdirectory's name is the configuration name, and
/// the regular files directly inside it are the resolved artifacts,
/// sorted by file name for a deterministic scan order. Every directory
/// configuration reports itself as resolvable.
pub struct DirectoryConfigurationProvider {
    root: PathBuf,
}

impl DirectoryConfigurationProvider {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ConfigurationProvider for DirectoryConfigurationProvider {
    fn configurations(&self) -> Result<Vec<Configuration>> {
        let entries = fs::read_dir(&self.root).map_err(|e| AuditError::InvalidProjectPath {
            path: self.root.clone(),
            reason: format!("Failed to list directory: {}", e),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AuditError::InvalidProjectPath {
                path: self.root.clone(),
                reason: format!("Failed to read directory entry: {}", e),
            })?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| Configuration::new(name, true))
            .collect())
    }

    fn resolve_artifacts(
        &self,
        configuration: &Configuration,
    ) -> std::result::Result<Vec<PathBuf>, ResolutionError> {
        let dir = self.root.join(configuration.name());
        let entries = fs::read_dir(&dir).map_err(|e| {
            ResolutionError::new(
                configuration.name(),
                format!("failed to list {}: {}", dir.display(), e),
            )
        })?;

        let mut artifacts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ResolutionError::new(
                    configuration.name(),
                    format!("failed to read entry in {}: {}", dir.display(), e),
                )
            })?;
            if entry.path().is_file() {
                artifacts.push(entry.path());
            }
        }
        artifacts.sort();

        Ok(artifacts)
    }
}
