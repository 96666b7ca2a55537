use crate::audit::domain::Configuration;
use crate::ports::outbound::ConfigurationProvider;
use crate::shared::error::{AuditError, ResolutionError};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the configuration descriptor inside the project directory
pub const DESCRIPTOR_FILENAME: &str = "configurations.toml";

/// Maximum descriptor size (1 MB); resolved dependency sets are small
const MAX_DESCRIPTOR_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Deserialize)]
struct DescriptorFile {
    #[serde(default, rename = "configuration")]
    configurations: Vec<ConfigurationEntry>,
}

#[derive(Debug, Deserialize)]
struct ConfigurationEntry {
    name: String,
    #[serde(default = "default_resolvable")]
    resolvable: bool,
    #[serde(default)]
    artifacts: Vec<PathBuf>,
}

fn default_resolvable() -> bool {
    true
}

/// FileConfigurationProvider adapter backed by a `configurations.toml` file
///
/// The descriptor lists each configuration with its name, resolvable flag
/// and resolved artifact paths:
///
/// ```toml
/// [[configuration]]
/// name = "runtimeClasspath"
/// resolvable = true
/// artifacts = ["libs/app.jar", "libs/dep.jar"]
/// ```
///
/// Relative artifact paths resolve against the project directory.
/// Resolving a configuration fails when any listed artifact is missing
/// on disk; that failure is per-configuration and non-fatal.
#[derive(Debug)]
pub struct FileConfigurationProvider {
    artifacts_by_name: HashMap<String, Vec<PathBuf>>,
    configurations: Vec<Configuration>,
}

impl FileConfigurationProvider {
    /// Loads the descriptor from `<project_path>/configurations.toml`
    ///
    /// # Errors
    /// Returns an error if the descriptor is missing, oversized, or not
    /// valid TOML. These are fatal: without a registry there is nothing
    /// to audit.
    pub fn load(project_path: &Path) -> Result<Self> {
        let descriptor_path = project_path.join(DESCRIPTOR_FILENAME);

        if !descriptor_path.exists() {
            return Err(AuditError::DescriptorNotFound {
                path: descriptor_path.clone(),
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Please run in a directory containing a configuration descriptor, or specify the correct path with the --path option.",
                    DESCRIPTOR_FILENAME,
                    project_path.display()
                ),
            }
            .into());
        }

        let content = safe_read_descriptor(&descriptor_path)?;

        let descriptor: DescriptorFile =
            toml::from_str(&content).map_err(|e| AuditError::DescriptorParseError {
                path: descriptor_path,
                details: e.to_string(),
            })?;

        let mut artifacts_by_name = HashMap::new();
        let mut configurations = Vec::new();
        for entry in descriptor.configurations {
            configurations.push(Configuration::new(entry.name.clone(), entry.resolvable));
            let resolved: Vec<PathBuf> = entry
                .artifacts
                .into_iter()
                .map(|artifact| {
                    if artifact.is_absolute() {
                        artifact
                    } else {
                        project_path.join(artifact)
                    }
                })
                .collect();
            artifacts_by_name.insert(entry.name, resolved);
        }

        Ok(Self {
            artifacts_by_name,
            configurations,
        })
    }
}

/// Read the descriptor with the usual safety checks: no symlinks,
/// regular file only, bounded size.
fn safe_read_descriptor(path: &Path) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AuditError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_DESCRIPTOR_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_DESCRIPTOR_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| {
        AuditError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

impl ConfigurationProvider for FileConfigurationProvider {
    fn configurations(&self) -> Result<Vec<Configuration>> {
        Ok(self.configurations.clone())
    }

    fn resolve_artifacts(
        &self,
        configuration: &Configuration,
    ) -> std::result::Result<Vec<PathBuf>, ResolutionError> {
        let artifacts = self
            .artifacts_by_name
            .get(configuration.name())
            .ok_or_else(|| {
                ResolutionError::new(configuration.name(), "configuration not in descriptor")
            })?;

        for artifact in artifacts {
            if !artifact.exists() {
                return Err(ResolutionError::new(
                    configuration.name(),
                    format!("artifact does not exist: {}", artifact.display()),
                ));
            }
        }

        Ok(artifacts.clone())
    }
}
