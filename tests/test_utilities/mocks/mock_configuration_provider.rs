use manifest_audit::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock ConfigurationProvider for testing
///
/// Configurations are returned in insertion order. Individual
/// configurations can be marked as failing to resolve.
pub struct MockConfigurationProvider {
    configurations: Vec<Configuration>,
    artifacts: HashMap<String, Vec<PathBuf>>,
    failing: Vec<String>,
    pub registry_failure: bool,
}

impl MockConfigurationProvider {
    pub fn new() -> Self {
        Self {
            configurations: Vec::new(),
            artifacts: HashMap::new(),
            failing: Vec::new(),
            registry_failure: false,
        }
    }

    pub fn with_configuration(mut self, name: &str, resolvable: bool, artifacts: &[&str]) -> Self {
        self.configurations.push(Configuration::new(name, resolvable));
        self.artifacts.insert(
            name.to_string(),
            artifacts.iter().map(PathBuf::from).collect(),
        );
        self
    }

    pub fn with_failing_configuration(mut self, name: &str) -> Self {
        self.configurations.push(Configuration::new(name, true));
        self.failing.push(name.to_string());
        self
    }

    pub fn with_registry_failure() -> Self {
        Self {
            registry_failure: true,
            ..Self::new()
        }
    }
}

impl Default for MockConfigurationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationProvider for MockConfigurationProvider {
    fn configurations(&self) -> Result<Vec<Configuration>> {
        if self.registry_failure {
            anyhow::bail!("Mock registry failure");
        }
        Ok(self.configurations.clone())
    }

    fn resolve_artifacts(
        &self,
        configuration: &Configuration,
    ) -> std::result::Result<Vec<PathBuf>, ResolutionError> {
        if self.failing.contains(&configuration.name().to_string()) {
            return Err(ResolutionError::new(
                configuration.name(),
                "Mock resolution failure",
            ));
        }
        Ok(self
            .artifacts
            .get(configuration.name())
            .cloned()
            .unwrap_or_default())
    }
}
