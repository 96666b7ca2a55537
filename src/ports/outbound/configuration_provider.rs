use crate::audit::domain::Configuration;
use crate::shared::error::ResolutionError;
use crate::shared::Result;
use std::path::PathBuf;

/// ConfigurationProvider port for the host build tool's configuration registry
///
/// Yields the fixed list of configuration descriptors known to the host,
/// and resolves a configuration's artifacts on demand. Resolution failure
/// is a typed, per-configuration error so callers can recover and continue
/// with the remaining configurations.
pub trait ConfigurationProvider {
    /// Lists all configurations, resolvable or not, in a stable order
    ///
    /// # Errors
    /// Returns an error when the registry itself cannot be read; this is
    /// fatal to the whole audit, unlike per-configuration resolution.
    fn configurations(&self) -> Result<Vec<Configuration>>;

    /// Resolves the artifact files of one configuration
    ///
    /// # Arguments
    /// * `configuration` - A descriptor previously returned by `configurations`
    ///
    /// # Returns
    /// The resolved artifact paths, in the provider's scan order
    ///
    /// # Errors
    /// Returns `ResolutionError` naming the configuration when any of its
    /// artifacts cannot be resolved. The audit records the name and moves on.
    fn resolve_artifacts(
        &self,
        configuration: &Configuration,
    ) -> std::result::Result<Vec<PathBuf>, ResolutionError>;
}
