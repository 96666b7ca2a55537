use crate::application::dto::{
    AuditRequest, AuditResponse, FailedConfiguration, UnreadableArchive,
};
use crate::audit::domain::{is_jar, AuditFindings, AuditMetadata, ManifestLabel, MANIFEST_ENTRY};
use crate::audit::services::ArtifactFilter;
use crate::ports::outbound::{ArchiveReader, ConfigurationProvider, ProgressReporter};
use crate::shared::Result;
use std::path::PathBuf;

/// CheckManifestsUseCase - Core use case for the manifest duplication audit
///
/// Walks every resolvable configuration, resolves its artifacts, opens each
/// jar and collects one label per `META-INF/MANIFEST.MF` entry found. All
/// infrastructure goes through injected ports.
///
/// # Type Parameters
/// * `CP` - ConfigurationProvider implementation
/// * `AR` - ArchiveReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckManifestsUseCase<CP, AR, PR> {
    configuration_provider: CP,
    archive_reader: AR,
    progress_reporter: PR,
}

impl<CP, AR, PR> CheckManifestsUseCase<CP, AR, PR>
where
    CP: ConfigurationProvider,
    AR: ArchiveReader,
    PR: ProgressReporter,
{
    /// Creates a new CheckManifestsUseCase with injected dependencies
    pub fn new(configuration_provider: CP, archive_reader: AR, progress_reporter: PR) -> Self {
        Self {
            configuration_provider,
            archive_reader,
            progress_reporter,
        }
    }

    /// Executes the audit
    ///
    /// Per-configuration resolution failures and per-artifact archive
    /// failures are recorded in the response, never raised: the audit is
    /// advisory and always completes. Only a failure to list the
    /// configurations at all is an error.
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        self.progress_reporter.report(&format!(
            "🔎 Auditing configurations in: {}",
            request.project_path.display()
        ));

        let configurations = self.configuration_provider.configurations()?;

        let filter = ArtifactFilter::new(request.exclude_patterns)?;

        let mut findings = AuditFindings::new();
        let mut failed_configurations = Vec::new();
        let mut unreadable_archives = Vec::new();
        let mut configurations_scanned = 0;
        let mut configurations_skipped = 0;
        let mut artifacts_scanned = 0;

        for configuration in &configurations {
            // Non-resolvable configurations contribute nothing, silently.
            if !configuration.is_resolvable() {
                configurations_skipped += 1;
                continue;
            }

            let artifacts = match self.configuration_provider.resolve_artifacts(configuration) {
                Ok(artifacts) => artifacts,
                Err(e) => {
                    failed_configurations.push(FailedConfiguration {
                        name: e.name,
                        details: e.details,
                    });
                    continue;
                }
            };

            configurations_scanned += 1;
            let jars: Vec<PathBuf> = filter
                .filter_artifacts(artifacts)
                .into_iter()
                .filter(|artifact| is_jar(artifact))
                .collect();

            let total = jars.len();
            for (idx, jar) in jars.iter().enumerate() {
                self.progress_reporter.report_progress(
                    idx + 1,
                    total,
                    jar.file_name().and_then(|name| name.to_str()),
                );

                // A corrupt or unreadable archive only skips this artifact;
                // the rest of the configuration is still scanned.
                let entry_names = match self.archive_reader.entry_names(jar) {
                    Ok(names) => names,
                    Err(e) => {
                        self.progress_reporter.report_error(&format!(
                            "⚠️  Warning: Failed to read archive {}: {}",
                            jar.display(),
                            e
                        ));
                        unreadable_archives.push(UnreadableArchive {
                            path: jar.clone(),
                            details: e.to_string(),
                        });
                        continue;
                    }
                };

                artifacts_scanned += 1;
                for entry_name in entry_names {
                    if entry_name == MANIFEST_ENTRY {
                        findings.record(ManifestLabel::new(jar.clone(), entry_name));
                    }
                }
            }
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any artifacts.",
                pattern
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Scanned {} artifact(s) across {} configuration(s), found {} manifest(s)",
            artifacts_scanned,
            configurations_scanned,
            findings.len()
        ));

        Ok(AuditResponse {
            findings,
            failed_configurations,
            unreadable_archives,
            configurations_scanned,
            configurations_skipped,
            artifacts_scanned,
            metadata: AuditMetadata::generate(),
        })
    }
}
