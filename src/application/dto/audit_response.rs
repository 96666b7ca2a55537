use crate::audit::domain::{AuditFindings, AuditMetadata};
use std::path::PathBuf;

/// A configuration whose artifact resolution failed during the audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedConfiguration {
    pub name: String,
    pub details: String,
}

/// An artifact that looked like a jar but could not be read as a zip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableArchive {
    pub path: PathBuf,
    pub details: String,
}

/// AuditResponse - result of one audit run
///
/// Carries the collected manifest labels plus everything the report
/// needs: per-configuration resolution failures, per-artifact archive
/// failures, scan counters, and run metadata.
#[derive(Debug)]
pub struct AuditResponse {
    pub findings: AuditFindings,
    pub failed_configurations: Vec<FailedConfiguration>,
    pub unreadable_archives: Vec<UnreadableArchive>,
    pub configurations_scanned: usize,
    pub configurations_skipped: usize,
    pub artifacts_scanned: usize,
    pub metadata: AuditMetadata,
}

impl AuditResponse {
    pub fn has_duplicates(&self) -> bool {
        self.findings.has_duplicates()
    }
}
