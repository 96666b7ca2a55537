use crate::application::dto::{AuditResponse, FailedConfiguration, UnreadableArchive};

/// Tool identity for the report header
#[derive(Debug, Clone)]
pub struct ToolView {
    pub name: String,
    pub version: String,
}

/// AuditReadModel - flat, formatter-friendly view of one audit run
///
/// Formatters render from this model only; they never reach back into
/// domain objects. Labels are pre-rendered strings in scan order.
#[derive(Debug)]
pub struct AuditReadModel {
    pub tool: ToolView,
    pub timestamp: String,
    pub configurations_scanned: usize,
    pub configurations_skipped: usize,
    pub artifacts_scanned: usize,
    pub failed_configurations: Vec<FailedConfiguration>,
    pub unreadable_archives: Vec<UnreadableArchive>,
    pub manifest_labels: Vec<String>,
    pub duplicate: bool,
}

impl AuditReadModel {
    /// Builds the read model from a use case response
    pub fn build(response: AuditResponse) -> Self {
        let duplicate = response.has_duplicates();
        let manifest_labels = response
            .findings
            .labels()
            .iter()
            .map(|label| label.to_string())
            .collect();

        Self {
            tool: ToolView {
                name: response.metadata.tool_name().to_string(),
                version: response.metadata.tool_version().to_string(),
            },
            timestamp: response.metadata.timestamp().to_string(),
            configurations_scanned: response.configurations_scanned,
            configurations_skipped: response.configurations_skipped,
            artifacts_scanned: response.artifacts_scanned,
            failed_configurations: response.failed_configurations,
            unreadable_archives: response.unreadable_archives,
            manifest_labels,
            duplicate,
        }
    }
}
