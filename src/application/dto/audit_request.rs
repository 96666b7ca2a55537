use std::path::PathBuf;

/// AuditRequest - Internal request DTO for the manifest audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Project directory the audit was invoked on, used for messages only
    pub project_path: PathBuf,
    /// Wildcard patterns for artifact file names to exclude from the scan
    pub exclude_patterns: Vec<String>,
}

impl AuditRequest {
    pub fn new(project_path: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Self {
            project_path,
            exclude_patterns,
        }
    }
}
