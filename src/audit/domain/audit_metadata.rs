use chrono::{SecondsFormat, Utc};

/// AuditMetadata value object describing one audit run
#[derive(Debug, Clone)]
pub struct AuditMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl AuditMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Metadata for the current run: RFC 3339 UTC timestamp plus the
    /// crate's own name and version.
    pub fn generate() -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_metadata_new() {
        let metadata = AuditMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "manifest-audit".to_string(),
            "0.3.0".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "manifest-audit");
        assert_eq!(metadata.tool_version(), "0.3.0");
    }

    #[test]
    fn test_generate_uses_crate_identity() {
        let metadata = AuditMetadata::generate();
        assert_eq!(metadata.tool_name(), "manifest-audit");
        assert!(!metadata.tool_version().is_empty());
        // RFC 3339 with Z suffix
        assert!(metadata.timestamp().ends_with('Z'));
    }
}
