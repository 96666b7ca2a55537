pub mod audit_metadata;
pub mod configuration;
pub mod findings;
pub mod manifest_label;

pub use audit_metadata::AuditMetadata;
pub use configuration::Configuration;
pub use findings::AuditFindings;
pub use manifest_label::{is_jar, ManifestLabel, JAR_SUFFIX, MANIFEST_ENTRY};
