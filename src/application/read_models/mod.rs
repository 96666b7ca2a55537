pub mod audit_read_model;

pub use audit_read_model::{AuditReadModel, ToolView};
