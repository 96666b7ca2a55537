use crate::application::read_models::AuditReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the audit report
///
/// Implementations decide the report's shape (plain text, JSON, ...);
/// the stdout contract for the text form lives with the adapter.
pub trait ReportFormatter {
    /// Formats the audit result as a complete report string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &AuditReadModel) -> Result<String>;
}
