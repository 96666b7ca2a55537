use crate::application::read_models::AuditReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Header line printed when more than one manifest was found
const WARNING_HEADER: &str = "WARNING: More than one MANIFEST.MF file was found:";

/// TextFormatter adapter producing the plain advisory report
///
/// The text report is intentionally quiet: one line per configuration
/// that failed to resolve, then the warning block when more than one
/// manifest was found. Zero or one manifest and no failures renders an
/// empty report, so a clean audit prints nothing at all.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let mut output = String::new();

        for failed in &model.failed_configurations {
            output.push_str(&format!("Could not resolve configuration: {}\n", failed.name));
        }

        if model.duplicate {
            output.push_str(WARNING_HEADER);
            output.push('\n');
            for label in &model.manifest_labels {
                output.push_str(label);
                output.push('\n');
            }
        }

        Ok(output)
    }
}
