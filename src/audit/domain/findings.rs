use super::ManifestLabel;

/// AuditFindings - the ordered accumulator of manifest occurrences
///
/// Labels are appended in scan order and never reordered; the report
/// prints them exactly as collected. Built fresh per invocation.
#[derive(Debug, Default)]
pub struct AuditFindings {
    labels: Vec<ManifestLabel>,
}

impl AuditFindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: ManifestLabel) {
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// More than one manifest across all scanned artifacts is the
    /// condition the audit warns about. Zero or one is fine.
    pub fn has_duplicates(&self) -> bool {
        self.labels.len() > 1
    }

    pub fn labels(&self) -> &[ManifestLabel] {
        &self.labels
    }
}
