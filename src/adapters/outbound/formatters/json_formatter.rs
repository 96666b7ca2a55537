use crate::application::read_models::AuditReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter producing a machine-readable report
///
/// Unlike the text report, the JSON report always carries the full scan
/// summary, including archive-read failures, so CI dashboards can track
/// partial scans.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    tool: JsonTool<'a>,
    timestamp: &'a str,
    configurations_scanned: usize,
    configurations_skipped: usize,
    artifacts_scanned: usize,
    failed_configurations: Vec<JsonFailedConfiguration<'a>>,
    unreadable_archives: Vec<JsonUnreadableArchive<'a>>,
    manifests: &'a [String],
    duplicate: bool,
}

#[derive(Serialize)]
struct JsonTool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct JsonFailedConfiguration<'a> {
    name: &'a str,
    details: &'a str,
}

#[derive(Serialize)]
struct JsonUnreadableArchive<'a> {
    path: String,
    details: &'a str,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let report = JsonReport {
            tool: JsonTool {
                name: &model.tool.name,
                version: &model.tool.version,
            },
            timestamp: &model.timestamp,
            configurations_scanned: model.configurations_scanned,
            configurations_skipped: model.configurations_skipped,
            artifacts_scanned: model.artifacts_scanned,
            failed_configurations: model
                .failed_configurations
                .iter()
                .map(|failed| JsonFailedConfiguration {
                    name: &failed.name,
                    details: &failed.details,
                })
                .collect(),
            unreadable_archives: model
                .unreadable_archives
                .iter()
                .map(|archive| JsonUnreadableArchive {
                    path: archive.path.display().to_string(),
                    details: &archive.details,
                })
                .collect(),
            manifests: &model.manifest_labels,
            duplicate: model.duplicate,
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ToolView;
    use std::path::PathBuf;

    fn model(labels: Vec<&str>) -> AuditReadModel {
        let duplicate = labels.len() > 1;
        AuditReadModel {
            tool: ToolView {
                name: "manifest-audit".to_string(),
                version: "0.3.0".to_string(),
            },
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            configurations_scanned: 2,
            configurations_skipped: 1,
            artifacts_scanned: labels.len(),
            failed_configurations: vec![],
            unreadable_archives: vec![],
            manifest_labels: labels.into_iter().map(String::from).collect(),
            duplicate,
        }
    }

    #[test]
    fn test_json_report_structure() {
        let formatter = JsonFormatter::new();
        let output = formatter
            .format(&model(vec![
                "/libs/a.jar!/META-INF/MANIFEST.MF",
                "/libs/b.jar!/META-INF/MANIFEST.MF",
            ]))
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["tool"]["name"], "manifest-audit");
        assert_eq!(parsed["duplicate"], true);
        assert_eq!(parsed["configurationsScanned"], 2);
        assert_eq!(parsed["configurationsSkipped"], 1);
        assert_eq!(parsed["manifests"].as_array().unwrap().len(), 2);
        assert_eq!(
            parsed["manifests"][0],
            "/libs/a.jar!/META-INF/MANIFEST.MF"
        );
    }

    #[test]
    fn test_json_report_without_duplicates() {
        let formatter = JsonFormatter::new();
        let output = formatter
            .format(&model(vec!["/libs/a.jar!/META-INF/MANIFEST.MF"]))
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["duplicate"], false);
    }

    #[test]
    fn test_unreadable_archives_are_serialized() {
        let formatter = JsonFormatter::new();
        let mut m = model(vec![]);
        m.unreadable_archives = vec![crate::application::dto::UnreadableArchive {
            path: PathBuf::from("/libs/broken.jar"),
            details: "invalid Zip archive".to_string(),
        }];

        let output = formatter.format(&m).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["unreadableArchives"][0]["path"],
            "/libs/broken.jar"
        );
    }
}
