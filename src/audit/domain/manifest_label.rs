use std::fmt;
use std::path::{Path, PathBuf};

/// The archive entry name the audit looks for, compared exactly.
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// File name suffix identifying artifacts that are opened as archives.
pub const JAR_SUFFIX: &str = ".jar";

/// ManifestLabel value object identifying one manifest occurrence
///
/// Rendered as `{artifactPath}!/{entryName}`, the conventional notation for
/// an entry inside a jar. Labels are created transiently during a scan and
/// live only as long as the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLabel {
    artifact: PathBuf,
    entry: String,
}

impl ManifestLabel {
    pub fn new(artifact: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            entry: entry.into(),
        }
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }
}

impl fmt::Display for ManifestLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!/{}", self.artifact.display(), self.entry)
    }
}

/// Returns true when the artifact's file name marks it as a jar archive.
pub fn is_jar(artifact: &Path) -> bool {
    artifact
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(JAR_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_label_display_uses_bang_slash_notation() {
        let label = ManifestLabel::new("/libs/guava.jar", MANIFEST_ENTRY);
        assert_eq!(
            format!("{}", label),
            "/libs/guava.jar!/META-INF/MANIFEST.MF"
        );
    }

    #[test]
    fn test_label_accessors() {
        let label = ManifestLabel::new("/libs/a.jar", MANIFEST_ENTRY);
        assert_eq!(label.artifact(), PathBuf::from("/libs/a.jar").as_path());
        assert_eq!(label.entry(), "META-INF/MANIFEST.MF");
    }

    #[test]
    fn test_is_jar_accepts_jar_suffix() {
        assert!(is_jar(Path::new("/libs/guava-33.0.jar")));
        assert!(is_jar(Path::new("relative/dep.jar")));
    }

    #[test]
    fn test_is_jar_rejects_other_suffixes() {
        assert!(!is_jar(Path::new("/libs/guava-33.0.pom")));
        assert!(!is_jar(Path::new("/libs/readme.txt")));
        assert!(!is_jar(Path::new("/libs/jarless")));
    }

    #[test]
    fn test_is_jar_rejects_directory_named_jar() {
        // Only the file name counts, not parent components
        assert!(!is_jar(Path::new("/libs.jar/notes.txt")));
    }
}
