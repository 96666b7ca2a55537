use crate::shared::Result;
use std::cell::RefCell;
use std::path::PathBuf;

/// Maximum number of exclude patterns accepted per invocation
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ArtifactFilter - excludes artifacts by file name before scanning
///
/// Supports wildcard patterns using '*' to match zero or more characters,
/// e.g. "*-sources.jar" or "guava-*". Patterns are case-sensitive and
/// matched against the artifact's file name, never its full path.
#[derive(Debug)]
pub struct ArtifactFilter {
    patterns: Vec<ExcludePattern>,
}

impl ArtifactFilter {
    /// Creates a new ArtifactFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, too long, invalid characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let mut compiled_patterns = Vec::new();
        for pattern in patterns {
            compiled_patterns.push(ExcludePattern::new(pattern)?);
        }

        Ok(Self {
            patterns: compiled_patterns,
        })
    }

    /// Filters artifacts, returning only those whose file name does not
    /// match any exclusion pattern. Order is preserved.
    pub fn filter_artifacts(&self, artifacts: Vec<PathBuf>) -> Vec<PathBuf> {
        artifacts
            .into_iter()
            .filter(|artifact| {
                let file_name = artifact
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default();
                !self.matches(file_name)
            })
            .collect()
    }

    /// Checks if a file name matches any exclusion pattern
    fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    /// Returns patterns that never matched an artifact, for warning the
    /// user about typos. Meaningful only after filtering.
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !*p.matched.borrow())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern with its compiled matcher
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: RefCell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: RefCell::new(false),
        })
    }

    fn matches(&self, file_name: &str) -> bool {
        let is_match = self.matcher.matches(file_name);
        if is_match {
            *self.matched.borrow_mut() = true;
        }
        is_match
    }
}

/// Pattern matcher variants for efficient matching
#[derive(Debug)]
enum PatternMatcher {
    /// Exact match: "guava-33.0.jar"
    Exact(String),
    /// Leading wildcard: "*-sources.jar" -> ends_with
    EndsWith(String),
    /// Trailing wildcard: "guava-*" -> starts_with
    StartsWith(String),
    /// Wrapped wildcard: "*snapshot*" -> contains
    Contains(String),
    /// General case: all parts must appear in order
    Parts(Vec<String>),
}

impl PatternMatcher {
    fn matches(&self, file_name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => file_name == s,
            PatternMatcher::EndsWith(suffix) => file_name.ends_with(suffix),
            PatternMatcher::StartsWith(prefix) => file_name.starts_with(prefix),
            PatternMatcher::Contains(middle) => file_name.contains(middle),
            PatternMatcher::Parts(parts) => {
                let mut current_pos = 0;
                for part in parts {
                    if let Some(pos) = file_name[current_pos..].find(part) {
                        current_pos += pos + part.len();
                    } else {
                        return false;
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '*'
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 => {
            if let Some(stripped) = pattern.strip_prefix('*') {
                PatternMatcher::EndsWith(stripped.to_string())
            } else if let Some(stripped) = pattern.strip_suffix('*') {
                PatternMatcher::StartsWith(stripped.to_string())
            } else {
                // "prefix*suffix"
                let parts: Vec<String> = pattern.split('*').map(|s| s.to_string()).collect();
                PatternMatcher::Parts(parts)
            }
        }
        2 if pattern.starts_with('*') && pattern.ends_with('*') => {
            let middle = &pattern[1..pattern.len() - 1];
            PatternMatcher::Contains(middle.to_string())
        }
        _ => {
            let parts: Vec<String> = pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();
            PatternMatcher::Parts(parts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from("/libs").join(n)).collect()
    }

    #[test]
    fn test_exact_match() {
        let filter = ArtifactFilter::new(vec!["guava.jar".to_string()]).unwrap();
        assert!(filter.matches("guava.jar"));
        assert!(!filter.matches("guava-extra.jar"));
        assert!(!filter.matches("my-guava.jar"));
    }

    #[test]
    fn test_ends_with_wildcard() {
        let filter = ArtifactFilter::new(vec!["*-sources.jar".to_string()]).unwrap();
        assert!(filter.matches("guava-sources.jar"));
        assert!(filter.matches("slf4j-sources.jar"));
        assert!(!filter.matches("sources.jar"));
        assert!(!filter.matches("guava-sources.jar.bak"));
    }

    #[test]
    fn test_starts_with_wildcard() {
        let filter = ArtifactFilter::new(vec!["guava-*".to_string()]).unwrap();
        assert!(filter.matches("guava-33.0.jar"));
        assert!(!filter.matches("my-guava-33.0.jar"));
    }

    #[test]
    fn test_contains_wildcard() {
        let filter = ArtifactFilter::new(vec!["*snapshot*".to_string()]).unwrap();
        assert!(filter.matches("lib-snapshot-1.0.jar"));
        assert!(filter.matches("snapshot.jar"));
        assert!(!filter.matches("lib-release-1.0.jar"));
    }

    #[test]
    fn test_inner_wildcard() {
        let filter = ArtifactFilter::new(vec!["guava*.jar".to_string()]).unwrap();
        assert!(filter.matches("guava-33.0.jar"));
        assert!(filter.matches("guava.jar"));
        assert!(!filter.matches("guava-33.0.pom"));
    }

    #[test]
    fn test_filter_artifacts_matches_file_name_only() {
        let filter = ArtifactFilter::new(vec!["*-sources.jar".to_string()]).unwrap();
        let kept = filter.filter_artifacts(paths(&["a.jar", "a-sources.jar", "b.jar"]));
        assert_eq!(kept, paths(&["a.jar", "b.jar"]));
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = ArtifactFilter::new(vec!["b.jar".to_string()]).unwrap();
        let kept = filter.filter_artifacts(paths(&["z.jar", "b.jar", "a.jar"]));
        assert_eq!(kept, paths(&["z.jar", "a.jar"]));
    }

    #[test]
    fn test_unmatched_patterns_reported() {
        let filter =
            ArtifactFilter::new(vec!["a.jar".to_string(), "missing-*".to_string()]).unwrap();
        let _ = filter.filter_artifacts(paths(&["a.jar", "b.jar"]));
        assert_eq!(filter.unmatched_patterns(), vec!["missing-*".to_string()]);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = ArtifactFilter::new(vec!["".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_wildcard_only_pattern_rejected() {
        let result = ArtifactFilter::new(vec!["**".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_character_rejected() {
        let result = ArtifactFilter::new(vec!["a/b.jar".to_string()]);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("invalid character"));
    }

    #[test]
    fn test_too_many_patterns_rejected() {
        let patterns: Vec<String> = (0..65).map(|i| format!("p{}.jar", i)).collect();
        let result = ArtifactFilter::new(patterns);
        assert!(result.is_err());
    }
}
