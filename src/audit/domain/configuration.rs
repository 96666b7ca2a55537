/// Configuration value object representing a named, resolvable dependency set
///
/// A configuration is read-only from the audit's point of view: it carries a
/// name and a flag stating whether the host build tool allows it to be
/// resolved. Artifact resolution itself goes through the
/// `ConfigurationProvider` port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    name: String,
    resolvable: bool,
}

impl Configuration {
    pub fn new(name: impl Into<String>, resolvable: bool) -> Self {
        Self {
            name: name.into(),
            resolvable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this configuration may be resolved at all.
    /// Non-resolvable configurations are skipped silently.
    pub fn is_resolvable(&self) -> bool {
        self.resolvable
    }
}
