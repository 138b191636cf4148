//! Format-agnostic view of a manifest's dependency maps.
//!
//! The collector and rewriter only see these traits; reading and writing
//! manifest files belongs to ecosystem crates such as `semver-sync-npm`.

use serde_json::{Map, Value};
use std::path::Path;

/// Manifest section holding a dependency map.
///
/// Only direct and development dependencies take part in reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencySection {
    /// Production dependencies (`dependencies`)
    Dependencies,
    /// Development dependencies (`devDependencies`)
    DevDependencies,
}

impl DependencySection {
    /// All sections, in the order they are scanned.
    pub const ALL: [Self; 2] = [Self::Dependencies, Self::DevDependencies];

    /// Key of the section in the manifest document.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
        }
    }
}

/// A mapping from dependency name to declared range.
pub trait DependencyMap {
    /// Name/range pairs in declaration order. Entries whose value is not a
    /// string are skipped.
    fn entries(&self) -> Vec<(&str, &str)>;

    /// Declared range for `name`, if it is a string.
    fn range(&self, name: &str) -> Option<&str>;

    /// Replaces the declared range for `name`.
    fn set_range(&mut self, name: &str, range: String);
}

impl DependencyMap for Map<String, Value> {
    fn entries(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(name, value)| value.as_str().map(|range| (name.as_str(), range)))
            .collect()
    }

    fn range(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    fn set_range(&mut self, name: &str, range: String) {
        self.insert(name.to_string(), Value::String(range));
    }
}

/// A manifest whose dependency sections can be read and rewritten.
pub trait DependencyManifest {
    type Map: DependencyMap;

    /// Location of the manifest, used for diagnostics and persistence.
    fn path(&self) -> &Path;

    /// The dependency map of a section, if present.
    fn section(&self, section: DependencySection) -> Option<&Self::Map>;

    /// Mutable access to the dependency map of a section, if present.
    fn section_mut(&mut self, section: DependencySection) -> Option<&mut Self::Map>;
}
