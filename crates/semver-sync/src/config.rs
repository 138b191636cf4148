//! Run configuration.
//!
//! [`SyncOptions`] selects which manifests take part in a run. Every field has
//! a default, so an empty JSON object deserializes to the standard monorepo
//! layout.
//!
//! # Examples
//!
//! ```
//! use semver_sync::SyncOptions;
//!
//! let options: SyncOptions = serde_json::from_str(r#"{"pattern": "apps/*/package.json"}"#).unwrap();
//! assert_eq!(options.pattern, "apps/*/package.json");
//! assert!(options.include_root);
//! ```

use serde::Deserialize;

/// Glob used when no pattern is given.
pub const DEFAULT_PATTERN: &str = "packages/*/package.json";

/// Options for a [`sync`](crate::sync) run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOptions {
    /// Glob selecting package manifests, relative to the run root.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Whether the root `package.json` takes part in the run.
    #[serde(default = "default_true")]
    pub include_root: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            include_root: true,
        }
    }
}

impl SyncOptions {
    /// Replaces the manifest glob, keeping the other options.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

const fn default_true() -> bool {
    true
}
