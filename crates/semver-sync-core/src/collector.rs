//! Collection of declared ranges across manifests.

use crate::diagnostics::Diagnostic;
use crate::manifest::{DependencyManifest, DependencyMap, DependencySection};
use crate::range::is_valid_range;
use std::collections::BTreeMap;

/// Dependencies declared with more than one distinct range, with those ranges.
pub type DuplicatesReport = BTreeMap<String, Vec<String>>;

/// Every distinct range declared for each dependency name.
///
/// Ranges keep first-seen order and are never repeated; names are kept
/// sorted so reports come out deterministic.
///
/// # Examples
///
/// ```
/// use semver_sync_core::DependencyRangeIndex;
///
/// let mut index = DependencyRangeIndex::new();
/// index.upsert("lodash", "^4.1.234");
/// index.upsert("lodash", "^4.0.0");
/// index.upsert("lodash", "^4.1.234");
///
/// assert_eq!(index.get("lodash").unwrap(), ["^4.1.234", "^4.0.0"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRangeIndex {
    ranges: BTreeMap<String, Vec<String>>,
}

impl DependencyRangeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `range` for `name` unless it was already seen.
    ///
    /// Returns true if the range was new.
    pub fn upsert(&mut self, name: &str, range: &str) -> bool {
        let ranges = self.ranges.entry(name.to_string()).or_default();
        if ranges.iter().any(|seen| seen == range) {
            return false;
        }
        ranges.push(range.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.ranges.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.ranges
            .iter()
            .map(|(name, ranges)| (name.as_str(), ranges.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Names declared with more than one distinct range.
    pub fn duplicates(&self) -> DuplicatesReport {
        self.ranges
            .iter()
            .filter(|(_, ranges)| ranges.len() > 1)
            .map(|(name, ranges)| (name.clone(), ranges.clone()))
            .collect()
    }
}

/// Output of [`collect`].
#[derive(Debug, Default)]
pub struct Collected {
    pub index: DependencyRangeIndex,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds the range index over `dependencies` and `devDependencies` of every
/// manifest.
///
/// Development ranges count the same as direct ones. Strings that are not
/// valid ranges are skipped and reported as [`Diagnostic::InvalidRange`].
pub fn collect<'a, M, I>(manifests: I) -> Collected
where
    M: DependencyManifest + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut collected = Collected::default();

    for manifest in manifests {
        for section in DependencySection::ALL {
            let Some(map) = manifest.section(section) else {
                continue;
            };

            for (name, range) in map.entries() {
                if !is_valid_range(range) {
                    tracing::debug!(
                        manifest = %manifest.path().display(),
                        name,
                        range,
                        "skipping invalid range"
                    );
                    collected.diagnostics.push(Diagnostic::InvalidRange {
                        manifest: manifest.path().to_path_buf(),
                        name: name.to_string(),
                        range: range.to_string(),
                    });
                    continue;
                }
                collected.index.upsert(name, range);
            }
        }
    }

    collected
}
