//! Common range resolution per dependency and major version.

use crate::collector::DependencyRangeIndex;
use crate::diagnostics::Diagnostic;
use crate::intersect::intersect;
use crate::range::{is_exact_range, major_version, split_compound};
use std::collections::BTreeMap;

/// Resolved range per major-version key of a single dependency.
pub type MajorRanges = BTreeMap<String, String>;

/// Resolved ranges for every dependency name.
pub type CommonRangeTable = BTreeMap<String, MajorRanges>;

/// Output of [`resolve`].
#[derive(Debug, Default)]
pub struct Resolved {
    pub table: CommonRangeTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves the common range of every dependency in the index.
///
/// Groups that cannot be intersected are logged, reported as
/// [`Diagnostic::Unresolvable`] and left out of the table, so manifests keep
/// their own ranges for that major version.
pub fn resolve(index: &DependencyRangeIndex) -> Resolved {
    let mut resolved = Resolved::default();

    for (name, ranges) in index.iter() {
        let (common, diagnostics) = resolve_ranges(name, ranges);
        resolved.table.insert(name.to_string(), common);
        resolved.diagnostics.extend(diagnostics);
    }

    resolved
}

/// Resolves the ranges declared for one dependency, keyed by major version.
///
/// Compound ranges are split into their alternatives; exact versions and
/// alternatives without a major version (`*`) are not grouped. A group with
/// a single distinct member resolves to that member.
///
/// # Examples
///
/// ```
/// use semver_sync_core::resolve_ranges;
///
/// let (common, diagnostics) =
///     resolve_ranges("react", &["0.14.x || ^15.5.0", "~0.14.3 || ^15.0.0"]);
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(common["0"], "^0.14.3");
/// assert_eq!(common["15"], "^15.5.0");
/// ```
pub fn resolve_ranges<S: AsRef<str>>(name: &str, ranges: &[S]) -> (MajorRanges, Vec<Diagnostic>) {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for compound in ranges {
        for range in split_compound(compound.as_ref()) {
            if is_exact_range(range) {
                continue;
            }
            let Some(major) = major_version(range) else {
                continue;
            };
            let group = groups.entry(major).or_default();
            if !group.contains(&range) {
                group.push(range);
            }
        }
    }

    let mut common = MajorRanges::new();
    let mut diagnostics = Vec::new();

    for (major, group) in groups {
        match intersect(group.as_slice()) {
            Ok(range) => {
                tracing::trace!(name, major, range = %range, "resolved common range");
                common.insert(major.to_string(), range);
            }
            Err(err) => {
                tracing::warn!(name, major, ranges = ?group, error = %err, "cannot intersect ranges");
                diagnostics.push(Diagnostic::Unresolvable {
                    name: name.to_string(),
                    major: major.to_string(),
                    ranges: group.iter().map(|r| (*r).to_string()).collect(),
                    reason: err.to_string(),
                });
            }
        }
    }

    (common, diagnostics)
}
