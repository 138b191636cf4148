//! Re-applies resolved common ranges to manifest dependency maps.

use crate::manifest::{DependencyManifest, DependencyMap, DependencySection};
use crate::range::{is_exact_range, is_valid_range, join_compound, major_version, split_compound};
use crate::resolver::{CommonRangeTable, MajorRanges};

/// Rebuilds a declared range from the resolved common ranges.
///
/// Each fuzzy alternative is replaced with the common range of its major
/// version. Exact versions, alternatives without a major version and
/// alternatives whose major version has no common range are kept as they are.
///
/// # Examples
///
/// ```
/// use semver_sync_core::{MajorRanges, rebuild_range};
///
/// let common = MajorRanges::from([("15".to_string(), "^15.5.0".to_string())]);
///
/// assert_eq!(
///     rebuild_range("^15.0.0 || 16.0.0-alpha.13", &common),
///     "^15.5.0 || 16.0.0-alpha.13"
/// );
/// ```
pub fn rebuild_range(range: &str, common: &MajorRanges) -> String {
    let parts: Vec<&str> = split_compound(range)
        .into_iter()
        .map(|part| {
            if is_exact_range(part) {
                return part;
            }
            major_version(part)
                .and_then(|major| common.get(major))
                .map_or(part, String::as_str)
        })
        .collect();

    join_compound(&parts)
}

/// Applies the common ranges of `name` to its entry in `map`.
///
/// Returns true if the entry changed. Missing entries and values that are not
/// ranges (git URLs, `file:` paths, dist-tags) are left alone.
pub fn apply_common_range<D>(map: &mut D, name: &str, common: &MajorRanges) -> bool
where
    D: DependencyMap + ?Sized,
{
    let Some(range) = map.range(name) else {
        return false;
    };
    if !is_valid_range(range) {
        return false;
    }

    let rebuilt = rebuild_range(range, common);
    if rebuilt == range {
        return false;
    }

    tracing::debug!(name, from = range, to = %rebuilt, "rewriting range");
    map.set_range(name, rebuilt);
    true
}

/// Applies the common range table to both dependency sections of a manifest.
///
/// Returns true if any entry changed.
pub fn apply_to_manifest<M: DependencyManifest>(manifest: &mut M, table: &CommonRangeTable) -> bool {
    let mut modified = false;

    for section in DependencySection::ALL {
        let Some(map) = manifest.section_mut(section) else {
            continue;
        };

        let names: Vec<String> = map
            .entries()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();

        for name in names {
            if let Some(common) = table.get(&name) {
                modified |= apply_common_range(map, &name, common);
            }
        }
    }

    modified
}

/// Applies the common range table to every manifest.
///
/// Returns updated copies of the manifests that changed, in input order.
/// Manifests that already match the table are not returned.
pub fn apply_common_ranges<M>(manifests: &[M], table: &CommonRangeTable) -> Vec<M>
where
    M: DependencyManifest + Clone,
{
    manifests
        .iter()
        .filter_map(|manifest| {
            let mut updated = manifest.clone();
            apply_to_manifest(&mut updated, table).then_some(updated)
        })
        .collect()
}
