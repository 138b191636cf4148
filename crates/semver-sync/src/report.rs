//! Console rendering of the duplicates report.

use semver_sync_core::DuplicatesReport;

/// Header printed above dependencies declared with several ranges.
pub const DUPLICATES_HEADER: &str =
    "The following packages have duplicate versions that I can't de-duplicate";

/// Renders the duplicates report as printed by the binary.
///
/// Returns `None` when there is nothing to report.
pub fn render_duplicates(duplicates: &DuplicatesReport) -> Option<String> {
    if duplicates.is_empty() {
        return None;
    }

    let mut out = String::from(DUPLICATES_HEADER);
    for (name, ranges) in duplicates {
        out.push_str(&format!("\n{name}: {}", ranges.join(", ")));
    }
    Some(out)
}
