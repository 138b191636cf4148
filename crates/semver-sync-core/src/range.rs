//! Version range classification.
//!
//! A declared range is either exact (`1.2.3`, `16.0.0-alpha.13`), fuzzy
//! (`^1.2.3`, `~0.14.3`, `1.x`, `>=2 <3`) or a compound of alternatives
//! joined with `||`. Only fuzzy components take part in reconciliation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between the alternatives of a compound range.
pub const COMPOUND_SEPARATOR: &str = "||";

/// Returns true if the range is a fully pinned `MAJOR.MINOR.PATCH` version.
///
/// Prerelease and build suffixes are allowed. Exact ranges are never grouped
/// or rewritten.
///
/// # Examples
///
/// ```
/// use semver_sync_core::range::is_exact_range;
///
/// assert!(is_exact_range("4.0.0"));
/// assert!(is_exact_range("16.0.0-alpha.13"));
/// assert!(!is_exact_range("^4.0.0"));
/// assert!(!is_exact_range("4"));
/// ```
pub fn is_exact_range(range: &str) -> bool {
    static EXACT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+").unwrap());

    EXACT_REGEX.is_match(range)
}

/// Extracts the major-version key of a fuzzy range: its first run of digits.
///
/// Returns `None` for ranges without digits (`*`, `x`, `latest`); such ranges
/// cannot be grouped.
///
/// # Examples
///
/// ```
/// use semver_sync_core::range::major_version;
///
/// assert_eq!(major_version("^1.0.0"), Some("1"));
/// assert_eq!(major_version("~2.0.0"), Some("2"));
/// assert_eq!(major_version("40.0.0"), Some("40"));
/// assert_eq!(major_version("*"), None);
/// ```
pub fn major_version(range: &str) -> Option<&str> {
    static MAJOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

    MAJOR_REGEX.find(range).map(|m| m.as_str())
}

/// Splits a compound range into its trimmed alternatives.
///
/// A simple range yields a single element.
pub fn split_compound(range: &str) -> Vec<&str> {
    range.split(COMPOUND_SEPARATOR).map(str::trim).collect()
}

/// Joins range alternatives back into a compound range.
pub fn join_compound<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Returns true if the string is valid npm range syntax.
///
/// Git URLs, `file:` paths and dist-tags are not ranges and are left alone by
/// both collection and rewriting.
pub fn is_valid_range(range: &str) -> bool {
    node_semver::Range::parse(range).is_ok()
}
