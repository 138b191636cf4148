//! Intersection of npm version ranges.
//!
//! Ranges are parsed and intersected with `node-semver`. The result is read
//! back as an [`Interval`] and rendered in the shortest npm form available
//! (`^V`, `~V`, `V`, or explicit comparators).
//!
//! # Examples
//!
//! ```
//! use semver_sync_core::intersect::intersect;
//!
//! assert_eq!(intersect(&["0.14.x", "~0.14.3"]).unwrap(), "^0.14.3");
//! assert_eq!(intersect(&["^15.5.0", "~15.7.0", "^15.0.0"]).unwrap(), "~15.7.0");
//! assert!(intersect(&["^1.2.0", "~1.1.0"]).is_err());
//! ```

use crate::error::{Result, SyncError};
use node_semver::{Identifier, Range, Version};
use std::cmp::Ordering;
use std::fmt;

/// One end of an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub version: Version,
    pub inclusive: bool,
}

/// Lower and upper bounds of a range made of a single comparator set.
///
/// `None` bounds are open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interval {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Interval {
    /// Reads the bounds of `range`.
    ///
    /// Returns `None` when the range is a union of several comparator sets.
    /// An exclusive upper bound on the `-0` prerelease that npm uses for
    /// caret, tilde and x-range ceilings is reported as the plain release,
    /// and a `>=0.0.0` lower bound as open.
    pub fn from_range(range: &Range) -> Option<Self> {
        let text = range.to_string();
        if text.contains("||") {
            return None;
        }

        let mut interval = Self::default();
        for comparator in text.split_whitespace() {
            if comparator == "*" {
                continue;
            }
            let (operator, version) = split_operator(comparator);
            let mut version = Version::parse(version).ok()?;
            version.build.clear();

            match operator {
                ">=" => interval.lower = Some(Bound::new(version, true)),
                ">" => interval.lower = Some(Bound::new(version, false)),
                "<=" => interval.upper = Some(Bound::new(version, true)),
                "<" => interval.upper = Some(Bound::new(without_floor_prerelease(version), false)),
                _ => {
                    interval.lower = Some(Bound::new(version.clone(), true));
                    interval.upper = Some(Bound::new(version, true));
                }
            }
        }

        if interval
            .lower
            .as_ref()
            .is_some_and(|lower| lower.inclusive && lower.version == Version::new(0, 0, 0))
        {
            interval.lower = None;
        }

        Some(interval)
    }

    /// Returns true if no version satisfies this interval.
    pub fn is_empty(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => match lower.version.cmp(&upper.version) {
                Ordering::Greater => true,
                Ordering::Equal => !(lower.inclusive && upper.inclusive),
                Ordering::Less => false,
            },
            _ => false,
        }
    }
}

impl Bound {
    const fn new(version: Version, inclusive: bool) -> Self {
        Self { version, inclusive }
    }
}

/// Renders the interval in the shortest npm range form.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.lower, &self.upper) {
            (None, None) => f.write_str("*"),
            (Some(lower), Some(upper)) if lower.inclusive => {
                let v = &lower.version;
                if upper.inclusive && upper.version == *v {
                    write!(f, "{v}")
                } else if !upper.inclusive && upper.version == caret_ceiling(v) {
                    write!(f, "^{v}")
                } else if !upper.inclusive && upper.version == tilde_ceiling(v) {
                    write!(f, "~{v}")
                } else {
                    write!(f, "{} {}", render_lower(lower), render_upper(upper))
                }
            }
            (Some(lower), Some(upper)) => {
                write!(f, "{} {}", render_lower(lower), render_upper(upper))
            }
            (Some(lower), None) => f.write_str(&render_lower(lower)),
            (None, Some(upper)) => f.write_str(&render_upper(upper)),
        }
    }
}

/// Intersects a group of simple ranges into the tightest range satisfied by
/// every member.
///
/// A single member is returned unchanged. A prerelease lower bound survives
/// only when every member admits it; otherwise the bound moves to the
/// release of the same `MAJOR.MINOR.PATCH`.
///
/// # Errors
///
/// - [`SyncError::EmptyIntersection`] for an empty group
/// - [`SyncError::InvalidRange`] if a member cannot be parsed
/// - [`SyncError::Unsatisfiable`] if the members have no version in common
pub fn intersect<S: AsRef<str>>(ranges: &[S]) -> Result<String> {
    let (first, rest) = match ranges {
        [] => return Err(SyncError::EmptyIntersection),
        [single] => return Ok(single.as_ref().to_string()),
        [first, rest @ ..] => (first, rest),
    };

    let first = parse_range(first.as_ref())?;
    let mut members = vec![first.clone()];
    let mut combined = first;

    for text in rest {
        let member = parse_range(text.as_ref())?;
        let next = combined
            .intersect(&member)
            .ok_or_else(|| unsatisfiable(&combined, text.as_ref()))?;
        combined = next;
        members.push(member);
    }

    let mut interval = Interval::from_range(&combined).ok_or_else(|| {
        SyncError::invalid_range(
            combined.to_string(),
            "intersection spans several comparator sets",
        )
    })?;

    if let Some(lower) = &mut interval.lower
        && lower.version.is_prerelease()
        && !members.iter().all(|member| member.satisfies(&lower.version))
    {
        lower.version.pre_release.clear();
        lower.inclusive = true;
    }

    if interval.is_empty() {
        let range = interval.lower.as_ref().map(render_lower).unwrap_or_default();
        let other = interval.upper.as_ref().map(render_upper).unwrap_or_default();
        return Err(SyncError::Unsatisfiable { range, other });
    }

    Ok(interval.to_string())
}

fn parse_range(text: &str) -> Result<Range> {
    Range::parse(text).map_err(|e| SyncError::invalid_range(text, e.to_string()))
}

fn unsatisfiable(combined: &Range, other: &str) -> SyncError {
    let range = Interval::from_range(combined)
        .map_or_else(|| combined.to_string(), |interval| interval.to_string());
    SyncError::Unsatisfiable {
        range,
        other: other.to_string(),
    }
}

fn split_operator(comparator: &str) -> (&str, &str) {
    for operator in [">=", "<=", ">", "<"] {
        if let Some(version) = comparator.strip_prefix(operator) {
            return (operator, version);
        }
    }
    ("", comparator)
}

fn without_floor_prerelease(mut version: Version) -> Version {
    if version.pre_release == [Identifier::Numeric(0)] {
        version.pre_release.clear();
    }
    version
}

fn caret_ceiling(v: &Version) -> Version {
    if v.major > 0 {
        Version::new(v.major + 1, 0, 0)
    } else if v.minor > 0 {
        Version::new(0, v.minor + 1, 0)
    } else {
        Version::new(0, 0, v.patch + 1)
    }
}

fn tilde_ceiling(v: &Version) -> Version {
    Version::new(v.major, v.minor + 1, 0)
}

fn render_lower(bound: &Bound) -> String {
    if bound.inclusive {
        format!(">={}", bound.version)
    } else {
        format!(">{}", bound.version)
    }
}

fn render_upper(bound: &Bound) -> String {
    if bound.inclusive {
        format!("<={}", bound.version)
    } else {
        format!("<{}", bound.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(range: &str) -> (Option<String>, Option<String>) {
        let interval = Interval::from_range(&Range::parse(range).unwrap()).unwrap();
        (
            interval.lower.as_ref().map(render_lower),
            interval.upper.as_ref().map(render_upper),
        )
    }

    fn some(lower: &str, upper: &str) -> (Option<String>, Option<String>) {
        (Some(lower.to_string()), Some(upper.to_string()))
    }

    fn shortest(range: &str) -> String {
        Interval::from_range(&Range::parse(range).unwrap())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_bounds_caret() {
        assert_eq!(bounds("^1.2.3"), some(">=1.2.3", "<2.0.0"));
        assert_eq!(bounds("^0.14.3"), some(">=0.14.3", "<0.15.0"));
        assert_eq!(bounds("^0.0.3"), some(">=0.0.3", "<0.0.4"));
        assert_eq!(bounds("^1.x"), some(">=1.0.0", "<2.0.0"));
    }

    #[test]
    fn test_bounds_tilde_and_x_ranges() {
        assert_eq!(bounds("~1.2.3"), some(">=1.2.3", "<1.3.0"));
        assert_eq!(bounds("~1.2"), some(">=1.2.0", "<1.3.0"));
        assert_eq!(bounds("0.14.x"), some(">=0.14.0", "<0.15.0"));
        assert_eq!(bounds("2"), some(">=2.0.0", "<3.0.0"));
        assert_eq!(bounds("*"), (None, None));
    }

    #[test]
    fn test_bounds_comparators_and_hyphen() {
        assert_eq!(bounds(">=1.2.3 <2.0.0"), some(">=1.2.3", "<2.0.0"));
        assert_eq!(bounds(">1.2.3"), (Some(">1.2.3".into()), None));
        assert_eq!(bounds("<=1.2.3"), (None, Some("<=1.2.3".into())));
        assert_eq!(bounds("1.2.3 - 2.3.4"), some(">=1.2.3", "<=2.3.4"));
        assert_eq!(bounds("1.2.3 - 2.3.4 >=2.0.0"), some(">=2.0.0", "<=2.3.4"));
    }

    #[test]
    fn test_bounds_exact() {
        assert_eq!(bounds("1.2.3"), some(">=1.2.3", "<=1.2.3"));
        assert_eq!(bounds("=1.2.3"), some(">=1.2.3", "<=1.2.3"));
    }

    #[test]
    fn test_union_has_no_single_interval() {
        let range = Range::parse("^1.0.0 || ^2.0.0").unwrap();
        assert_eq!(Interval::from_range(&range), None);
    }

    #[test]
    fn test_render_shorthand() {
        assert_eq!(shortest(">=0.14.3 <0.15.0"), "^0.14.3");
        assert_eq!(shortest(">=15.7.0 <15.8.0"), "~15.7.0");
        assert_eq!(shortest(">=0.0.3 <0.1.0"), "~0.0.3");
        assert_eq!(shortest(">=1.2.3 <1.5.0"), ">=1.2.3 <1.5.0");
        assert_eq!(shortest(">=1.2.3"), ">=1.2.3");
        assert_eq!(shortest("1.2.3"), "1.2.3");
        assert_eq!(shortest("x"), "*");
    }

    #[test]
    fn test_intersect_major_zero() {
        assert_eq!(intersect(&["0.14.x", "~0.14.3"]).unwrap(), "^0.14.3");
    }

    #[test]
    fn test_intersect_carets() {
        assert_eq!(intersect(&["^15.5.0", "^15.0.0"]).unwrap(), "^15.5.0");
        assert_eq!(
            intersect(&["^4.0.0", "^4.1.234", "^4.2.33", "^4.1.0"]).unwrap(),
            "^4.2.33"
        );
    }

    #[test]
    fn test_intersect_caret_and_tilde() {
        assert_eq!(
            intersect(&["^15.5.0", "~15.7.0", "^15.0.0"]).unwrap(),
            "~15.7.0"
        );
    }

    #[test]
    fn test_intersect_single_unchanged() {
        assert_eq!(intersect(&["1.x"]).unwrap(), "1.x");
    }

    #[test]
    fn test_intersect_with_comparators() {
        assert_eq!(intersect(&["^1.2.0", "<1.5.0"]).unwrap(), ">=1.2.0 <1.5.0");
        assert_eq!(intersect(&[">=2.1.0", "2.x"]).unwrap(), "^2.1.0");
        assert_eq!(intersect(&["^3.1.0", "3.4.5"]).unwrap(), "3.4.5");
        assert_eq!(intersect(&[">1.2.3", "^1.0.0"]).unwrap(), ">1.2.3 <2.0.0");
    }

    #[test]
    fn test_intersect_hyphen_with_comparator() {
        assert_eq!(
            intersect(&["1.2.3 - 2.3.4", ">=2.0.0"]).unwrap(),
            ">=2.0.0 <=2.3.4"
        );
    }

    #[test]
    fn test_intersect_disjoint() {
        let err = intersect(&["^1.2.0", "~1.1.0"]).unwrap_err();
        assert!(matches!(err, SyncError::Unsatisfiable { .. }));
        insta::assert_snapshot!(err.to_string(), @"range ^1.2.0 is not compatible with range ~1.1.0");
    }

    #[test]
    fn test_intersect_prerelease_same_tuple() {
        assert_eq!(
            intersect(&["^1.2.3-beta.1", "^1.2.3-beta.5"]).unwrap(),
            "^1.2.3-beta.5"
        );
    }

    #[test]
    fn test_intersect_prerelease_dropped_without_consent() {
        assert_eq!(intersect(&["^1.2.3-beta.1", "^1.0.0"]).unwrap(), "^1.2.3");
    }

    #[test]
    fn test_intersect_prerelease_with_leading_zero_identifier() {
        assert_eq!(intersect(&["^1.2.3-beta.01", "^1.2.0"]).unwrap(), "^1.2.3");
    }

    #[test]
    fn test_intersect_disjoint_prereleases() {
        let err = intersect(&["~1.2.3-beta.1", ">=1.3.0-rc.1"]).unwrap_err();
        assert!(matches!(err, SyncError::Unsatisfiable { .. }));
    }

    #[test]
    fn test_intersect_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            intersect(&empty).unwrap_err(),
            SyncError::EmptyIntersection
        ));
    }

    #[test]
    fn test_intersect_invalid_member() {
        let err = intersect(&["^1.0.0", "^one"]).unwrap_err();
        assert!(matches!(err, SyncError::InvalidRange { .. }));
    }
}
