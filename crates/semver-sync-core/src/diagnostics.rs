use std::fmt;
use std::path::PathBuf;

/// A per-item problem that did not abort the run.
///
/// Collected alongside the primary results so callers can report them
/// however they like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A declared range that is not valid npm range syntax. It was left out of
    /// the range index.
    InvalidRange {
        manifest: PathBuf,
        name: String,
        range: String,
    },
    /// A major-version group whose ranges have no version in common. The
    /// group was left out of the common range table.
    Unresolvable {
        name: String,
        major: String,
        ranges: Vec<String>,
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange {
                manifest,
                name,
                range,
            } => write!(
                f,
                "{}: skipped invalid range '{range}' for {name}",
                manifest.display()
            ),
            Self::Unresolvable {
                name,
                major,
                ranges,
                reason,
            } => write!(
                f,
                "{name}@{major}: cannot intersect {}: {reason}",
                ranges.join(", ")
            ),
        }
    }
}
