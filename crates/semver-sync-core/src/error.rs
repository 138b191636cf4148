use std::path::PathBuf;
use thiserror::Error;

/// Core error types for semver-sync.
///
/// Covers manifest parsing, range intersection and manifest discovery.
/// Per-item problems that do not abort a run (invalid ranges, unresolvable
/// groups) are reported as [`crate::Diagnostic`] values instead.
///
/// # Examples
///
/// ```
/// use semver_sync_core::error::{SyncError, Result};
///
/// fn parse_file(content: &str, file: &str) -> Result<()> {
///     if content.is_empty() {
///         return Err(SyncError::ParseError {
///             file: file.into(),
///             source: Box::new(std::io::Error::new(
///                 std::io::ErrorKind::InvalidData,
///                 "empty content"
///             )),
///         });
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("failed to parse {}: {source}", file.display())]
    ParseError {
        file: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid version range '{range}': {message}")]
    InvalidRange { range: String, message: String },

    #[error("range {range} is not compatible with range {other}")]
    Unsatisfiable { range: String, other: String },

    #[error("nothing to intersect")]
    EmptyIntersection,

    #[error("invalid manifest pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("I/O error on {}: {source}", file.display())]
    ManifestIo {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SyncError {
    /// Create an invalid range error.
    pub fn invalid_range(range: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRange {
            range: range.into(),
            message: message.into(),
        }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for `Result<T, SyncError>`.
pub type Result<T> = std::result::Result<T, SyncError>;
