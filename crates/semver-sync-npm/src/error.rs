//! Errors specific to package.json handling.
//!
//! These errors cover reading, parsing and writing package.json files.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors specific to package.json handling.
#[derive(Error, Debug)]
pub enum NpmError {
    /// Failed to parse package.json
    #[error("Failed to parse {}: {source}", path.display())]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize package.json
    #[error("Failed to serialize {}: {source}", path.display())]
    JsonWriteError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid package.json structure
    #[error("Invalid package.json structure in {}: {message}", path.display())]
    InvalidStructure { path: PathBuf, message: String },

    /// I/O error on a manifest file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for npm operations.
pub type Result<T> = std::result::Result<T, NpmError>;

impl NpmError {
    /// Create a parse error for a manifest.
    pub fn json_parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::JsonParseError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid structure error.
    pub fn invalid_structure(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an I/O error for a manifest.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path of the manifest the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::JsonParseError { path, .. }
            | Self::JsonWriteError { path, .. }
            | Self::InvalidStructure { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Convert to semver_sync_core::SyncError for interoperability
impl From<NpmError> for semver_sync_core::SyncError {
    fn from(err: NpmError) -> Self {
        match err {
            NpmError::JsonParseError { path, source } => Self::ParseError {
                file: path,
                source: Box::new(source),
            },
            NpmError::InvalidStructure { path, message } => Self::ParseError {
                file: path,
                source: message.into(),
            },
            NpmError::JsonWriteError { source, .. } => Self::Json(source),
            NpmError::Io { path, source } => Self::ManifestIo { file: path, source },
        }
    }
}
