//! package.json manifests.
//!
//! A [`PackageManifest`] is the parsed document plus the path it came from.
//! Writing re-reads the file on disk to recover its [`FormatFingerprint`], so
//! a rewrite only differs from the original where values changed.

use crate::error::{NpmError, Result};
use crate::fingerprint::FormatFingerprint;
use semver_sync_core::{DependencyManifest, DependencySection};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A parsed package.json file.
///
/// # Examples
///
/// ```
/// use semver_sync_core::{DependencyManifest, DependencyMap, DependencySection};
/// use semver_sync_npm::PackageManifest;
///
/// let json = r#"{
///   "dependencies": {
///     "express": "^4.18.2"
///   }
/// }"#;
///
/// let manifest = PackageManifest::parse("packages/api/package.json", json).unwrap();
/// let deps = manifest.section(DependencySection::Dependencies).unwrap();
/// assert_eq!(deps.range("express"), Some("^4.18.2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    pub path: PathBuf,
    pub document: Value,
}

impl PackageManifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or its
    /// root is not an object.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| NpmError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parses manifest text that was read from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or its root is not an
    /// object.
    pub fn parse(path: impl AsRef<Path>, content: &str) -> Result<Self> {
        let path = path.as_ref();
        let document: Value =
            serde_json::from_str(content).map_err(|e| NpmError::json_parse(path, e))?;

        if !document.is_object() {
            return Err(NpmError::invalid_structure(
                path,
                "manifest root must be a JSON object",
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Serializes the manifest with the given fingerprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn render(&self, fingerprint: &FormatFingerprint) -> Result<String> {
        fingerprint
            .render(&self.document)
            .map_err(|source| NpmError::JsonWriteError {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes the manifest back to its path, keeping the indentation, line
    /// ending and trailing whitespace of the file currently on disk.
    ///
    /// A missing file is written with the default fingerprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or the new
    /// content cannot be written.
    pub fn write(&self) -> Result<()> {
        let fingerprint = match std::fs::read_to_string(&self.path) {
            Ok(existing) => FormatFingerprint::detect(&existing),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FormatFingerprint::default(),
            Err(e) => return Err(NpmError::io(&self.path, e)),
        };

        let text = self.render(&fingerprint)?;
        std::fs::write(&self.path, text).map_err(|e| NpmError::io(&self.path, e))?;

        tracing::info!(path = %self.path.display(), "wrote manifest");
        Ok(())
    }
}

impl DependencyManifest for PackageManifest {
    type Map = Map<String, Value>;

    fn path(&self) -> &Path {
        &self.path
    }

    fn section(&self, section: DependencySection) -> Option<&Self::Map> {
        self.document.get(section.key()).and_then(Value::as_object)
    }

    fn section_mut(&mut self, section: DependencySection) -> Option<&mut Self::Map> {
        self.document
            .get_mut(section.key())
            .and_then(Value::as_object_mut)
    }
}
