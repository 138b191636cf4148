//! package.json support for semver-sync.
//!
//! This crate reads package.json manifests, exposes their `dependencies` and
//! `devDependencies` maps to the core reconciliation algorithm, and writes
//! them back without disturbing their formatting.

pub mod error;
pub mod fingerprint;
pub mod manifest;

pub use error::{NpmError, Result};
pub use fingerprint::{FormatFingerprint, LineEnding};
pub use manifest::PackageManifest;

/// File name of an npm package manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";
