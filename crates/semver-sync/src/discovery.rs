//! Manifest discovery.

use crate::config::SyncOptions;
use semver_sync_core::{Result, SyncError};
use semver_sync_npm::MANIFEST_FILE_NAME;
use std::path::{Path, PathBuf};

/// Lists the manifests a run operates on.
///
/// The root `package.json` comes first when `options.include_root` is set
/// and the file exists. Glob matches of `options.pattern` under `root`
/// follow in sorted order; a match that repeats the root manifest is
/// dropped.
///
/// # Errors
///
/// Returns [`SyncError::InvalidPattern`] for a malformed glob and
/// [`SyncError::ManifestIo`] when a matched path cannot be inspected.
pub fn discover(root: &Path, options: &SyncOptions) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    let root_manifest = root.join(MANIFEST_FILE_NAME);
    if options.include_root && root_manifest.is_file() {
        manifests.push(root_manifest.clone());
    }

    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/{}", escaped_root.trim_end_matches('/'), options.pattern);

    let paths = glob::glob(&pattern)
        .map_err(|e| SyncError::invalid_pattern(&options.pattern, e.to_string()))?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| SyncError::ManifestIo {
            file: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() && path != root_manifest {
            matches.push(path);
        }
    }
    matches.sort();
    matches.dedup();

    tracing::debug!(
        root = %root.display(),
        pattern = %options.pattern,
        matched = matches.len(),
        "discovered manifests"
    );

    manifests.extend(matches);
    Ok(manifests)
}
