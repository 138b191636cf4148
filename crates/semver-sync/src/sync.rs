//! Orchestration of a reconciliation run.
//!
//! A run reads every selected manifest before writing anything, so a file
//! that fails to parse leaves the whole tree untouched.

use crate::config::SyncOptions;
use crate::discovery::discover;
use semver_sync_core::{
    Collected, Diagnostic, DuplicatesReport, Resolved, Result, apply_common_ranges, collect,
    resolve,
};
use semver_sync_npm::PackageManifest;
use std::path::{Path, PathBuf};

/// Outcome of a [`sync`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Dependencies that were declared with more than one distinct range.
    pub duplicates: DuplicatesReport,
    /// Manifests that were rewritten, in discovery order.
    pub modified: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SyncReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// In-memory result of reconciling a set of manifests.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Updated copies of the manifests whose ranges changed.
    pub modified: Vec<PackageManifest>,
    pub duplicates: DuplicatesReport,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reconciles ranges across `manifests` without touching the filesystem.
///
/// The duplicates report lists every dependency declared with more than one
/// distinct range before the rewrite, whether or not the ranges could be
/// unified.
pub fn reconcile(manifests: &[PackageManifest]) -> Reconciliation {
    let Collected {
        index,
        mut diagnostics,
    } = collect(manifests);
    let Resolved {
        table,
        diagnostics: unresolved,
    } = resolve(&index);
    diagnostics.extend(unresolved);

    let modified = apply_common_ranges(manifests, &table);
    let duplicates = index.duplicates();

    tracing::debug!(
        manifests = manifests.len(),
        dependencies = index.len(),
        resolved = table.len(),
        modified = modified.len(),
        "reconciled ranges"
    );

    Reconciliation {
        modified,
        duplicates,
        diagnostics,
    }
}

/// Reconciles the manifests selected by `options` under `root` and writes
/// back the ones that changed.
///
/// # Errors
///
/// Fails on a bad glob pattern, an unreadable or malformed manifest, or a
/// failed write. Read and parse failures happen before any file is written.
///
/// # Examples
///
/// ```no_run
/// use semver_sync::{SyncOptions, sync};
/// use std::path::Path;
///
/// let report = sync(Path::new("."), &SyncOptions::default()).unwrap();
/// for path in &report.modified {
///     println!("updated {}", path.display());
/// }
/// ```
pub fn sync(root: &Path, options: &SyncOptions) -> Result<SyncReport> {
    let paths = discover(root, options)?;

    let manifests = paths
        .iter()
        .map(PackageManifest::read)
        .collect::<semver_sync_npm::Result<Vec<_>>>()?;

    let Reconciliation {
        modified,
        duplicates,
        diagnostics,
    } = reconcile(&manifests);

    let mut written = Vec::with_capacity(modified.len());
    for manifest in &modified {
        manifest.write()?;
        written.push(manifest.path.clone());
    }

    Ok(SyncReport {
        duplicates,
        modified: written,
        diagnostics,
    })
}
