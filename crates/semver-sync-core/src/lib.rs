//! Core range reconciliation for semver-sync.
//!
//! This crate holds the format-agnostic half of semver-sync: it knows about
//! dependency maps and version ranges, not about files.
//!
//! # Architecture
//!
//! semver-sync-core defines:
//! - **Range Classifier**: exact vs fuzzy ranges, major-version keys
//! - **Intersection**: npm range intervals and their shortest rendering
//! - **Collector**: every distinct range per dependency across manifests
//! - **Resolver**: one common range per dependency per major version
//! - **Rewriter**: applying common ranges back onto manifests
//! - **Error Types**: `SyncError` and per-item `Diagnostic`s
//!
//! # Examples
//!
//! ```
//! use semver_sync_core::{DependencyRangeIndex, rebuild_range, resolve};
//!
//! let mut index = DependencyRangeIndex::new();
//! index.upsert("react", "0.14.x || ^15.5.0");
//! index.upsert("react", "~0.14.3 || ^15.0.0");
//!
//! let resolved = resolve(&index);
//! let common = &resolved.table["react"];
//!
//! assert_eq!(rebuild_range("0.14.x || ^15.5.0", common), "^0.14.3 || ^15.5.0");
//! ```

pub mod collector;
pub mod diagnostics;
pub mod error;
pub mod intersect;
pub mod manifest;
pub mod range;
pub mod resolver;
pub mod rewriter;

mod test_utils;

// Re-export commonly used types
pub use collector::{Collected, DependencyRangeIndex, DuplicatesReport, collect};
pub use diagnostics::Diagnostic;
pub use error::{Result, SyncError};
pub use intersect::{Interval, intersect};
pub use manifest::{DependencyManifest, DependencyMap, DependencySection};
pub use range::{is_exact_range, is_valid_range, major_version};
pub use resolver::{CommonRangeTable, MajorRanges, Resolved, resolve, resolve_ranges};
pub use rewriter::{apply_common_range, apply_common_ranges, apply_to_manifest, rebuild_range};
