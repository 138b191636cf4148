//! Monorepo dependency range reconciliation.
//!
//! `semver-sync` finds every `package.json` in a workspace, computes one
//! common range per dependency and major version, and rewrites manifests
//! whose ranges are looser than that common range. Dependencies that cannot
//! be reconciled are listed in the [`SyncReport`].
//!
//! # Examples
//!
//! ```no_run
//! use semver_sync::{SyncOptions, render_duplicates, sync};
//! use std::path::Path;
//!
//! let options = SyncOptions::default().with_pattern("modules/*/package.json");
//! let report = sync(Path::new("."), &options).unwrap();
//!
//! if let Some(text) = render_duplicates(&report.duplicates) {
//!     println!("{text}");
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod report;
pub mod sync;

pub use config::{DEFAULT_PATTERN, SyncOptions};
pub use discovery::discover;
pub use report::{DUPLICATES_HEADER, render_duplicates};
pub use sync::{Reconciliation, SyncReport, reconcile, sync};
