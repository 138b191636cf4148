//! Common test utilities for integration tests.
//!
//! [`Workspace`] lays out a throwaway monorepo in a temporary directory.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Root `package.json` of the reference monorepo.
pub(crate) const ROOT_MANIFEST: &str = r#"{
  "name": "monorepo",
  "private": true,
  "devDependencies": {
    "lodash": "^4.1.665"
  }
}
"#;

pub(crate) const FOO_MANIFEST: &str = r#"{
  "name": "foo",
  "version": "1.0.0",
  "dependencies": {
    "react": "0.14.x || ^15.5.0",
    "lodash": "^4.1.234"
  }
}
"#;

pub(crate) const BAR_MANIFEST: &str = r#"{
  "name": "bar",
  "version": "1.0.0",
  "dependencies": {
    "react": "~0.14.3 || ^15.0.0",
    "lodash": "^4.2.33"
  }
}
"#;

pub(crate) const BAZ_MANIFEST: &str = r#"{
  "name": "baz",
  "version": "1.0.0",
  "dependencies": {
    "react": "^0.14.3 || ^15.5.0"
  },
  "devDependencies": {
    "lodash": "^4.0.0"
  }
}
"#;

/// A monorepo on disk, removed when dropped.
pub(crate) struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)] // Not every test file uses every helper
impl Workspace {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// The reference layout: a root manifest and packages foo, bar and baz.
    pub(crate) fn reference() -> Self {
        let workspace = Self::new();
        workspace.write("package.json", ROOT_MANIFEST);
        workspace.write("packages/foo/package.json", FOO_MANIFEST);
        workspace.write("packages/bar/package.json", BAR_MANIFEST);
        workspace.write("packages/baz/package.json", BAZ_MANIFEST);
        workspace
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    pub(crate) fn json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative)).unwrap()
    }
}
