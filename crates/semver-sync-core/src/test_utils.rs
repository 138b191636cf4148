//! Test utilities for building in-memory manifests.
