//! Utility module for the yarn-start buildpack.
//!
//! Path resolution and filesystem probes.

mod paths;

pub use paths::{file_exists, normalize_path, resolve_project_path};
