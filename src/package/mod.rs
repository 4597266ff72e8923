//! Package module for the yarn-start buildpack.
//!
//! Handles package.json decoding and the start lifecycle scripts.

mod reader;
mod types;

pub use reader::{parse_package_json, read_package_json, read_project_package_json, PACKAGE_JSON};
pub use types::{PackageDescriptor, StartScripts};

/// File name of the Yarn lock file.
pub const YARN_LOCK: &str = "yarn.lock";

/// Directory Yarn installs dependencies into.
pub const NODE_MODULES: &str = "node_modules";
