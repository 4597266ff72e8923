//! Reading package.json from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::types::PackageDescriptor;
use crate::error::{Result, YarnStartError};

/// File name of the package descriptor.
pub const PACKAGE_JSON: &str = "package.json";

/// Read and decode a package.json file.
///
/// # Arguments
///
/// * `path` - Absolute path to the package.json file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened ([`YarnStartError::OpenPackageJson`])
/// - The content is not well-formed JSON or a script is not a string
///   ([`YarnStartError::DecodePackageJson`])
pub fn read_package_json(path: &Path) -> Result<PackageDescriptor> {
    let file = File::open(path).map_err(|source| YarnStartError::OpenPackageJson {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        YarnStartError::DecodePackageJson {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Read the package.json in a project directory.
pub fn read_project_package_json(project_dir: &Path) -> Result<PackageDescriptor> {
    read_package_json(&project_dir.join(PACKAGE_JSON))
}

/// Decode package.json content that is already in memory.
///
/// # Examples
///
/// ```
/// use yarn_start_buildpack::package::parse_package_json;
///
/// let pkg = parse_package_json(r#"{"scripts": {"start": "node index.js"}}"#).unwrap();
/// assert_eq!(pkg.scripts.start(), "node index.js");
/// assert_eq!(pkg.scripts.prestart(), "");
/// ```
pub fn parse_package_json(content: &str) -> std::result::Result<PackageDescriptor, serde_json::Error> {
    serde_json::from_str(content)
}
