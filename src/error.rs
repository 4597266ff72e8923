//! Custom error types for the yarn-start buildpack.
//!
//! Uses thiserror for ergonomic error definitions. Negative detection
//! outcomes (no lock file, no start script) are not errors; see
//! [`crate::detect::DetectOutcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the buildpack.
#[derive(Error, Debug)]
pub enum YarnStartError {
    /// The configured project subdirectory does not exist.
    #[error("expected value derived from BP_NODE_PROJECT_PATH [{value}] to be an existing directory")]
    ProjectPathNotFound {
        value: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The lock file could not be inspected.
    #[error("failed to stat yarn.lock: {source}")]
    StatLockFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// package.json could not be opened.
    #[error("Unable to open package.json: open {}: {source}", .path.display())]
    OpenPackageJson {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// package.json is not valid JSON or has the wrong shape.
    #[error("Unable to decode package.json: {source}")]
    DecodePackageJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A boolean environment setting has an unparseable value.
    #[error("failed to parse {name} value {value}: invalid syntax")]
    InvalidBool { name: &'static str, value: String },

    /// Build plan metadata could not be encoded.
    #[error("Unable to encode build plan metadata for {name}: {message}")]
    PlanMetadata { name: String, message: String },
}

impl From<YarnStartError> for libcnb::Error<YarnStartError> {
    fn from(error: YarnStartError) -> Self {
        libcnb::Error::BuildpackError(error)
    }
}

/// Result type alias for buildpack operations.
pub type Result<T> = std::result::Result<T, YarnStartError>;
