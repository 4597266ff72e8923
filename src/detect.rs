//! Detection gate.
//!
//! Decides whether the buildpack participates in a build and, if so, which
//! components it needs at launch.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Config, DetectOptions};
use crate::error::{Result, YarnStartError};
use crate::launch::WATCHEXEC;
use crate::package::{read_project_package_json, NODE_MODULES, YARN_LOCK};
use crate::utils::{file_exists, resolve_project_path};

/// Build plan name of the node runtime.
pub const NODE: &str = "node";

/// Build plan name of the yarn CLI.
pub const YARN: &str = "yarn";

/// Reason reported when package.json has no start script.
pub const NO_START_SCRIPT: &str = "no start script in package.json";

/// Metadata attached to each requirement in the build plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementMetadata {
    /// Needed in the launch image.
    pub launch: bool,
}

/// A component this buildpack needs from the rest of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub metadata: RequirementMetadata,
}

impl Requirement {
    /// A requirement needed at launch.
    pub fn launch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: RequirementMetadata { launch: true },
        }
    }
}

/// Result of the detect phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectOutcome {
    /// The buildpack applies and requires these components.
    Pass(Vec<Requirement>),
    /// The buildpack does not apply.
    Fail { reason: String },
}

impl DetectOutcome {
    /// Check if detection passed.
    pub fn passed(&self) -> bool {
        matches!(self, DetectOutcome::Pass(_))
    }
}

/// Run detection against a working directory.
///
/// # Errors
///
/// Returns an error if the project path cannot be resolved, the lock file
/// cannot be inspected, or package.json cannot be read when a start script
/// is required. A missing lock file or start script is a
/// [`DetectOutcome::Fail`], not an error.
pub fn detect(working_dir: &Path, config: &Config, options: DetectOptions) -> Result<DetectOutcome> {
    let project_dir = resolve_project_path(working_dir, config.project_path.as_deref())?;

    let lock_file = project_dir.join(YARN_LOCK);
    let has_lock_file = file_exists(&lock_file).map_err(|source| YarnStartError::StatLockFile {
        path: lock_file.clone(),
        source,
    })?;

    if !has_lock_file {
        let reason = format!(
            "no \"{}\" found in the project path {}",
            YARN_LOCK,
            project_dir.display()
        );
        info!("{reason}");
        return Ok(DetectOutcome::Fail { reason });
    }

    if options.require_start_script {
        let package = read_project_package_json(&project_dir)?;
        if !package.has_start_command() {
            info!("{NO_START_SCRIPT}");
            return Ok(DetectOutcome::Fail {
                reason: NO_START_SCRIPT.to_string(),
            });
        }
    }

    let mut requirements = vec![
        Requirement::launch(NODE),
        Requirement::launch(YARN),
        Requirement::launch(NODE_MODULES),
    ];

    if config.live_reload {
        requirements.push(Requirement::launch(WATCHEXEC));
    }

    debug!(
        project = %project_dir.display(),
        requirements = requirements.len(),
        "Detection passed"
    );

    Ok(DetectOutcome::Pass(requirements))
}
