//! Build phase.
//!
//! resolve project path -> read package.json -> assemble start command ->
//! optionally decorate for live reload.

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::launch::{assemble_start_command, decorate, LaunchPlan, DEFAULT_SERVER_ENTRY};
use crate::package::read_project_package_json;
use crate::utils::resolve_project_path;

/// Compute the launch processes for a working directory.
///
/// # Errors
///
/// Returns an error if the project path cannot be resolved or package.json
/// cannot be opened or decoded.
pub fn build(working_dir: &Path, config: &Config) -> Result<LaunchPlan> {
    let project_dir = resolve_project_path(working_dir, config.project_path.as_deref())?;
    let package = read_project_package_json(&project_dir)?;

    debug!(
        project = %project_dir.display(),
        start = package.scripts.start(),
        "Read package.json"
    );

    let command = assemble_start_command(
        &package.scripts,
        DEFAULT_SERVER_ENTRY,
        working_dir,
        &project_dir,
    );

    Ok(decorate(&command, &project_dir, config.live_reload))
}
