//! Live reload decoration.

use std::path::Path;

use super::command::StartCommand;
use super::process::{LaunchProcess, ProcessKind};
use crate::package::{NODE_MODULES, PACKAGE_JSON, YARN_LOCK};

/// File watcher that restarts the app on change.
pub const WATCHEXEC: &str = "watchexec";

/// The processes produced by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Just the web process.
    Single(LaunchProcess),
    /// A reloading default web process plus the plain command.
    ReloadPair {
        reloadable: LaunchProcess,
        no_reload: LaunchProcess,
    },
}

impl LaunchPlan {
    /// The processes in the order they are reported to the lifecycle.
    pub fn processes(&self) -> Vec<&LaunchProcess> {
        match self {
            LaunchPlan::Single(web) => vec![web],
            LaunchPlan::ReloadPair {
                reloadable,
                no_reload,
            } => vec![reloadable, no_reload],
        }
    }

    /// Consume the plan into its processes.
    pub fn into_processes(self) -> Vec<LaunchProcess> {
        match self {
            LaunchPlan::Single(web) => vec![web],
            LaunchPlan::ReloadPair {
                reloadable,
                no_reload,
            } => vec![reloadable, no_reload],
        }
    }

    /// The process marked as default.
    pub fn default_process(&self) -> &LaunchProcess {
        match self {
            LaunchPlan::Single(web) => web,
            LaunchPlan::ReloadPair { reloadable, .. } => reloadable,
        }
    }
}

/// Build the launch plan, wrapping the command for live reload if enabled.
pub fn decorate(command: &StartCommand, project_dir: &Path, live_reload: bool) -> LaunchPlan {
    if !live_reload {
        return LaunchPlan::Single(command.to_process(ProcessKind::Web, true));
    }

    LaunchPlan::ReloadPair {
        reloadable: reloadable(command, project_dir),
        no_reload: command.to_process(ProcessKind::NoReload, false),
    }
}

/// Wrap a command in watchexec, watching the project directory.
///
/// Dependency manifests and installed modules are ignored so that
/// installs do not trigger restarts.
pub fn reloadable(command: &StartCommand, project_dir: &Path) -> LaunchProcess {
    let path = |p: &Path| p.display().to_string();

    let mut args = vec![
        "--restart".to_string(),
        "--shell".to_string(),
        "none".to_string(),
        "--watch".to_string(),
        path(project_dir),
    ];
    for ignored in [PACKAGE_JSON, YARN_LOCK, NODE_MODULES] {
        args.push("--ignore".to_string());
        args.push(path(&project_dir.join(ignored)));
    }
    args.push("--".to_string());
    args.push(command.program().to_string());
    args.extend(command.args());

    LaunchProcess {
        kind: ProcessKind::Web,
        command: WATCHEXEC.to_string(),
        args,
        default: true,
        direct: true,
    }
}
