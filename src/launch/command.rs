//! Start command assembly.
//!
//! The start command is built from the `prestart`, `start` and `poststart`
//! scripts, each inserted verbatim and joined with `&&`:
//!
//! ```text
//! [cd <project> && ] [prestart && ] (start | node <app>/server.js) [ && poststart]
//! ```
//!
//! The one case that runs without a shell is the bare default entry point.

use std::path::Path;

use super::process::{LaunchProcess, ProcessKind};
use crate::package::StartScripts;

/// Entry file started when package.json has no `start` script.
pub const DEFAULT_SERVER_ENTRY: &str = "server.js";

/// Shell used for every assembled command line.
const SHELL: &str = "bash";

/// Node executable used for the direct entry point.
const NODE: &str = "node";

/// The assembled start command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartCommand {
    /// Run the entry file with node directly.
    Direct {
        /// Absolute path of the entry file.
        entry: String,
    },
    /// Run a command line with `bash -c`.
    Shell {
        /// The full command line.
        line: String,
    },
}

impl StartCommand {
    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            StartCommand::Direct { .. } => NODE,
            StartCommand::Shell { .. } => SHELL,
        }
    }

    /// Arguments passed to [`Self::program`].
    pub fn args(&self) -> Vec<String> {
        match self {
            StartCommand::Direct { entry } => vec![entry.clone()],
            StartCommand::Shell { line } => vec!["-c".to_string(), line.clone()],
        }
    }

    /// Convert into a launch process of the given type.
    pub fn to_process(&self, kind: ProcessKind, default: bool) -> LaunchProcess {
        LaunchProcess {
            kind,
            command: self.program().to_string(),
            args: self.args(),
            default,
            direct: true,
        }
    }
}

/// Assemble the start command for a project.
///
/// # Arguments
///
/// * `scripts` - The start lifecycle scripts from package.json
/// * `server_entry` - Entry file used when there is no `start` script
/// * `working_dir` - The application directory of the build
/// * `project_dir` - The resolved project directory
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use yarn_start_buildpack::launch::{assemble_start_command, StartCommand, DEFAULT_SERVER_ENTRY};
/// use yarn_start_buildpack::package::StartScripts;
///
/// let app = Path::new("/workspace");
/// let scripts = StartScripts::new("a", "b", "c");
/// let cmd = assemble_start_command(&scripts, DEFAULT_SERVER_ENTRY, app, app);
/// assert_eq!(cmd, StartCommand::Shell { line: "a && b && c".to_string() });
/// ```
pub fn assemble_start_command(
    scripts: &StartScripts,
    server_entry: &str,
    working_dir: &Path,
    project_dir: &Path,
) -> StartCommand {
    let entry = working_dir.join(server_entry).display().to_string();

    let mut shell = scripts.has_start();
    let mut line = if shell {
        scripts.start().to_string()
    } else {
        format!("{NODE} {entry}")
    };

    if !scripts.prestart().is_empty() {
        shell = true;
        line = format!("{} && {}", scripts.prestart(), line);
    }

    if !scripts.poststart().is_empty() {
        shell = true;
        line = format!("{} && {}", line, scripts.poststart());
    }

    // The lifecycle has no per-process working directory here, so cd in.
    if project_dir != working_dir {
        shell = true;
        line = format!("cd {} && {}", project_dir.display(), line);
    }

    if shell {
        StartCommand::Shell { line }
    } else {
        StartCommand::Direct { entry }
    }
}
