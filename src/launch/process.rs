//! Launch process model.

use std::fmt;

/// Process types emitted by this buildpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    /// The application's web process.
    Web,
    /// The start command without the live-reload wrapper.
    NoReload,
}

impl ProcessKind {
    /// The process type as written to launch metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessKind::Web => "web",
            ProcessKind::NoReload => "no-reload",
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A process the image will be able to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProcess {
    /// Process type.
    pub kind: ProcessKind,
    /// Executable to run.
    pub command: String,
    /// Arguments passed to the executable.
    pub args: Vec<String>,
    /// Whether this is the image's default process.
    pub default: bool,
    /// Whether the command is executed without an implicit shell.
    pub direct: bool,
}

impl LaunchProcess {
    /// The full argv as a single line, arguments separated by spaces.
    ///
    /// Arguments are not quoted; this mirrors how the process is reported in
    /// build output.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
