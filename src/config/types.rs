//! Configuration type definitions.

use tracing::Level;

/// Settings derived from the build environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project subdirectory relative to the working directory, if any.
    pub project_path: Option<String>,
    /// Whether the start command is wrapped for live reload.
    pub live_reload: bool,
    /// Minimum level of build output.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_path: None,
            live_reload: false,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project subdirectory.
    pub fn with_project_path(mut self, path: impl Into<String>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    /// Enable or disable live reload.
    pub fn with_live_reload(mut self, enabled: bool) -> Self {
        self.live_reload = enabled;
        self
    }
}

/// Behaviour switches for the detect phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    /// Only pass detection when package.json declares a `start` script.
    pub require_start_script: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            require_start_script: true,
        }
    }
}
