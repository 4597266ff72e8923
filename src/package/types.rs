//! Type definitions for package.json parsing.

use serde::Deserialize;

/// The start lifecycle scripts of a package.json.
///
/// Only `prestart`, `start` and `poststart` are read; every other script is
/// ignored. Missing or `null` entries are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StartScripts {
    #[serde(default)]
    prestart: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    poststart: Option<String>,
}

impl StartScripts {
    /// Create scripts from explicit values. Empty strings mean "absent".
    pub fn new(
        prestart: impl Into<String>,
        start: impl Into<String>,
        poststart: impl Into<String>,
    ) -> Self {
        Self {
            prestart: non_empty(prestart.into()),
            start: non_empty(start.into()),
            poststart: non_empty(poststart.into()),
        }
    }

    /// The `prestart` script, or `""`.
    pub fn prestart(&self) -> &str {
        self.prestart.as_deref().unwrap_or_default()
    }

    /// The `start` script, or `""`.
    pub fn start(&self) -> &str {
        self.start.as_deref().unwrap_or_default()
    }

    /// The `poststart` script, or `""`.
    pub fn poststart(&self) -> &str {
        self.poststart.as_deref().unwrap_or_default()
    }

    /// Check if a non-empty `start` script is declared.
    pub fn has_start(&self) -> bool {
        !self.start().is_empty()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The parts of package.json the buildpack reads.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageDescriptor {
    /// Start lifecycle scripts.
    #[serde(default)]
    pub scripts: StartScripts,
}

impl PackageDescriptor {
    /// Check if a start script is declared.
    pub fn has_start_command(&self) -> bool {
        self.scripts.has_start()
    }
}
