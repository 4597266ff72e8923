//! Environment parsing.
//!
//! The lookup is abstracted as a closure so the buildpack can read from the
//! lifecycle platform environment while tests supply a plain map.

use tracing::Level;

use super::types::Config;
use crate::error::{Result, YarnStartError};

/// Project subdirectory override.
pub const NODE_PROJECT_PATH: &str = "BP_NODE_PROJECT_PATH";

/// Live reload switch.
pub const LIVE_RELOAD_ENABLED: &str = "BP_LIVE_RELOAD_ENABLED";

/// Build output verbosity.
pub const LOG_LEVEL: &str = "BP_LOG_LEVEL";

impl Config {
    /// Build a configuration from a key/value lookup.
    ///
    /// # Errors
    ///
    /// Returns [`YarnStartError::InvalidBool`] if `BP_LIVE_RELOAD_ENABLED`
    /// is set to something that is not a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use yarn_start_buildpack::config::Config;
    ///
    /// let env = HashMap::from([("BP_LIVE_RELOAD_ENABLED", "true")]);
    /// let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
    /// assert!(config.live_reload);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_path = lookup(NODE_PROJECT_PATH).filter(|p| !p.is_empty());

        let live_reload = match lookup(LIVE_RELOAD_ENABLED) {
            Some(value) => parse_bool(&value).ok_or(YarnStartError::InvalidBool {
                name: LIVE_RELOAD_ENABLED,
                value,
            })?,
            None => false,
        };

        let log_level = lookup(LOG_LEVEL)
            .map(|level| parse_log_level(&level))
            .unwrap_or(Level::INFO);

        Ok(Self {
            project_path,
            live_reload,
            log_level,
        })
    }

    /// Build a configuration from the process environment.
    pub fn from_process_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Parse a boolean the way the rest of the Paketo ecosystem does.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts. Everything else, including the empty string, is rejected.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a log level, falling back to INFO for unknown values.
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
