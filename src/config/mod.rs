//! Configuration module for the yarn-start buildpack.
//!
//! Every environment setting the buildpack honours is read exactly once into
//! a [`Config`] value, which is then passed explicitly to each component:
//! - `BP_NODE_PROJECT_PATH` - project subdirectory relative to the app dir
//! - `BP_LIVE_RELOAD_ENABLED` - wrap the start command with watchexec
//! - `BP_LOG_LEVEL` - build output verbosity

pub mod env;
mod types;

pub use env::{parse_bool, parse_log_level, LIVE_RELOAD_ENABLED, LOG_LEVEL, NODE_PROJECT_PATH};
pub use types::{Config, DetectOptions};
