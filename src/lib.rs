//! yarn-start - Cloud Native Buildpack for Yarn start commands
//!
//! Detects a Yarn-managed Node.js project and configures the image's launch
//! process from the `prestart`, `start` and `poststart` scripts in
//! `package.json`.
//!
//! # Modules
//!
//! - [`buildpack`] - libcnb lifecycle entry point
//! - [`build`] - Build phase pipeline
//! - [`config`] - Environment configuration
//! - [`detect`] - Detection gate
//! - [`error`] - Error types and result helpers
//! - [`launch`] - Start command assembly and live reload
//! - [`logging`] - Build output
//! - [`package`] - package.json decoding
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use yarn_start_buildpack::build::build;
//! use yarn_start_buildpack::config::Config;
//!
//! let config = Config::from_process_env().expect("invalid configuration");
//! let plan = build(Path::new("/workspace"), &config).expect("build failed");
//! for process in plan.processes() {
//!     println!("{}: {}", process.kind, process.command_line());
//! }
//! ```

/// libcnb lifecycle entry point.
pub mod buildpack;

/// Build phase pipeline.
pub mod build;

/// Configuration from the build environment.
pub mod config;

/// Detection gate.
pub mod detect;

/// Error types and result helpers.
pub mod error;

/// Start command assembly and live reload.
pub mod launch;

/// Build output.
pub mod logging;

/// package.json decoding.
pub mod package;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use buildpack::YarnStartBuildpack;
pub use config::Config;
pub use error::{Result, YarnStartError};
pub use launch::{LaunchPlan, LaunchProcess};
