//! Integration tests for the yarn-start buildpack.
//!
//! - `fixtures` - Test helpers for creating temporary projects
//! - `detect_tests` - Detection gate against real directory trees
//! - `build_tests` - Launch processes produced by the build phase
//! - `descriptor_tests` - buildpack.toml sanity checks

pub mod detect_tests;
pub mod fixtures;
