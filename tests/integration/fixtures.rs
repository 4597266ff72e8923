//! Test fixtures for creating temporary project directories.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use yarn_start_buildpack::config::Config;
use yarn_start_buildpack::Result;

/// A temporary working directory holding a Yarn project.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Empty working directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Working directory path.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a subdirectory and return its path.
    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create subdirectory");
        path
    }

    /// Write package.json with the given scripts into `dir`.
    pub fn write_package_json(&self, dir: &str, scripts: &[(&str, &str)]) {
        let scripts: serde_json::Map<String, serde_json::Value> = scripts
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        let json = serde_json::json!({ "name": "test-project", "scripts": scripts });
        self.write(dir, "package.json", &json.to_string());
    }

    /// Write an empty yarn.lock into `dir`.
    pub fn write_yarn_lock(&self, dir: &str) {
        self.write(dir, "yarn.lock", "# yarn lockfile v1\n");
    }

    /// Write an arbitrary file into `dir`.
    pub fn write(&self, dir: &str, name: &str, content: &str) {
        let target = self.subdir(dir).join(name);
        fs::write(target, content).expect("Failed to write file");
    }
}

/// The three start scripts used across tests.
pub fn start_scripts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("prestart", "some-prestart-command"),
        ("start", "some-start-command"),
        ("poststart", "some-poststart-command"),
    ]
}

/// Build a config from environment pairs.
pub fn config(pairs: &[(&str, &str)]) -> Result<Config> {
    let env: HashMap<&str, &str> = pairs.iter().copied().collect();
    Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
}
