//! Path utilities.

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Result, YarnStartError};

/// Resolve the project directory for a build.
///
/// When `project_path` is unset or empty the working directory itself is the
/// project. Otherwise the path is joined onto the working directory, a leading
/// `/` included, and must name an existing directory.
///
/// # Errors
///
/// Returns [`YarnStartError::ProjectPathNotFound`] if the joined path does
/// not exist or is not a directory.
pub fn resolve_project_path(working_dir: &Path, project_path: Option<&str>) -> Result<PathBuf> {
    let sub = match project_path {
        Some(sub) if !sub.is_empty() => sub,
        _ => return Ok(working_dir.to_path_buf()),
    };

    let mut joined = working_dir.to_path_buf();
    for component in Path::new(sub).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            other => joined.push(other),
        }
    }

    let resolved = normalize_path(&joined);
    match std::fs::metadata(&resolved) {
        Ok(meta) if meta.is_dir() => {
            debug!(path = %resolved.display(), "Resolved project path");
            Ok(resolved)
        }
        Ok(_) => Err(YarnStartError::ProjectPathNotFound {
            value: sub.to_string(),
            source: None,
        }),
        Err(source) => Err(YarnStartError::ProjectPathNotFound {
            value: sub.to_string(),
            source: Some(source),
        }),
    }
}

/// Lexically clean a path: drop `.` segments and fold `..` into its parent.
///
/// The filesystem is not consulted, so symlinks are left untouched.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Check whether a file exists.
///
/// Only "not found" counts as absence; any other failure (for example a
/// permission error on a parent directory) is returned to the caller.
pub fn file_exists(path: &Path) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
