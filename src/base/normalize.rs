//! Lexical path normalization against the workspace root.
//!
//! Every import target goes through [`normalize_import`] before it becomes a
//! [`FilePath`]. This is the single place that enforces the workspace
//! boundary: parent traversal, sibling traversal and absolute references all
//! end up here, and nothing touches the file system.

use std::path::{Component, Path, PathBuf};

use super::error::{Error, Result};
use super::file_path::FilePath;

/// Resolve an import literal against the importing file's package.
///
/// Returns the canonical, root-relative path of the target.
///
/// # Errors
///
/// - [`Error::OutOfWorkspace`] when the target is an absolute path outside
///   the root, or when `..` segments climb above it
/// - [`Error::DirectoryImport`] when the last segment of the literal is empty,
///   `.` or `..`, since the target can only be a directory
pub fn normalize_import(from: &FilePath, literal: &str) -> Result<String> {
    let canonical = if Path::new(literal).is_absolute() {
        strip_root(from.root(), Path::new(literal))
    } else if from.package().is_empty() {
        clean_relative(literal)
    } else {
        clean_relative(&format!("{}/{}", from.package(), literal))
    };

    // An empty result names the root directory itself, not a file inside it.
    let canonical = match canonical {
        Some(path) if !path.is_empty() => path,
        _ => return Err(Error::out_of_workspace(literal)),
    };
    if names_directory(literal) {
        return Err(Error::directory_import(literal));
    }
    Ok(canonical)
}

fn names_directory(literal: &str) -> bool {
    matches!(literal.rsplit('/').next(), None | Some("" | "." | ".."))
}

/// Collapse `.` and `..` segments of a `/`-separated relative path.
///
/// Returns `None` if a `..` segment would climb above the starting directory.
pub fn clean_relative(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Lexically clean an absolute path and strip `root` from it.
///
/// Returns the remaining `/`-separated path, or `None` if the cleaned path
/// does not lie under `root`.
pub fn strip_root(root: &Path, path: &Path) -> Option<String> {
    let cleaned = clean_absolute(path);
    let rest = cleaned.strip_prefix(clean_absolute(root)).ok()?;
    let segments: Vec<String> = rest
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

fn clean_absolute(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at `/`, like the OS does
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
