//! Workspace enumeration.

use std::collections::BTreeMap;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::base::constants::PRUNED_DIR_PREFIXES;
use crate::base::{Error, FileError, Result};
use crate::config::Config;

/// The regular files of one workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// Workspace-relative path, `""` for the root.
    pub rel: String,
    /// File names, sorted.
    pub files: Vec<String>,
}

/// Directories found under the workspace root, plus the entries below it
/// that could not be read.
#[derive(Debug, Default)]
pub struct WorkspaceListing {
    pub directories: Vec<Directory>,
    /// Unreadable entries, by workspace-relative path. Their contents are
    /// skipped; every other directory is still listed.
    pub errors: Vec<FileError>,
}

/// List every non-ignored directory under `root` that contains files, in
/// path order.
///
/// Hidden directories and `bazel-*` output trees are never entered. Symlinks
/// to files count as files; symlinked directories are not followed.
///
/// # Errors
///
/// [`Error::Walk`] only when `root` itself cannot be enumerated.
pub fn walk_workspace(root: &Path, config: &Config) -> Result<WorkspaceListing> {
    let mut directories: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut errors = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned(e, root, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 || err.path() == Some(root) => {
                return Err(Error::Walk(err));
            }
            Err(err) => {
                let path = err
                    .path()
                    .and_then(|p| relative(root, p))
                    .unwrap_or_default();
                let error = Error::unreadable(root.join(&path), std::io::Error::from(err));
                tracing::warn!("{path}: {error}; skipped");
                errors.push(FileError::new(path, error));
                continue;
            }
        };
        if !is_file(&entry) {
            continue;
        }
        let Some(parent) = entry.path().parent() else {
            continue;
        };
        let Some(rel) = relative(root, parent) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        directories.entry(rel).or_default().push(name);
    }

    let directories = directories
        .into_iter()
        .map(|(rel, mut files)| {
            files.sort();
            Directory { rel, files }
        })
        .collect();
    Ok(WorkspaceListing {
        directories,
        errors,
    })
}

fn is_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}

fn is_pruned(entry: &DirEntry, root: &Path, config: &Config) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if PRUNED_DIR_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return true;
    }
    relative(root, entry.path()).is_some_and(|rel| config.is_ignored_dir(&rel))
}

/// `/`-separated path of `path` below `root`.
fn relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
    )
}
