//! Canonical file identity inside a workspace.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use super::error::{Error, Result};
use super::label::Label;
use super::normalize::{clean_relative, strip_root};

/// The location of a file relative to the workspace root.
///
/// `path` is always `package/filename` (or just `filename` in the root
/// package) and never contains `.` or `..` segments. The root is kept so the
/// file can be read back, but it is not part of the identity: two values that
/// differ only in root compare and hash equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilePath {
    root: PathBuf,
    package: String,
    extension: String,
    filename: String,
    stem: String,
    path: String,
}

impl FilePath {
    /// Build a file path from a workspace-relative directory and a file name.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfWorkspace`] if `dir` and `filename` together climb above
    /// the root.
    pub fn new(root: impl Into<PathBuf>, dir: &str, filename: &str) -> Result<Self> {
        let joined = if dir.is_empty() {
            filename.to_string()
        } else {
            format!("{dir}/{filename}")
        };
        let canonical = clean_relative(&joined)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::out_of_workspace(joined.as_str()))?;
        Ok(Self::from_canonical(root.into(), &canonical))
    }

    /// Build a file path from either an absolute path under `root` or a
    /// root-relative one.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfWorkspace`] if the path does not lie under `root`.
    pub fn from_path(root: impl Into<PathBuf>, path: impl AsRef<Path>) -> Result<Self> {
        let root = root.into();
        let path = path.as_ref();
        let canonical = if path.is_absolute() {
            strip_root(&root, path)
        } else {
            clean_relative(&path.to_string_lossy().replace('\\', "/"))
        };
        match canonical {
            Some(canonical) if !canonical.is_empty() => Ok(Self::from_canonical(root, &canonical)),
            _ => Err(Error::out_of_workspace(path.to_string_lossy())),
        }
    }

    /// Split an already-canonical path. Callers guarantee it is clean.
    pub(crate) fn from_canonical(root: PathBuf, canonical: &str) -> Self {
        let (package, filename) = match canonical.rfind('/') {
            Some(pos) => (&canonical[..pos], &canonical[pos + 1..]),
            None => ("", canonical),
        };
        let (stem, extension) = match filename.rfind('.') {
            Some(pos) => (&filename[..pos], &filename[pos..]),
            None => (filename, ""),
        };
        Self {
            root,
            package: package.to_string(),
            extension: extension.to_string(),
            filename: filename.to_string(),
            stem: stem.to_string(),
            path: canonical.to_string(),
        }
    }

    /// Absolute path of the workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Workspace-relative directory containing the file (`""` for the root).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Suffix of the file name starting at its last `.`, or `""`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// File name without its extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Canonical workspace-relative path; the identity of the file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute location on disk.
    pub fn abs(&self) -> PathBuf {
        self.root.join(&self.path)
    }

    /// Deterministic rule name for this file: the lower-cased stem with every
    /// character outside `[a-z0-9_]` replaced by `_`, then `_` and `suffix`.
    ///
    /// Two files in one directory whose stems sanitize identically collide.
    pub fn rule_name(&self, suffix: &str) -> String {
        let mut name: String = self
            .stem
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' | '_' => c,
                _ => '_',
            })
            .collect();
        name.push('_');
        name.push_str(suffix);
        name
    }

    /// Label of the rule generated for this file in its own package.
    pub fn label(&self, suffix: &str) -> Label {
        Label::new(&self.package, self.rule_name(suffix))
    }

    /// Label naming the file itself as a source of its package.
    pub fn data_label(&self) -> Label {
        Label::new(&self.package, &self.filename)
    }

    /// Root-relative reference to the raw file, for files no rule owns.
    pub fn file_ref(&self) -> Label {
        Label::new("", &self.path)
    }
}

impl PartialEq for FilePath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FilePath {}

impl Hash for FilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for FilePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}
