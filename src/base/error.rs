//! Error types for import extraction and rule generation.

use std::path::PathBuf;

use text_size::TextSize;
use thiserror::Error;

/// Errors that can occur while building a file record or generating rules.
///
/// Every variant except [`Error::Walk`] is local to a single file: the
/// generator records it against that file and carries on with the batch.
#[derive(Debug, Error)]
pub enum Error {
    /// An import (or an absolute path) normalizes outside the workspace root.
    #[error("cannot normalize {target:?}: it is out of the root of the workspace")]
    OutOfWorkspace { target: String },

    /// An import names a directory rather than a file.
    #[error("cannot import {target:?}: it names a directory, not a file")]
    DirectoryImport { target: String },

    /// The source file (or a directory below the root) could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A code import names a file that is neither a source nor a known data format.
    #[error("cannot import {target:?}: unknown import extension {extension:?}")]
    UnknownImportExtension { target: String, extension: String },

    /// The argument of an import expression is not a usable string literal.
    #[error("malformed import literal at offset {offset:?}: {reason}")]
    MalformedImportLiteral { offset: TextSize, reason: LiteralError },

    /// A host directive could not be applied to the configuration.
    #[error("invalid value {value:?} for directive {key:?}")]
    InvalidDirective { key: String, value: String },

    /// The workspace root itself could not be enumerated.
    #[error("failed to walk workspace: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why an import argument could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("expected a string literal after `{0}`")]
    MissingLiteral(&'static str),

    #[error("text blocks are not allowed in import expressions")]
    TextBlock,

    #[error("unterminated string literal")]
    Unterminated,

    #[error("invalid escape sequence")]
    InvalidEscape,
}

impl Error {
    /// Create an out-of-workspace error.
    pub fn out_of_workspace(target: impl Into<String>) -> Self {
        Self::OutOfWorkspace {
            target: target.into(),
        }
    }

    /// Create a directory-import error.
    pub fn directory_import(target: impl Into<String>) -> Self {
        Self::DirectoryImport {
            target: target.into(),
        }
    }

    /// Create an unreadable-file error.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnreadableFile {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-extension error for a code import.
    pub fn unknown_extension(target: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnknownImportExtension {
            target: target.into(),
            extension: extension.into(),
        }
    }

    /// Create a malformed-literal error.
    pub fn malformed(offset: TextSize, reason: LiteralError) -> Self {
        Self::MalformedImportLiteral { offset, reason }
    }

    /// Create an invalid-directive error.
    pub fn invalid_directive(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDirective {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Check whether this is an [`Error::OutOfWorkspace`].
    pub fn is_out_of_workspace(&self) -> bool {
        matches!(self, Self::OutOfWorkspace { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A per-file failure recorded during generation.
#[derive(Debug)]
pub struct FileError {
    /// Workspace-relative path of the file (or unreadable directory) that
    /// produced no rule.
    pub path: String,
    pub error: Error,
}

impl FileError {
    pub fn new(path: impl Into<String>, error: Error) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}
