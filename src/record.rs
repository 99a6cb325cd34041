//! Per-file import records.
//!
//! A [`FileRecord`] is what phase 1 learns about one source file: which
//! libraries it depends on and which data files it reads, each keyed by
//! canonical path. Records are immutable once built.

use std::path::Path;

use indexmap::IndexMap;

use crate::base::{Error, FilePath, Result, normalize_import};
use crate::config::{Config, UnknownExtensionPolicy};
use crate::parser::{ImportForm, extract_imports};

/// How a processed file takes part in the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A Jsonnet source; gets a library rule and has its imports scanned.
    Compilable,
    /// An allow-listed non-compilable file; gets a grouping rule and is never read.
    AllowedData,
}

/// The import structure of a single file.
///
/// A canonical path appears in at most one of the two import maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: FilePath,
    kind: FileKind,
    library_imports: IndexMap<String, FilePath>,
    data_imports: IndexMap<String, FilePath>,
}

impl FileRecord {
    /// Build the record of a compilable file from its source text.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedImportLiteral`] if an import argument cannot be read
    /// - [`Error::OutOfWorkspace`] if an import escapes the workspace root
    /// - [`Error::DirectoryImport`] if an import names a directory
    /// - [`Error::UnknownImportExtension`] if a code import names a file that
    ///   is neither compilable nor a data format, under the `Reject` policy
    pub fn from_source(path: FilePath, text: &str, config: &Config) -> Result<Self> {
        let mut record = Self::empty(path, FileKind::Compilable);

        for reference in extract_imports(text)? {
            let canonical = normalize_import(&record.path, &reference.literal)?;
            let target = FilePath::from_canonical(record.path.root().to_path_buf(), &canonical);
            record.classify(reference.form, target, config)?;
        }

        tracing::debug!(
            "{}: {} library import(s), {} data import(s)",
            record.path.path(),
            record.library_imports.len(),
            record.data_imports.len()
        );
        Ok(record)
    }

    /// Record for an allow-listed non-compilable file. It has no imports.
    pub fn allowed_data(path: FilePath) -> Self {
        Self::empty(path, FileKind::AllowedData)
    }

    fn empty(path: FilePath, kind: FileKind) -> Self {
        Self {
            path,
            kind,
            library_imports: IndexMap::new(),
            data_imports: IndexMap::new(),
        }
    }

    fn classify(&mut self, form: ImportForm, target: FilePath, config: &Config) -> Result<()> {
        let extension = target.extension();
        let is_library = match form {
            ImportForm::Code if config.is_compilable(extension) => true,
            ImportForm::Code if config.is_data_format(extension) => false,
            ImportForm::Code => match config.unknown_extension_policy() {
                UnknownExtensionPolicy::Reject => {
                    return Err(Error::unknown_extension(target.path(), extension));
                }
                UnknownExtensionPolicy::TreatAsData => false,
            },
            ImportForm::String | ImportForm::Binary => false,
        };

        tracing::trace!(
            "{} -> {} ({})",
            self.path.path(),
            target.path(),
            if is_library { "library" } else { "data" }
        );

        // Last write wins; the key leaves the other map.
        let key = target.path().to_string();
        if is_library {
            self.data_imports.shift_remove(&key);
            self.library_imports.insert(key, target);
        } else {
            self.library_imports.shift_remove(&key);
            self.data_imports.insert(key, target);
        }
        Ok(())
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Compilable imports, keyed by canonical path, in order of first occurrence.
    pub fn library_imports(&self) -> &IndexMap<String, FilePath> {
        &self.library_imports
    }

    /// Data imports, keyed by canonical path, in order of first occurrence.
    pub fn data_imports(&self) -> &IndexMap<String, FilePath> {
        &self.data_imports
    }
}

/// Build the record for file `name` in the workspace-relative directory `rel`.
///
/// Returns `Ok(None)` for files that produce no rule: files in ignored
/// directories (which are never read) and files whose extension is not
/// processed.
///
/// # Errors
///
/// [`Error::UnreadableFile`] if a compilable file cannot be read, plus every
/// error of [`FileRecord::from_source`].
pub fn extract_file_record(
    root: &Path,
    rel: &str,
    name: &str,
    config: &Config,
) -> Result<Option<FileRecord>> {
    if config.is_ignored_dir(rel) {
        tracing::trace!("{rel}/{name}: directory is ignored");
        return Ok(None);
    }

    let path = FilePath::new(root, rel, name)?;
    if config.is_compilable(path.extension()) {
        let abs = path.abs();
        let text = std::fs::read_to_string(&abs).map_err(|e| Error::unreadable(abs, e))?;
        FileRecord::from_source(path, &text, config).map(Some)
    } else if config.is_allowed_non_compilable(path.extension()) {
        Ok(Some(FileRecord::allowed_data(path)))
    } else {
        Ok(None)
    }
}
