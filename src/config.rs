//! Generation settings.
//!
//! A [`Config`] is built once, before any directory is processed, and passed
//! by reference into every extraction and resolution call. Changing a setting
//! produces a new value; nothing reads configuration from shared state.

use rustc_hash::FxHashSet;

use crate::base::constants::{
    ALLOWED_FILES_DIRECTIVE, DATA_EXTENSIONS, DATA_EXTENSIONS_DIRECTIVE, KNOWN_DIRECTIVES,
    NATIVE_EXTENSIONS, NATIVE_IMPORTS_DIRECTIVE, SKIP_FOLDERS_DIRECTIVE, TO_JSON_DIRECTIVE,
    UNKNOWN_IMPORTS_DIRECTIVE,
};
use crate::base::{Error, Result};

/// What to do with a code import whose extension is neither a source nor a
/// known data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnknownExtensionPolicy {
    /// Fail the importing file's record with `UnknownImportExtension`.
    #[default]
    Reject,
    /// Treat the target as opaque data.
    TreatAsData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    native_extensions: FxHashSet<String>,
    data_extensions: FxHashSet<String>,
    allowed_extensions: FxHashSet<String>,
    ignored_dirs: FxHashSet<String>,
    unknown_extension: UnknownExtensionPolicy,
    emit_to_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            native_extensions: NATIVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            data_extensions: DATA_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            allowed_extensions: FxHashSet::default(),
            ignored_dirs: FxHashSet::default(),
            unknown_extension: UnknownExtensionPolicy::default(),
            emit_to_json: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directive keys the host should route to [`Config::apply_directive`].
    pub fn known_directives() -> &'static [&'static str] {
        KNOWN_DIRECTIVES
    }

    // ============================================================
    // Builders
    // ============================================================

    /// Replace the set of compilable source extensions.
    pub fn with_native_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.native_extensions = extensions.into_iter().map(|e| dotted(e.as_ref())).collect();
        self
    }

    /// Replace the set of recognised plain-data extensions.
    pub fn with_data_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.data_extensions = extensions.into_iter().map(|e| dotted(e.as_ref())).collect();
        self
    }

    /// Enable grouping rules for non-compilable files with these extensions.
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions.into_iter().map(|e| dotted(e.as_ref())).collect();
        self
    }

    /// Add workspace-relative directories to skip, together with everything below them.
    pub fn with_ignored_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored_dirs.extend(
            dirs.into_iter()
                .map(|d| d.as_ref().trim_matches('/').to_string())
                .filter(|d| !d.is_empty()),
        );
        self
    }

    pub fn with_unknown_extension_policy(mut self, policy: UnknownExtensionPolicy) -> Self {
        self.unknown_extension = policy;
        self
    }

    pub fn with_to_json(mut self, emit: bool) -> Self {
        self.emit_to_json = emit;
        self
    }

    /// Apply one host directive (`# gazelle:<key> <value>`), returning the
    /// updated configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDirective`] for unknown keys or unparsable values.
    pub fn apply_directive(&self, key: &str, value: &str) -> Result<Self> {
        let config = self.clone();
        let list = || split_list(value);
        let updated = match key {
            SKIP_FOLDERS_DIRECTIVE => config.with_ignored_dirs(list()),
            NATIVE_IMPORTS_DIRECTIVE => config.with_native_extensions(list()),
            DATA_EXTENSIONS_DIRECTIVE => config.with_data_extensions(list()),
            ALLOWED_FILES_DIRECTIVE => config.with_allowed_extensions(list()),
            UNKNOWN_IMPORTS_DIRECTIVE => match value.trim() {
                "reject" => config.with_unknown_extension_policy(UnknownExtensionPolicy::Reject),
                "data" => config.with_unknown_extension_policy(UnknownExtensionPolicy::TreatAsData),
                _ => return Err(Error::invalid_directive(key, value)),
            },
            TO_JSON_DIRECTIVE => match value.trim() {
                "true" => config.with_to_json(true),
                "false" => config.with_to_json(false),
                _ => return Err(Error::invalid_directive(key, value)),
            },
            _ => return Err(Error::invalid_directive(key, value)),
        };
        Ok(updated)
    }

    // ============================================================
    // Predicates
    // ============================================================

    /// Whether files with this extension are compiled (and get a library rule).
    pub fn is_compilable(&self, extension: &str) -> bool {
        self.native_extensions.contains(extension)
    }

    /// Whether a code import of this extension is plain data rather than code.
    pub fn is_data_format(&self, extension: &str) -> bool {
        self.data_extensions.contains(extension)
    }

    /// Whether non-compilable files with this extension get a grouping rule.
    pub fn is_allowed_non_compilable(&self, extension: &str) -> bool {
        !self.is_compilable(extension) && self.allowed_extensions.contains(extension)
    }

    /// Whether a file with this extension produces any rule at all.
    pub fn is_processed(&self, extension: &str) -> bool {
        self.is_compilable(extension) || self.is_allowed_non_compilable(extension)
    }

    /// Whether `rel` (a workspace-relative directory) is, or lies beneath, an
    /// ignored directory.
    pub fn is_ignored_dir(&self, rel: &str) -> bool {
        let rel = rel.trim_matches('/');
        let mut current = rel;
        loop {
            if !current.is_empty() && self.ignored_dirs.contains(current) {
                return true;
            }
            match current.rfind('/') {
                Some(pos) => current = &current[..pos],
                None => return false,
            }
        }
    }

    pub fn unknown_extension_policy(&self) -> UnknownExtensionPolicy {
        self.unknown_extension
    }

    pub fn emit_to_json(&self) -> bool {
        self.emit_to_json
    }
}

/// Ensure an extension carries its leading dot.
fn dotted(extension: &str) -> String {
    format!(".{}", extension.trim().trim_start_matches('.'))
}

fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
