//! Two-phase workspace generation.
//!
//! ```text
//! walk_workspace → directories
//!     ↓  phase 1 (parallel per directory): records → rules
//! PackageIndex   ← barrier: every rule registered
//!     ↓  phase 2 (parallel per directory): resolve against the frozen index
//! Generation
//! ```
//!
//! Directories never see each other's state during phase 1, and the index is
//! only read during phase 2, so the result does not depend on thread schedule
//! or directory listing order.

use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;

use super::walk::walk_workspace;
use crate::base::{Error, FileError, Label, Result};
use crate::config::Config;
use crate::record::extract_file_record;
use crate::rules::{PackageIndex, Rule, RuleRef, emit_rules, resolve_all};

/// Phase 1 output for a single directory.
#[derive(Debug)]
pub struct DirectoryRules {
    pub package: String,
    /// Emitted rules, sorted by name and not yet resolved.
    pub rules: Vec<Rule>,
    /// Files that produced no rule because their record failed.
    pub errors: Vec<FileError>,
}

/// Result of a whole-workspace run.
#[derive(Debug, Default)]
pub struct Generation {
    /// Resolved rules per package. Packages without rules are absent.
    pub packages: BTreeMap<String, Vec<Rule>>,
    /// Per-file failures and unreadable directories, ordered by path.
    pub errors: Vec<FileError>,
}

impl Generation {
    /// All rules, by package then name.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.packages.values().flatten()
    }

    pub fn rule_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    /// Look up a rule by its label, e.g. `//pkg/foo:bar_library`.
    pub fn rule(&self, label: &str) -> Option<&Rule> {
        let label = Label::parse(label)?;
        self.packages
            .get(label.package())?
            .iter()
            .find(|r| r.name() == label.name())
    }
}

/// Drives extraction, emission and resolution with one fixed [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
    declared: PackageIndex,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            declared: PackageIndex::new(),
        }
    }

    /// Add rules the host already knows about (hand-written build files,
    /// other languages). They count when deciding between a data label and
    /// a file reference.
    pub fn with_declared_rules(mut self, rules: impl IntoIterator<Item = RuleRef>) -> Self {
        for rule in rules {
            self.declared.register(rule);
        }
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate and resolve rules for every directory under `root`.
    ///
    /// # Errors
    ///
    /// Only failures to enumerate the workspace root itself are returned.
    /// Per-file failures and unreadable subdirectories are collected in
    /// [`Generation::errors`].
    pub fn generate(&self, root: impl AsRef<Path>) -> Result<Generation> {
        let root = std::path::absolute(root.as_ref())
            .map_err(|e| Error::unreadable(root.as_ref(), e))?;
        let listing = walk_workspace(&root, &self.config)?;
        tracing::debug!(
            "{}: {} directories",
            root.display(),
            listing.directories.len()
        );

        // Phase 1
        let mut emitted: Vec<DirectoryRules> = listing
            .directories
            .par_iter()
            .map(|dir| self.generate_directory(&root, &dir.rel, &dir.files))
            .collect();

        // Barrier
        let index = self.build_index(&emitted);

        // Phase 2
        emitted
            .par_iter_mut()
            .for_each(|dir| resolve_all(&mut dir.rules, &index));

        let mut generation = Generation {
            errors: listing.errors,
            ..Generation::default()
        };
        for dir in emitted {
            generation.errors.extend(dir.errors);
            if !dir.rules.is_empty() {
                generation.packages.insert(dir.package, dir.rules);
            }
        }
        generation.errors.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            "generated {} rule(s) in {} package(s), {} file error(s)",
            generation.rule_count(),
            generation.packages.len(),
            generation.errors.len()
        );
        Ok(generation)
    }

    /// Phase 1 for one directory: build a record for each file and emit the
    /// directory's rules. Failing files are reported and skipped.
    pub fn generate_directory(&self, root: &Path, rel: &str, names: &[String]) -> DirectoryRules {
        let mut result = DirectoryRules {
            package: rel.to_string(),
            rules: Vec::new(),
            errors: Vec::new(),
        };
        if self.config.is_ignored_dir(rel) {
            tracing::debug!("{rel}: ignored");
            return result;
        }

        let mut names: Vec<&String> = names.iter().collect();
        names.sort();

        let mut records = Vec::new();
        for name in names {
            match extract_file_record(root, rel, name, &self.config) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(error) => {
                    let path = if rel.is_empty() {
                        name.clone()
                    } else {
                        format!("{rel}/{name}")
                    };
                    tracing::warn!("{path}: {error}; no rule generated");
                    result.errors.push(FileError::new(path, error));
                }
            }
        }

        result.rules = emit_rules(&records, &self.config);
        tracing::debug!("{rel}: {} rule(s)", result.rules.len());
        result
    }

    fn build_index(&self, emitted: &[DirectoryRules]) -> PackageIndex {
        let mut index = self.declared.clone();
        for dir in emitted {
            index.register_rules(&dir.rules);
        }
        index
    }
}
