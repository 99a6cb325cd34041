//! # jsonnet-rules-base
//!
//! Import extraction and dependency resolution for generating build rules
//! from Jsonnet sources.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace walk, two-phase generation
//!   ↓
//! rules     → Rule types, emission, package index, resolution
//!   ↓
//! record    → Per-file import records
//!   ↓
//! parser    → Logos lexer, import extraction
//!   ↓
//! config    → Immutable generation settings, host directives
//!   ↓
//! base      → Primitives (FilePath, Label, normalization, errors)
//! ```

// ============================================================================
// MODULES (dependency order: base → config → parser → record → rules → project)
// ============================================================================

/// Foundation types: FilePath, Label, path normalization, errors
pub mod base;

/// Generation settings
pub mod config;

/// Parser: Logos lexer and import extraction
pub mod parser;

/// Per-file import records
pub mod record;

/// Rules: emission, index, resolution
pub mod rules;

/// Project: workspace walk and the two-phase pipeline
pub mod project;

// Re-export foundation types
pub use base::{Error, FileError, FilePath, Label, Result, TextRange, TextSize};

pub use config::{Config, UnknownExtensionPolicy};
pub use parser::{ImportForm, ImportReference, extract_imports};
pub use project::{Generation, Generator};
pub use record::{FileKind, FileRecord, extract_file_record};
pub use rules::{PackageIndex, Rule, RuleIndex, RuleKind, RuleRef, emit_rules, resolve};
