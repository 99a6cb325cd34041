//! Foundation types for Jsonnet rule generation.
//!
//! This module provides the value types everything else is built on:
//! - [`FilePath`] - Canonical, root-relative file identity
//! - [`Label`] - `//package:name` references
//! - [`normalize_import`] - The workspace-boundary gate for import targets
//! - [`Error`], [`FileError`] - Failure kinds
//! - Domain constants (extensions, rule kinds, directive keys)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod error;
mod file_path;
mod label;
pub mod normalize;

pub use error::{Error, FileError, LiteralError, Result};
pub use file_path::FilePath;
pub use label::Label;
pub use normalize::normalize_import;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
