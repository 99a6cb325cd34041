//! Rule generation and dependency resolution.
//!
//! - [`emit_rules`] - Phase 1: one directory's records become rules
//! - [`PackageIndex`] - The barrier: every rule, keyed by package
//! - [`resolve`] - Phase 2: pending imports become labels

pub mod emit;
pub mod index;
pub mod resolve;
mod rule;

pub use emit::emit_rules;
pub use index::{PackageIndex, RuleIndex, RuleRef};
pub use resolve::{resolve, resolve_all};
pub use rule::{LoadInfo, PendingImports, Rule, RuleBody, RuleKind, loads};
