//! Dependency resolution against the rule index.
//!
//! Runs once every directory has emitted its rules. Resolution is total: a
//! library import always becomes a label, and a data import becomes either a
//! label (its package declares rules) or a root-relative file reference.

use super::index::RuleIndex;
use super::rule::{PendingImports, Rule, RuleBody, RuleKind};
use crate::base::{FilePath, Label};

/// Resolve the pending imports of `rule` into its `deps` (and, for
/// libraries, its data sources).
///
/// Previously resolved values are replaced, so resolving twice against the
/// same index gives the same rule.
pub fn resolve<I: RuleIndex + ?Sized>(rule: &mut Rule, index: &I) {
    let package = rule.package().to_string();
    let name = rule.name().to_string();

    match rule.body_mut() {
        RuleBody::Library {
            imports, deps, data, ..
        } => {
            *deps = library_labels(imports);
            *data = sorted(imports.data.values().map(|target| data_label(target, index)));
        }
        RuleBody::ToJson { imports, deps, .. } => {
            *deps = library_labels(imports);
        }
        RuleBody::Filegroup { .. } => return,
    }

    tracing::trace!(
        "//{package}:{name}: {} dep(s) resolved",
        rule.deps().len()
    );
}

/// Resolve every rule in `rules`.
pub fn resolve_all<I: RuleIndex + ?Sized>(rules: &mut [Rule], index: &I) {
    for rule in rules {
        resolve(rule, index);
    }
}

fn library_labels(imports: &PendingImports) -> Vec<Label> {
    sorted(imports.library.values().map(|target| target.label(RuleKind::Library.suffix())))
}

fn data_label<I: RuleIndex + ?Sized>(target: &FilePath, index: &I) -> Label {
    if index.has_rules(target.package()) {
        target.data_label()
    } else {
        target.file_ref()
    }
}

/// Deduplicate and sort by rendered form.
fn sorted(labels: impl Iterator<Item = Label>) -> Vec<Label> {
    let mut labels: Vec<Label> = labels.collect();
    labels.sort_by_cached_key(Label::to_string);
    labels.dedup();
    labels
}
