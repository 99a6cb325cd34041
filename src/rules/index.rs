//! Package-keyed index of declared rules.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::rule::Rule;
use crate::base::Label;

/// A rule declared somewhere in the workspace, generated or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleRef {
    pub kind: String,
    pub label: Label,
}

impl RuleRef {
    pub fn new(kind: impl Into<String>, label: Label) -> Self {
        Self {
            kind: kind.into(),
            label,
        }
    }
}

impl From<&Rule> for RuleRef {
    fn from(rule: &Rule) -> Self {
        Self::new(rule.kind().name(), rule.label())
    }
}

/// Read access to the rules declared per package.
///
/// Resolution only ever reads through this trait, so hosts can answer from
/// their own index instead of a [`PackageIndex`].
pub trait RuleIndex {
    /// Rules declared in the workspace-relative `package` (`""` for the root).
    fn find_rules_declaring(&self, package: &str) -> Vec<RuleRef>;

    /// Whether any rule is declared in `package`.
    fn has_rules(&self, package: &str) -> bool {
        !self.find_rules_declaring(package).is_empty()
    }
}

/// In-memory [`RuleIndex`] built at the phase barrier.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: FxHashMap<String, BTreeSet<RuleRef>>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule under its label's package.
    pub fn register(&mut self, rule: RuleRef) {
        self.packages
            .entry(rule.label.package().to_string())
            .or_default()
            .insert(rule);
    }

    /// Record every rule in `rules`.
    pub fn register_rules<'a>(&mut self, rules: impl IntoIterator<Item = &'a Rule>) {
        for rule in rules {
            self.register(RuleRef::from(rule));
        }
    }

    /// Number of packages with at least one rule.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl RuleIndex for PackageIndex {
    fn find_rules_declaring(&self, package: &str) -> Vec<RuleRef> {
        self.packages
            .get(package)
            .map(|rules| rules.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn has_rules(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }
}
