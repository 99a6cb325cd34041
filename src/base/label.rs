//! Build labels of the form `//package:name`.

use std::fmt;

/// A reference to a rule (or a source file) in some package.
///
/// The root package renders as `//:name`, which is also how raw files that no
/// rule owns are referenced (`//:pkg/dir/file.json`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    package: String,
    name: String,
}

impl Label {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Parse an absolute label such as `//pkg/foo:bar_library`.
    ///
    /// Repository-qualified (`@repo//...`) and relative (`:name`) labels are
    /// not accepted. `//pkg/foo` is shorthand for `//pkg/foo:foo`.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix("//")?;
        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name),
            None => (rest, rest.rsplit('/').next().unwrap_or(rest)),
        };
        if name.is_empty() || package.ends_with('/') {
            return None;
        }
        Some(Self::new(package, name))
    }

    /// Workspace-relative package (`""` for the root).
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}:{}", self.package, self.name)
    }
}
