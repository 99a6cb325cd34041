//! Generated rules.
//!
//! Each rule kind carries its own body. Library and to-JSON rules hold the
//! imports still waiting for resolution as a typed [`PendingImports`]
//! payload; it travels with the rule but is never part of its rendered form.

use std::fmt;

use indexmap::IndexMap;

use crate::base::FilePath;
use crate::base::Label;
use crate::base::constants::{
    FILEGROUP_KIND, FILEGROUP_SUFFIX, JSON_OUTPUT_EXTENSION, LIBRARY_KIND, LIBRARY_SUFFIX,
    PUBLIC_VISIBILITY, RULES_LOAD, TO_JSON_KIND, TO_JSON_SUFFIX,
};
use crate::record::FileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    Library,
    ToJson,
    Filegroup,
}

impl RuleKind {
    /// Rule kind as written in build files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Library => LIBRARY_KIND,
            Self::ToJson => TO_JSON_KIND,
            Self::Filegroup => FILEGROUP_KIND,
        }
    }

    /// Token appended to sanitized file stems to name rules of this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Library => LIBRARY_SUFFIX,
            Self::ToJson => TO_JSON_SUFFIX,
            Self::Filegroup => FILEGROUP_SUFFIX,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A load statement the host must emit before using the generated kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadInfo {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
}

/// Load statements for the rule kinds that are not built in.
pub fn loads() -> &'static [LoadInfo] {
    const LOADS: &[LoadInfo] = &[LoadInfo {
        name: RULES_LOAD,
        symbols: &[LIBRARY_KIND, TO_JSON_KIND],
    }];
    LOADS
}

/// Imports of a rule that still have to become labels. Never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingImports {
    /// Compilable targets, keyed by canonical path.
    pub library: IndexMap<String, FilePath>,
    /// Data targets, keyed by canonical path.
    pub data: IndexMap<String, FilePath>,
}

impl PendingImports {
    pub fn from_record(record: &FileRecord) -> Self {
        Self {
            library: record.library_imports().clone(),
            data: record.data_imports().clone(),
        }
    }
}

/// Kind-specific attributes of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleBody {
    /// `jsonnet_library`: the file itself plus its resolved data files as
    /// sources, resolved library labels as deps.
    Library {
        src: String,
        #[cfg_attr(feature = "serde", serde(skip))]
        imports: PendingImports,
        deps: Vec<Label>,
        data: Vec<Label>,
    },
    /// `jsonnet_to_json`: renders `src` to `out`.
    ToJson {
        src: String,
        out: String,
        #[cfg_attr(feature = "serde", serde(skip))]
        imports: PendingImports,
        deps: Vec<Label>,
    },
    /// `filegroup`: plain grouping of allow-listed files.
    Filegroup { srcs: Vec<String> },
}

/// One generated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    name: String,
    package: String,
    body: RuleBody,
}

impl Rule {
    /// Library rule whose only declared source is `path`.
    pub fn library(path: &FilePath, imports: PendingImports) -> Self {
        Self {
            name: path.rule_name(RuleKind::Library.suffix()),
            package: path.package().to_string(),
            body: RuleBody::Library {
                src: path.filename().to_string(),
                imports,
                deps: Vec::new(),
                data: Vec::new(),
            },
        }
    }

    /// Rule rendering `path` to a JSON file named after its stem.
    pub fn to_json(path: &FilePath, imports: PendingImports) -> Self {
        Self {
            name: path.rule_name(RuleKind::ToJson.suffix()),
            package: path.package().to_string(),
            body: RuleBody::ToJson {
                src: path.filename().to_string(),
                out: format!("{}{}", path.stem(), JSON_OUTPUT_EXTENSION),
                imports,
                deps: Vec::new(),
            },
        }
    }

    pub fn filegroup(path: &FilePath) -> Self {
        Self {
            name: path.rule_name(RuleKind::Filegroup.suffix()),
            package: path.package().to_string(),
            body: RuleBody::Filegroup {
                srcs: vec![path.filename().to_string()],
            },
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self.body {
            RuleBody::Library { .. } => RuleKind::Library,
            RuleBody::ToJson { .. } => RuleKind::ToJson,
            RuleBody::Filegroup { .. } => RuleKind::Filegroup,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Workspace-relative package the rule is declared in.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn label(&self) -> Label {
        Label::new(&self.package, &self.name)
    }

    pub fn visibility(&self) -> &'static str {
        PUBLIC_VISIBILITY
    }

    pub fn body(&self) -> &RuleBody {
        &self.body
    }

    pub(crate) fn body_mut(&mut self) -> &mut RuleBody {
        &mut self.body
    }

    /// The `srcs` attribute. For libraries the rule's own file comes first,
    /// followed by the resolved data files in sorted order.
    pub fn srcs(&self) -> Vec<String> {
        match &self.body {
            RuleBody::Library { src, data, .. } => std::iter::once(src.clone())
                .chain(data.iter().map(Label::to_string))
                .collect(),
            RuleBody::ToJson { src, .. } => vec![src.clone()],
            RuleBody::Filegroup { srcs } => srcs.clone(),
        }
    }

    /// The `outs` attribute; empty except for to-JSON rules.
    pub fn outs(&self) -> Vec<String> {
        match &self.body {
            RuleBody::ToJson { out, .. } => vec![out.clone()],
            _ => Vec::new(),
        }
    }

    /// The resolved `deps` attribute. Empty until the rule is resolved.
    pub fn deps(&self) -> &[Label] {
        match &self.body {
            RuleBody::Library { deps, .. } | RuleBody::ToJson { deps, .. } => deps,
            RuleBody::Filegroup { .. } => &[],
        }
    }

    /// Unresolved imports carried from extraction, if the kind has any.
    pub fn pending_imports(&self) -> Option<&PendingImports> {
        match &self.body {
            RuleBody::Library { imports, .. } | RuleBody::ToJson { imports, .. } => Some(imports),
            RuleBody::Filegroup { .. } => None,
        }
    }
}
