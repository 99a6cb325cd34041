//! Rule emission for one directory.

use super::rule::{PendingImports, Rule};
use crate::base::constants::LIBRARY_EXTENSION;
use crate::config::Config;
use crate::record::{FileKind, FileRecord};

/// Turn the records of one directory into rules, sorted by name.
///
/// Every compilable file gets a library rule carrying its unresolved imports.
/// With to-JSON emission enabled, compilable files that are not `.libsonnet`
/// also get a `jsonnet_to_json` rule. Allow-listed files get a filegroup.
pub fn emit_rules(records: &[FileRecord], config: &Config) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(records.len());

    for record in records {
        let path = record.path();
        match record.kind() {
            FileKind::Compilable => {
                let imports = PendingImports::from_record(record);
                if config.emit_to_json() && path.extension() != LIBRARY_EXTENSION {
                    rules.push(Rule::to_json(path, imports.clone()));
                }
                rules.push(Rule::library(path, imports));
            }
            FileKind::AllowedData => rules.push(Rule::filegroup(path)),
        }
    }

    rules.sort_by(|a, b| a.name().cmp(b.name()));

    for pair in rules.windows(2) {
        if pair[0].name() == pair[1].name() {
            tracing::warn!(
                "//{}: two files produce the rule name {:?}",
                pair[0].package(),
                pair[0].name()
            );
        }
    }

    rules
}
