//! Throw-away workspaces on disk.

use std::path::Path;

use jsonnet_rules::{Config, Generation, Generator, Rule};
use tempfile::TempDir;

/// A temporary workspace root populated file by file.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp workspace"),
        }
    }

    /// Add a file at a `/`-separated path below the root.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.write(rel, content);
        self
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directories");
        }
        std::fs::write(path, content).expect("write workspace file");
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn generate(&self, config: Config) -> Generation {
        Generator::new(config)
            .generate(self.root())
            .expect("workspace walk succeeds")
    }

    /// Generate with the default configuration and return the rule at `label`.
    pub fn rule(&self, label: &str) -> Rule {
        self.generate(Config::new())
            .rule(label)
            .cloned()
            .unwrap_or_else(|| panic!("no rule {label}"))
    }
}

pub fn deps(rule: &Rule) -> Vec<String> {
    rule.deps().iter().map(ToString::to_string).collect()
}

pub fn srcs(rule: &Rule) -> Vec<String> {
    rule.srcs()
}
