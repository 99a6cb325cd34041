//! Domain constants: extensions, rule kinds, directive keys.

/// Extensions compiled as Jsonnet sources unless configured otherwise.
pub const NATIVE_EXTENSIONS: &[&str] = &[".jsonnet", ".libsonnet"];

/// Plain-data formats a code import may reference without being compiled.
pub const DATA_EXTENSIONS: &[&str] = &[".json"];

/// Extension of library-only sources (never rendered to JSON on their own).
pub const LIBRARY_EXTENSION: &str = ".libsonnet";

/// Extension of the output produced by a `jsonnet_to_json` rule.
pub const JSON_OUTPUT_EXTENSION: &str = ".json";

// ============================================================================
// RULE KINDS
// ============================================================================

pub const LIBRARY_KIND: &str = "jsonnet_library";
pub const LIBRARY_SUFFIX: &str = "library";

pub const TO_JSON_KIND: &str = "jsonnet_to_json";
pub const TO_JSON_SUFFIX: &str = "to_json";

pub const FILEGROUP_KIND: &str = "filegroup";
pub const FILEGROUP_SUFFIX: &str = "files";

pub const PUBLIC_VISIBILITY: &str = "//visibility:public";

/// Load statement the host prepends for the Jsonnet rule kinds.
pub const RULES_LOAD: &str = "@io_bazel_rules_jsonnet//jsonnet:jsonnet.bzl";

// ============================================================================
// DIRECTIVES
// ============================================================================

pub const SKIP_FOLDERS_DIRECTIVE: &str = "jsonnet_skip_folders";
pub const NATIVE_IMPORTS_DIRECTIVE: &str = "jsonnet_native_imports";
pub const DATA_EXTENSIONS_DIRECTIVE: &str = "jsonnet_data_extensions";
pub const ALLOWED_FILES_DIRECTIVE: &str = "jsonnet_allowed_files";
pub const UNKNOWN_IMPORTS_DIRECTIVE: &str = "jsonnet_unknown_imports";
pub const TO_JSON_DIRECTIVE: &str = "jsonnet_to_json";

/// All directive keys understood by [`crate::config::Config::apply_directive`].
pub const KNOWN_DIRECTIVES: &[&str] = &[
    SKIP_FOLDERS_DIRECTIVE,
    NATIVE_IMPORTS_DIRECTIVE,
    DATA_EXTENSIONS_DIRECTIVE,
    ALLOWED_FILES_DIRECTIVE,
    UNKNOWN_IMPORTS_DIRECTIVE,
    TO_JSON_DIRECTIVE,
];

/// Directory names never descended into while walking a workspace.
pub const PRUNED_DIR_PREFIXES: &[&str] = &[".", "bazel-"];
