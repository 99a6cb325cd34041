use jsonnet_rules::{Config, Error, UnknownExtensionPolicy};

use crate::helpers::Workspace;
use crate::helpers::fixtures::ESCAPING_IMPORT;

#[test]
fn test_escaping_import_fails_only_that_file() {
    let ws = Workspace::new()
        .with_file("a/b/x.jsonnet", ESCAPING_IMPORT)
        .with_file("a/b/ok.jsonnet", "{}");

    let generation = ws.generate(Config::new());
    assert_eq!(generation.errors.len(), 1);
    assert_eq!(generation.errors[0].path, "a/b/x.jsonnet");
    assert!(generation.errors[0].error.is_out_of_workspace());

    assert!(generation.rule("//a/b:x_library").is_none());
    assert!(generation.rule("//a/b:ok_library").is_some());
}

#[test]
fn test_out_of_workspace_message() {
    let ws = Workspace::new().with_file("a/b/x.jsonnet", ESCAPING_IMPORT);
    let generation = ws.generate(Config::new());
    assert_eq!(
        generation.errors[0].to_string(),
        "a/b/x.jsonnet: cannot normalize \"../../../y.jsonnet\": it is out of the root of the workspace"
    );
}

#[test]
fn test_unknown_extension_fails_record() {
    let ws = Workspace::new()
        .with_file("k/app.jsonnet", "import 'values.yaml'")
        .with_file("k/other.jsonnet", "{}");

    let generation = ws.generate(Config::new());
    assert!(matches!(
        generation.errors[0].error,
        Error::UnknownImportExtension { .. }
    ));
    assert!(generation.rule("//k:app_library").is_none());
    assert!(generation.rule("//k:other_library").is_some());

    let lenient = Config::new().with_unknown_extension_policy(UnknownExtensionPolicy::TreatAsData);
    let generation = ws.generate(lenient);
    assert!(generation.errors.is_empty());
    let app = generation.rule("//k:app_library").unwrap();
    assert_eq!(app.srcs(), vec!["app.jsonnet", "//k:values.yaml"]);
}

#[test]
fn test_malformed_literal_fails_record() {
    let ws = Workspace::new()
        .with_file("m/bad.jsonnet", "import std.thisFile")
        .with_file("m/good.jsonnet", "{}");

    let generation = ws.generate(Config::new());
    assert_eq!(generation.errors.len(), 1);
    assert!(matches!(
        generation.errors[0].error,
        Error::MalformedImportLiteral { .. }
    ));
    assert_eq!(generation.packages["m"].len(), 1);
}

#[test]
fn test_unreadable_file_is_skipped() {
    let ws = Workspace::new()
        .with_file("u/good.jsonnet", "{}")
        .with_file("v/other.jsonnet", "{}");
    // Not valid UTF-8, so it cannot be read as source text.
    std::fs::write(ws.root().join("u/binary.jsonnet"), [0xff, 0xfe, 0x00]).unwrap();

    let generation = ws.generate(Config::new());
    assert_eq!(generation.errors.len(), 1);
    assert_eq!(generation.errors[0].path, "u/binary.jsonnet");
    assert!(matches!(
        generation.errors[0].error,
        Error::UnreadableFile { .. }
    ));
    assert!(generation.rule("//u:good_library").is_some());
    assert!(generation.rule("//v:other_library").is_some());
}

#[test]
fn test_missing_workspace_root() {
    let ws = Workspace::new();
    let result = jsonnet_rules::Generator::new(Config::new()).generate(ws.root().join("missing"));
    assert!(matches!(result, Err(Error::Walk(_))));
}

#[test]
fn test_directory_import_fails_record() {
    let ws = Workspace::new()
        .with_file("app/main.jsonnet", "importstr '../assets/'")
        .with_file("app/other.jsonnet", "{}")
        .with_file("assets/logo.txt", "");

    let generation = ws.generate(Config::new());
    assert_eq!(generation.errors.len(), 1);
    assert_eq!(generation.errors[0].path, "app/main.jsonnet");
    assert!(matches!(
        generation.errors[0].error,
        Error::DirectoryImport { .. }
    ));
    assert!(generation.rule("//app:main_library").is_none());
    assert!(generation.rule("//app:other_library").is_some());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_does_not_abort_run() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new()
        .with_file("ok/a.jsonnet", "{}")
        .with_file("locked/b.jsonnet", "{}");
    let locked = ws.root().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    let result = jsonnet_rules::Generator::new(Config::new()).generate(ws.root());
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    let generation = result.expect("an unreadable subdirectory is not a walk failure");
    assert!(generation.rule("//ok:a_library").is_some());
    // Privileged users can still read the directory; otherwise it is reported.
    if generation.rule("//locked:b_library").is_none() {
        assert_eq!(generation.errors.len(), 1);
        assert_eq!(generation.errors[0].path, "locked");
        assert!(matches!(
            generation.errors[0].error,
            Error::UnreadableFile { .. }
        ));
    }
}

#[cfg(unix)]
#[test]
fn test_symlinked_source_gets_rules() {
    let ws = Workspace::new().with_file("shared/common.libsonnet", "{}");
    ws.write("app/main.jsonnet", "import 'common.libsonnet'");
    std::os::unix::fs::symlink(
        ws.root().join("shared/common.libsonnet"),
        ws.root().join("app/common.libsonnet"),
    )
    .unwrap();

    let generation = ws.generate(Config::new());
    assert!(generation.errors.is_empty());
    let common = generation.rule("//app:common_library").unwrap();
    assert_eq!(common.srcs(), vec!["common.libsonnet"]);
    let main = generation.rule("//app:main_library").unwrap();
    assert_eq!(
        main.deps().iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["//app:common_library"]
    );
}
