use jsonnet_rules::{Config, Generator, Label, RuleKind, RuleRef};

use crate::helpers::fixtures::ESCAPING_IMPORT;
use crate::helpers::{Workspace, deps, srcs};

#[test]
fn test_ignored_directory_produces_nothing() {
    let ws = Workspace::new()
        .with_file("vendor/lib/a.jsonnet", "{}")
        .with_file("src/main.jsonnet", "import '../vendor/lib/a.jsonnet'");

    let config = Config::new()
        .apply_directive("jsonnet_skip_folders", "vendor")
        .unwrap();
    let generation = ws.generate(config);

    assert!(!generation.packages.contains_key("vendor/lib"));
    // The import still resolves to the label the host is expected to own.
    let main = generation.rule("//src:main_library").unwrap();
    assert_eq!(deps(main), vec!["//vendor/lib:a_library"]);
}

#[test]
fn test_ignored_directory_suppresses_escape_error() {
    let ws = Workspace::new()
        .with_file("third_party/x/y/z.jsonnet", "import '../../../../../../etc.jsonnet'")
        .with_file("a/b/x.jsonnet", ESCAPING_IMPORT);

    let config = Config::new().with_ignored_dirs(["third_party", "a"]);
    let generation = ws.generate(config);
    assert!(generation.errors.is_empty());
    assert_eq!(generation.rule_count(), 0);
}

#[test]
fn test_allow_listed_files_get_filegroups() {
    let ws = Workspace::new()
        .with_file("charts/values.yaml", "a: 1")
        .with_file("charts/render.jsonnet", "importstr 'values.yaml'");

    let config = Config::new().with_allowed_extensions(["yaml"]);
    let generation = ws.generate(config);

    let group = generation.rule("//charts:values_files").unwrap();
    assert_eq!(group.kind(), RuleKind::Filegroup);
    assert_eq!(group.srcs(), vec!["values.yaml"]);
    assert!(group.deps().is_empty());

    let render = generation.rule("//charts:render_library").unwrap();
    assert_eq!(srcs(render), vec!["render.jsonnet", "//charts:values.yaml"]);
}

#[test]
fn test_to_json_rules() {
    let ws = Workspace::new()
        .with_file("site/index.jsonnet", "import '../lib/base.libsonnet' + importstr 'page.html'")
        .with_file("lib/base.libsonnet", "{}");

    let config = Config::new().apply_directive("jsonnet_to_json", "true").unwrap();
    let generation = ws.generate(config);

    let render = generation.rule("//site:index_to_json").unwrap();
    assert_eq!(render.kind(), RuleKind::ToJson);
    assert_eq!(render.srcs(), vec!["index.jsonnet"]);
    assert_eq!(render.outs(), vec!["index.json"]);
    assert_eq!(deps(render), vec!["//lib:base_library"]);

    assert!(generation.rule("//lib:base_to_json").is_none());
    assert!(generation.rule("//lib:base_library").is_some());
}

#[test]
fn test_custom_native_extensions() {
    let ws = Workspace::new()
        .with_file("t/app.jsonnet.TEMPLATE", "import 'lib.libsonnet'")
        .with_file("t/lib.libsonnet", "{}");

    let config = Config::new()
        .apply_directive("jsonnet_native_imports", "jsonnet,libsonnet,TEMPLATE")
        .unwrap();
    let generation = ws.generate(config);
    let app = generation.rule("//t:app_jsonnet_library").unwrap();
    assert_eq!(deps(app), vec!["//t:lib_library"]);
}

#[test]
fn test_host_declared_rules_turn_refs_into_labels() {
    let ws = Workspace::new()
        .with_file("app/main.jsonnet", "importstr '../assets/logo.svg'")
        .with_file("assets/logo.svg", "<svg/>");

    let plain = ws.generate(Config::new());
    let main = plain.rule("//app:main_library").unwrap();
    assert_eq!(srcs(main), vec!["main.jsonnet", "//:assets/logo.svg"]);

    let generation = Generator::new(Config::new())
        .with_declared_rules([RuleRef::new("filegroup", Label::new("assets", "assets"))])
        .generate(ws.root())
        .unwrap();
    let main = generation.rule("//app:main_library").unwrap();
    assert_eq!(srcs(main), vec!["main.jsonnet", "//assets:logo.svg"]);
}
