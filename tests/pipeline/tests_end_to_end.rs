use jsonnet_rules::{Config, RuleKind};

use crate::helpers::fixtures::{BAR_WITH_LIBRARY_AND_DATA, COMMENTED_IMPORTS, DEMO_LIBRARY};
use crate::helpers::{Workspace, deps, srcs};

#[test]
fn test_library_and_unowned_data() {
    let ws = Workspace::new()
        .with_file("pkg/foo/bar.jsonnet", BAR_WITH_LIBRARY_AND_DATA)
        .with_file("pkg/foo/demo.libsonnet", DEMO_LIBRARY)
        .with_file("pkg/foo/data/db.json", "{}");

    let generation = ws.generate(Config::new());
    assert!(generation.errors.is_empty(), "{:?}", generation.errors);

    let bar = generation.rule("//pkg/foo:bar_library").expect("bar rule");
    assert_eq!(bar.kind(), RuleKind::Library);
    assert_eq!(bar.visibility(), "//visibility:public");
    assert_eq!(deps(bar), vec!["//pkg/foo:demo_library"]);
    assert_eq!(srcs(bar), vec!["bar.jsonnet", "//:pkg/foo/data/db.json"]);

    let demo = generation.rule("//pkg/foo:demo_library").expect("demo rule");
    assert!(demo.deps().is_empty());
    assert_eq!(srcs(demo), vec!["demo.libsonnet"]);

    // The data directory holds no processed files, so it declares nothing.
    assert!(!generation.packages.contains_key("pkg/foo/data"));
    assert_eq!(generation.rule_count(), 2);
}

#[test]
fn test_data_in_package_with_rules_uses_label() {
    let ws = Workspace::new()
        .with_file("pkg/foo/bar.jsonnet", BAR_WITH_LIBRARY_AND_DATA)
        .with_file("pkg/foo/demo.libsonnet", DEMO_LIBRARY)
        .with_file("pkg/foo/data/db.json", "{}")
        .with_file("pkg/foo/data/schema.libsonnet", "{}");

    let bar = ws.rule("//pkg/foo:bar_library");
    assert_eq!(srcs(&bar), vec!["bar.jsonnet", "//pkg/foo/data:db.json"]);
}

#[test]
fn test_cross_package_imports() {
    let ws = Workspace::new()
        .with_file("lib/k8s.libsonnet", "{}")
        .with_file("lib/util/strings.libsonnet", "{}")
        .with_file(
            "apps/web/main.jsonnet",
            "local k = import '../../lib/k8s.libsonnet';\n\
             local s = import '../../lib/util/strings.libsonnet';\n\
             local root = import '../../root.jsonnet';\n\
             k + s + root",
        )
        .with_file("root.jsonnet", "{}");

    let main = ws.rule("//apps/web:main_library");
    assert_eq!(
        deps(&main),
        vec![
            "//:root_library",
            "//lib/util:strings_library",
            "//lib:k8s_library",
        ]
    );
}

#[test]
fn test_json_code_import_is_data() {
    let ws = Workspace::new().with_file("cfg/app.jsonnet", "import 'values.json'");

    let app = ws.rule("//cfg:app_library");
    assert!(app.deps().is_empty());
    // cfg declares app_library itself, so the sibling file is a label.
    assert_eq!(srcs(&app), vec!["app.jsonnet", "//cfg:values.json"]);
}

#[test]
fn test_commented_imports_do_not_leak() {
    let ws = Workspace::new().with_file("x/main.jsonnet", COMMENTED_IMPORTS);

    let main = ws.rule("//x:main_library");
    assert!(main.deps().is_empty());
    assert_eq!(srcs(&main), vec!["main.jsonnet", "//x:a.json"]);
}

#[test]
fn test_quote_styles_are_equivalent() {
    let ws = Workspace::new()
        .with_file("s/single.jsonnet", "import 'lib.libsonnet'")
        .with_file("s/double.jsonnet", "import \"lib.libsonnet\"")
        .with_file("s/lib.libsonnet", "{}");

    let generation = ws.generate(Config::new());
    let single = generation.rule("//s:single_library").unwrap();
    let double = generation.rule("//s:double_library").unwrap();
    assert_eq!(single.deps(), double.deps());
}

#[test]
fn test_absolute_import_inside_workspace() {
    let ws = Workspace::new().with_file("lib/a.libsonnet", "{}");
    let absolute = ws.root().join("lib/a.libsonnet");
    ws.write(
        "app/main.jsonnet",
        &format!("import '{}'", absolute.display()),
    );

    let main = ws.rule("//app:main_library");
    assert_eq!(deps(&main), vec!["//lib:a_library"]);
}

#[test]
fn test_rules_sorted_within_package() {
    let ws = Workspace::new()
        .with_file("p/zz.jsonnet", "")
        .with_file("p/aa.libsonnet", "")
        .with_file("p/README.md", "")
        .with_file("p/mm.jsonnet", "");

    let generation = ws.generate(Config::new());
    let names: Vec<_> = generation.packages["p"].iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["aa_library", "mm_library", "zz_library"]);
}
