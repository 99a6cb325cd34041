//! Common Jsonnet sources for tests.

pub const DEMO_LIBRARY: &str = r#"
{
  name: 'demo',
  replicas: 1,
}
"#;

pub const BAR_WITH_LIBRARY_AND_DATA: &str = r#"
local demo = import 'demo.libsonnet';
demo {
  db: importstr 'data/db.json',
}
"#;

pub const COMMENTED_IMPORTS: &str = r#"
// local old = import 'old.libsonnet';
# local older = import 'older.libsonnet';
/*
local oldest = import 'oldest.libsonnet';
*/
(import 'a.json') // (import 'b.json')
"#;

pub const ESCAPING_IMPORT: &str = "import '../../../y.jsonnet'";
