//! End-to-end tests against the checked-in `test-fixtures/docs-site` project
//!
//! Exercises the complete flow: config loading -> path resolution -> region
//! extraction -> markdown embedding.

use pretty_assertions::assert_eq;
use region_content::Embedder;
use region_fs::{CONFIG_FILE_NAME, EmbedConfig, NormalizedPath};

fn site_root() -> NormalizedPath {
    NormalizedPath::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/docs-site")
        .clean()
}

fn site_embedder() -> Embedder {
    let root = site_root();
    let config = EmbedConfig::load(&root.join(CONFIG_FILE_NAME)).unwrap();
    Embedder::new(config.resolver(&root))
}

#[test]
fn test_config_anchors_root_to_site() {
    let root = site_root();
    let config = EmbedConfig::load(&root.join(CONFIG_FILE_NAME)).unwrap();

    assert_eq!(config.placeholder, "<rootDir>");
    assert_eq!(config.root_dir.as_deref(), Some(root.as_str()));
}

#[test]
fn test_guide_embeds_every_reference() {
    let root = site_root();
    let embedded = site_embedder()
        .embed_file(&root.join("docs/guide.md"))
        .unwrap();

    let expected = format!(
        r#"# Guide

Plain blocks are left alone:

```dart
print("untouched");
```

```dart file=../snippets/demo.dart#greet
  print("hello");
```

```dart title="Setup" file=<rootDir>/lib/x.dart#setup
final client = Client();
client.connect();
```

```yaml file=<rootDir>/shared/config.yaml#defaults
port: 8080
host: localhost
```

```dart file=<rootDir>/lib/x.dart#missing
// Error importing from {}/lib/x.dart: Region "missing" not found
```
"#,
        root
    );
    assert_eq!(embedded.text, expected);
}

#[test]
fn test_guide_report_counts() {
    let root = site_root();
    let report = site_embedder()
        .embed_file(&root.join("docs/guide.md"))
        .unwrap()
        .report;

    assert_eq!(report.blocks_seen, 5);
    assert_eq!(report.embedded, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].line, 19);
    assert_eq!(report.failures[0].message, "Region \"missing\" not found");
}

#[test]
fn test_nested_document_resolves_relative_and_rooted_paths() {
    let root = site_root();
    let embedded = site_embedder()
        .embed_file(&root.join("docs/api/util.md"))
        .unwrap();

    assert!(embedded.report.is_clean());
    assert_eq!(
        embedded.text,
        "# Util\n\n\
         ```dart file=../../shared/util.dart\n\
         String shout(String s) => s.toUpperCase();\n\
         ```\n\n\
         ```dart file=<rootDir>/lib/x.dart#teardown\n\
         client.close();\n\
         ```\n"
    );
}

#[test]
fn test_embedding_is_deterministic() {
    let root = site_root();
    let embedder = site_embedder();
    let document = root.join("docs/guide.md");

    let first = embedder.embed_file(&document).unwrap();
    let second = embedder.embed_file(&document).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_report_serializes_for_tooling() {
    let root = site_root();
    let report = site_embedder()
        .embed_file(&root.join("docs/guide.md"))
        .unwrap()
        .report;

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["embedded"], 3);
    assert_eq!(json["failures"][0]["path"], root.join("lib/x.dart").as_str());
}
