//! Cross-crate flow tests on temporary projects
//!
//! Covers the interplay of reference parsing, root substitution, region
//! extraction and inline error rendering.

use pretty_assertions::assert_eq;
use region_blocks::{Reference, extract};
use region_content::{EmbedOutcome, Embedder};
use region_fs::PathResolver;
use region_test_utils::DocsFixture;

const DEMO: &str = "void main() {\n// #region setup\nvar x = 1;\n// #endregion setup\n}\n";

fn embedder_for(fixture: &DocsFixture) -> Embedder {
    Embedder::new(PathResolver::new(fixture.root()))
}

#[test]
fn test_whole_file_and_region_agree_with_extract() {
    let fixture = DocsFixture::new().with_file("lib/x.dart", DEMO);
    let embedder = embedder_for(&fixture);
    let document = fixture.path("docs/page.md");

    for meta in ["file=<rootDir>/lib/x.dart", "file=<rootDir>/lib/x.dart#setup"] {
        let reference = Reference::parse(meta).unwrap();
        let expected = extract(DEMO, reference.region()).unwrap();

        match embedder.embed_block(meta, &document) {
            EmbedOutcome::Embedded { path, text } => {
                assert_eq!(path, fixture.path("lib/x.dart"));
                assert_eq!(text, expected);
            }
            other => panic!("unexpected outcome for {meta}: {other:?}"),
        }
    }
}

#[test]
fn test_placeholder_only_substituted_as_prefix() {
    let fixture = DocsFixture::new().with_file("docs/<rootDir>/x.dart", "inner\n");
    let embedder = embedder_for(&fixture);

    let outcome = embedder.embed_block("file=./<rootDir>/x.dart", &fixture.path("docs/page.md"));

    match outcome {
        EmbedOutcome::Embedded { text, .. } => assert_eq!(text, "inner"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_custom_placeholder() {
    let fixture = DocsFixture::new().with_file("src/a.rs", "fn a() {}\n");
    let resolver = PathResolver::new(fixture.root().join("src")).with_placeholder("@src");
    let embedder = Embedder::new(resolver);

    let embedded = embedder.embed_document(
        "```rust file=@src/a.rs\n```\n",
        &fixture.path("docs/page.md"),
    );

    assert_eq!(embedded.text, "```rust file=@src/a.rs\nfn a() {}\n```\n");
}

#[test]
fn test_one_failure_does_not_affect_neighbours() {
    let fixture = DocsFixture::new().with_file("lib/x.dart", DEMO);
    let embedder = embedder_for(&fixture);
    let source = "```dart file=<rootDir>/lib/missing.dart\n```\n\n```dart file=<rootDir>/lib/x.dart#setup\n```\n";

    let embedded = embedder.embed_document(source, &fixture.path("docs/page.md"));

    let missing = fixture.path("lib/missing.dart");
    assert!(
        embedded
            .text
            .starts_with(&format!("```dart file=<rootDir>/lib/missing.dart\n// Error importing from {missing}: "))
    );
    assert!(embedded.text.ends_with("#setup\nvar x = 1;\n```\n"));
    assert_eq!(embedded.report.embedded, 1);
    assert_eq!(embedded.report.failures.len(), 1);
    assert_eq!(embedded.report.failures[0].path, missing.as_str());
}

#[test]
fn test_error_comment_follows_block_language() {
    let fixture = DocsFixture::new();
    let embedder = embedder_for(&fixture);
    let document = fixture.path("docs/page.md");

    let embedded = embedder.embed_document("```python file=nope.py\n```\n", &document);

    let attempted = fixture.path("docs/nope.py");
    assert!(
        embedded
            .text
            .contains(&format!("# Error importing from {attempted}: "))
    );
}
