//! Integration tests for region extraction.

use pretty_assertions::assert_eq;
use region_blocks::{Error, RegionSpan, extract, extract_region, find_region};
use rstest::rstest;

const DEMO_DART: &str = "void main() {\n// #region greet\nprint(\"hi\");\n// #endregion greet\n}\n";

#[test]
fn test_demo_greet_region() {
    assert_eq!(extract(DEMO_DART, Some("greet")).unwrap(), "print(\"hi\");");
}

#[test]
fn test_whole_file_strips_one_trailing_newline() {
    assert_eq!(
        extract(DEMO_DART, None).unwrap(),
        "void main() {\n// #region greet\nprint(\"hi\");\n// #endregion greet\n}"
    );
    assert_eq!(extract("a\n\nb\n\n", None).unwrap(), "a\n\nb\n");
}

#[rstest]
#[case::canonical("// #region foo", "// #endregion foo")]
#[case::colon("// #region: foo", "// #endregion")]
#[case::plain("// region: foo", "// endregion")]
#[case::hash_comment("# #region foo", "# #endregion foo")]
#[case::python_style("# region: foo", "# endregion")]
#[case::sql_comment("-- #region foo", "-- #endregion")]
#[case::lisp_comment(";; #region foo", ";; #endregion")]
#[case::block_comment("/* #region foo */", "/* #endregion foo */")]
#[case::html_comment("<!-- #region foo -->", "<!-- #endregion -->")]
#[case::indented("    //   #region   foo   ", "\t// #endregion foo\t")]
#[case::tight("//#region foo", "//#endregion")]
fn test_marker_syntaxes_are_equivalent(#[case] start: &str, #[case] end: &str) {
    let content = format!("before\n{start}\n  body 1\n\n  body 2\n{end}\nafter\n");
    assert_eq!(extract_region(&content, "foo").unwrap(), "  body 1\n\n  body 2");
}

#[test]
fn test_only_first_occurrence_is_returned() {
    let content = "// #region r\nfirst\n// #endregion r\n// #region r\nsecond\n// #endregion r";
    assert_eq!(extract_region(content, "r").unwrap(), "first");
}

#[test]
fn test_bare_end_closes_outer_region_early() {
    let content = "\
// #region outer
a
// #region inner
b
// #endregion
c
// #endregion outer";
    assert_eq!(extract_region(content, "outer").unwrap(), "a\n// #region inner\nb");
}

#[test]
fn test_named_end_of_other_region_is_content() {
    let content = "\
// #region outer
a
// #region inner
b
// #endregion inner
c
// #endregion outer";
    assert_eq!(
        extract_region(content, "outer").unwrap(),
        "a\n// #region inner\nb\n// #endregion inner\nc"
    );
    assert_eq!(extract_region(content, "inner").unwrap(), "b");
}

#[test]
fn test_uncommented_markers_are_content() {
    let content = "// #region r\nendregion\nregion: r\nx\n// endregion\ny";
    assert_eq!(extract_region(content, "r").unwrap(), "endregion\nregion: r\nx");
    assert!(matches!(
        find_region("region: r\nx\n", "r"),
        Err(Error::RegionNotFound { .. })
    ));
}

#[test]
fn test_end_marker_before_start_is_ignored() {
    let content = "// #endregion\n// #region r\nx\n// #endregion";
    assert_eq!(extract_region(content, "r").unwrap(), "x");
}

#[test]
fn test_missing_region_is_error_not_content() {
    let err = extract(DEMO_DART, Some("farewell")).unwrap_err();
    assert!(matches!(err, Error::RegionNotFound { ref region } if region == "farewell"));
}

#[test]
fn test_end_marker_never_opens() {
    let err = find_region("// #endregion greet\ncode", "greet").unwrap_err();
    assert!(matches!(err, Error::RegionNotFound { .. }));
}

#[test]
fn test_unclosed_region_runs_to_end_of_file() {
    let content = "head\n// region: tail\none\ntwo";
    assert_eq!(extract_region(content, "tail").unwrap(), "one\ntwo");
}

#[test]
fn test_empty_region_is_empty_string() {
    let content = "// #region nothing\n// #endregion nothing\n";
    assert_eq!(extract(content, Some("nothing")).unwrap(), "");
}

#[test]
fn test_crlf_markers_match_and_content_is_verbatim() {
    let content = "// #region r\r\nline\r\n// #endregion r\r\n";
    assert_eq!(
        find_region(content, "r").unwrap(),
        RegionSpan { start: 1, end: 2 }
    );
    assert_eq!(extract_region(content, "r").unwrap(), "line\r");
}

#[test]
fn test_regex_metacharacters_in_name() {
    let content = "// #region a+b(c)\nx\n// #endregion a+b(c)";
    assert_eq!(extract_region(content, "a+b(c)").unwrap(), "x");
    assert!(extract_region("// #region aab(c)\nx", "a+b(c)").is_err());
}

#[test]
fn test_extraction_is_idempotent() {
    let first = extract(DEMO_DART, Some("greet")).unwrap();
    let second = extract(DEMO_DART, Some("greet")).unwrap();
    assert_eq!(first, second);
}
