use super::*;

#[test]
fn parse_single_warning_line() {
    let mut diagnostics = DiagnosticMap::new();
    parse_into(
        "test1.c:101: checkpatch: WARNING: struct  should normally be const",
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(diagnostics.len(), 1);
    let records = &diagnostics["test1.c"];
    assert_eq!(
        records[0],
        DiagnosticRecord {
            file: "test1.c".to_string(),
            line: 101,
            message: "checkpatch: WARNING: struct  should normally be const".to_string(),
        }
    );
}

#[test]
fn parse_keeps_colons_in_message() {
    let mut diagnostics = DiagnosticMap::new();
    parse_into("a.c:5: ERROR: foo: bar: baz", &mut diagnostics).unwrap();

    assert_eq!(diagnostics["a.c"][0].message, "ERROR: foo: bar: baz");
}

#[test]
fn parse_empty_file_maps_to_commit_msg_sentinel() {
    let mut diagnostics = DiagnosticMap::new();
    parse_into(":3: WARNING: commit subject too vague", &mut diagnostics).unwrap();

    assert!(diagnostics.contains_key(COMMIT_MSG_FILE));
    assert_eq!(diagnostics[COMMIT_MSG_FILE][0].line, 3);
}

#[test]
fn parse_groups_by_file_preserving_order() {
    let mut diagnostics = DiagnosticMap::new();
    parse_into(
        "b.c:2: WARNING: two\na.c:1: WARNING: one\nb.c:9: WARNING: nine\n",
        &mut diagnostics,
    )
    .unwrap();

    let files: Vec<_> = diagnostics.keys().cloned().collect();
    assert_eq!(files, vec!["b.c".to_string(), "a.c".to_string()]);

    let lines: Vec<u32> = diagnostics["b.c"].iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 9]);
}

#[test]
fn parse_appends_across_invocations() {
    let mut diagnostics = DiagnosticMap::new();
    parse_into("a.c:1: WARNING: first", &mut diagnostics).unwrap();
    parse_into("a.c:2: WARNING: second", &mut diagnostics).unwrap();

    assert_eq!(diagnostics["a.c"].len(), 2);
}

#[test]
fn parse_line_without_two_colons_fails() {
    let mut diagnostics = DiagnosticMap::new();
    let result = parse_into("no delimiters here", &mut diagnostics);

    match result {
        Err(crate::GateError::MalformedDiagnostic { line }) => {
            assert_eq!(line, "no delimiters here");
        }
        other => panic!("Expected malformed diagnostic error, got {other:?}"),
    }
}

#[test]
fn parse_non_numeric_line_number_fails() {
    let mut diagnostics = DiagnosticMap::new();
    let result = parse_into("a.c:xyz: WARNING: nope", &mut diagnostics);

    assert!(matches!(
        result,
        Err(crate::GateError::MalformedDiagnostic { .. })
    ));
}

#[test]
fn parse_empty_output_is_noop() {
    let mut diagnostics = DiagnosticMap::new();
    parse_into("", &mut diagnostics).unwrap();

    assert!(diagnostics.is_empty());
}
