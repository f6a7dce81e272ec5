use super::*;

#[test]
fn file_load_preserves_order_and_length() {
    let mut ingest = RecordIngest::new();
    let count = ingest
        .load_file_bytes(br#"[{"quoteText":"A"},{"quoteText":"B"},{"quoteText":"C"}]"#)
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(ingest.len(), 3);
    assert_eq!(ingest.origin(), RecordOrigin::File);
    assert_eq!(
        ingest.records()[1].0.get("quoteText"),
        Some(&serde_json::json!("B"))
    );
}

#[test]
fn non_array_file_errors_and_leaves_sequence_untouched() {
    let mut ingest = RecordIngest::new();
    ingest.load_file_bytes(br#"[{"a":1}]"#).unwrap();

    let err = ingest.load_file_bytes(br#"{"not":"an array"}"#);
    assert!(matches!(err, Err(GlassError::Ingest(_))));
    assert_eq!(ingest.len(), 1);
}

#[test]
fn unparsable_file_errors_and_leaves_sequence_untouched() {
    let mut ingest = RecordIngest::new();
    ingest.load_file_bytes(br#"[{"a":1},{"a":2}]"#).unwrap();

    assert!(ingest.load_file_bytes(b"{{{{").is_err());
    assert!(ingest.load_file_bytes(&[0xff, 0xfe]).is_err());
    assert_eq!(ingest.len(), 2);
}

#[test]
fn file_load_clears_pasted_text() {
    let mut ingest = RecordIngest::new();
    ingest.set_pasted_text(r#"[{"a":1}]"#);
    assert_eq!(ingest.origin(), RecordOrigin::Pasted);

    ingest.load_file_bytes(br#"[{"b":2},{"b":3}]"#).unwrap();
    assert_eq!(ingest.pasted_text(), "");
    assert_eq!(ingest.origin(), RecordOrigin::File);
    assert_eq!(ingest.len(), 2);
}

#[test]
fn invalid_paste_in_progress_preserves_previous_records() {
    let mut ingest = RecordIngest::new();
    ingest.set_pasted_text(r#"[{"a":1},{"a":2}]"#);
    assert_eq!(ingest.len(), 2);

    // The user is mid-edit; this is expected, not an error.
    ingest.set_pasted_text(r#"[{"a":1},{"a":2},{"a"#);
    assert_eq!(ingest.len(), 2);

    // Valid JSON that is not an array is also "not yet valid".
    ingest.set_pasted_text(r#"{"a":1}"#);
    assert_eq!(ingest.len(), 2);
}

#[test]
fn whitespace_paste_clears_the_sequence() {
    let mut ingest = RecordIngest::new();
    ingest.set_pasted_text(r#"[{"a":1}]"#);
    ingest.set_pasted_text("   \n");

    assert_eq!(ingest.len(), 0);
    assert_eq!(ingest.origin(), RecordOrigin::None);
}

#[test]
fn valid_paste_replaces_file_records() {
    let mut ingest = RecordIngest::new();
    ingest.load_file_bytes(br#"[{"a":1},{"a":2},{"a":3}]"#).unwrap();

    ingest.set_pasted_text(r#"[{"b":9}]"#);
    assert_eq!(ingest.len(), 1);
    assert_eq!(ingest.origin(), RecordOrigin::Pasted);
}

#[test]
fn non_object_entries_become_empty_patches() {
    let mut ingest = RecordIngest::new();
    ingest.load_file_bytes(br#"[{"a":1}, 42, "x"]"#).unwrap();

    assert_eq!(ingest.len(), 3);
    assert!(!ingest.records()[0].is_empty());
    assert!(ingest.records()[1].is_empty());
    assert!(ingest.records()[2].is_empty());
}
