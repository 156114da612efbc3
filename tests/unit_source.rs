// tests/unit_source.rs
use hottopic_core::source;
use hottopic_core::HotTopicError;
use std::fs;

const SAMPLE: &str = r#"[
  {"id": "v1", "views_count": 120, "likes_count": 10, "dislikes_count": 1, "topic_ids": ["t1", "t2"]},
  {"id": "v2", "views_count": 30, "likes_count": 3, "dislikes_count": 0, "topic_ids": ["t2"]}
]"#;

#[test]
fn test_from_path_reads_records() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("videos.json");
    fs::write(&path, SAMPLE).unwrap();

    let records = source::from_path(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "v1");
    assert_eq!(records[1].views_count, 30);
}

#[test]
fn test_from_reader_matches_from_str() {
    let a = source::from_reader(SAMPLE.as_bytes()).unwrap();
    let b = source::from_str(SAMPLE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_missing_file_reports_path() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("nope.json");
    match source::from_path(&path).unwrap_err() {
        HotTopicError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_wrong_type_is_invalid_record() {
    let json = r#"[{"id": "v1", "views_count": "many", "likes_count": 0, "dislikes_count": 0, "topic_ids": []}]"#;
    let err = source::from_str(json).unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, HotTopicError::InvalidRecord { index: 0, .. }));
}

#[test]
fn test_topic_ids_must_be_strings() {
    let json = r#"[{"id": "v1", "views_count": 1, "likes_count": 0, "dislikes_count": 0, "topic_ids": [1, 2]}]"#;
    assert!(matches!(
        source::from_str(json),
        Err(HotTopicError::InvalidRecord { index: 0, .. })
    ));
}

#[test]
fn test_empty_array_is_valid() {
    assert!(source::from_str("[]").unwrap().is_empty());
}
