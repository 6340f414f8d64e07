//! End-to-end tests for the `piimask` binary.
//!
//! These tests run the compiled CLI against fixture datasets in temporary
//! directories and assert on the written output file and the process exit
//! status.

use std::path::Path;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_piimask");

fn write_fixture(path: &Path, rows: &[(&str, &str)]) {
    let mut writer = csv::Writer::from_path(path).expect("fixture CSV is writable");
    writer
        .write_record(["record_id", "data_json"])
        .expect("header writes");
    for (record_id, data_json) in rows {
        writer
            .write_record([*record_id, *data_json])
            .expect("fixture row writes");
    }
    writer.flush().expect("fixture flushes");
}

fn read_output(path: &Path) -> Vec<(String, String, String)> {
    let mut reader = csv::Reader::from_path(path).expect("output CSV is readable");
    assert_eq!(
        reader.headers().expect("output has headers"),
        &csv::StringRecord::from(vec!["record_id", "redacted_data_json", "is_pii"])
    );
    reader
        .records()
        .map(|record| {
            let record = record.expect("output row parses");
            (record[0].to_string(), record[1].to_string(), record[2].to_string())
        })
        .collect()
}

#[test]
fn test_redacts_dataset_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dataset.csv");
    let output = dir.path().join("redacted.csv");
    write_fixture(
        &input,
        &[
            ("1", r#"{"phone": "9876543210"}"#),
            ("2", r#"{"name": "John Smith", "email": "john@example.com"}"#),
            ("3", r#"{"name": "Alice"}"#),
            ("4", "{not json"),
            ("5", r#"{"order": "A-1001", "qty": 2}"#),
        ],
    );

    let status = Command::new(BIN)
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .expect("binary runs");
    assert!(status.success());

    let rows = read_output(&output);
    assert_eq!(rows.len(), 5);

    // Input order is preserved.
    let ids: Vec<_> = rows.iter().map(|(id, _, _)| id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);

    assert_eq!(rows[0].1, r#"{"phone":"98XXXXXX10"}"#);
    assert_eq!(rows[0].2, "true");

    assert!(rows[1].1.contains(r#""name":"JXXX SXXXX""#));
    assert!(rows[1].1.contains(r#""email":"[REDACTED_EMAIL]""#));
    assert_eq!(rows[1].2, "true");

    // A lone quasi-identifier is preserved and unflagged.
    assert_eq!(rows[2].1, r#"{"name":"Alice"}"#);
    assert_eq!(rows[2].2, "false");

    // Invalid JSON degrades to an empty payload.
    assert_eq!(rows[3].1, "{}");
    assert_eq!(rows[3].2, "false");

    // Unrecognized fields pass through unchanged.
    assert_eq!(rows[4].1, r#"{"order":"A-1001","qty":2}"#);
    assert_eq!(rows[4].2, "false");
}

#[test]
fn test_missing_record_id_defaults_to_unknown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dataset.csv");
    let output = dir.path().join("redacted.csv");

    let mut writer = csv::Writer::from_path(&input).expect("fixture CSV is writable");
    writer.write_record(["data_json"]).expect("header writes");
    writer.write_record([r#"{"phone": "9876543210"}"#]).expect("row writes");
    writer.flush().expect("fixture flushes");

    let status = Command::new(BIN)
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .expect("binary runs");
    assert!(status.success());

    let rows = read_output(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "UNKNOWN");
    assert_eq!(rows[0].2, "true");
}

#[test]
fn test_ragged_row_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dataset.csv");
    let output = dir.path().join("redacted.csv");
    std::fs::write(
        &input,
        "record_id,data_json\n1,\"{\"\"qty\"\": 1}\"\n2,extra,field\n3,\"{\"\"qty\"\": 3}\"\n",
    )
    .expect("fixture writes");

    let status = Command::new(BIN)
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .expect("binary runs");
    assert!(status.success());

    let rows = read_output(&output);
    let ids: Vec<_> = rows.iter().map(|(id, _, _)| id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn test_unreadable_input_exits_nonzero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does_not_exist.csv");

    let output = Command::new(BIN)
        .arg(&missing)
        .current_dir(dir.path())
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to redact"));
}

#[test]
fn test_output_defaults_to_fixed_literal_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dataset.csv");
    write_fixture(&input, &[("1", "{}")]);

    let status = Command::new(BIN)
        .arg(&input)
        .current_dir(dir.path())
        .status()
        .expect("binary runs");
    assert!(status.success());

    let rows = read_output(&dir.path().join("redacted_output.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ("1".to_string(), "{}".to_string(), "false".to_string()));
}

#[test]
fn test_missing_argument_exits_nonzero() {
    let output = Command::new(BIN).output().expect("binary runs");
    assert!(!output.status.success());
}
