//! The batch pipeline: CSV in, redacted CSV out.
//!
//! Each input row carries a `record_id` and a JSON-encoded payload in
//! `data_json`. The pipeline decodes the payload, redacts it through
//! [`piimask::redact`], and emits one output row per input row — in input
//! order — with the redacted payload and a per-row PII flag.
//!
//! Failure isolation is per row: a payload that is not a JSON object is
//! treated as empty, and a row the CSV reader cannot decode is skipped with
//! a warning. Only input and output file failures abort the run.

use std::path::Path;

use piimask::Record;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};

/// Default record id for rows that carry none.
const UNKNOWN_RECORD_ID: &str = "UNKNOWN";

/// One input row. Both columns are optional so partially formed rows still
/// process with the documented defaults instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    record_id: Option<String>,
    #[serde(default)]
    data_json: Option<String>,
}

/// One redacted output row.
#[derive(Debug, Serialize)]
struct OutputRow {
    record_id: String,
    redacted_data_json: String,
    is_pii: bool,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Rows written to the output.
    pub rows: usize,
    /// Rows in which at least one detection pass found PII.
    pub pii_rows: usize,
}

/// Redacts `input` into `output`, returning the run counts.
pub fn run(input: &Path, output: &Path) -> Result<RunSummary> {
    let mut reader = csv::Reader::from_path(input).map_err(|source| PipelineError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let mut out_rows = Vec::new();
    let mut pii_rows = 0usize;
    for (index, row) in reader.deserialize::<InputRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(row = index + 1, error = %err, "skipping row the reader cannot decode");
                continue;
            }
        };
        let out = process_row(row, index);
        if out.is_pii {
            pii_rows += 1;
        }
        out_rows.push(out);
    }

    let write_err = |source: csv::Error| PipelineError::Write {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(output).map_err(write_err)?;
    for row in &out_rows {
        writer.serialize(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| write_err(source.into()))?;

    Ok(RunSummary {
        rows: out_rows.len(),
        pii_rows,
    })
}

/// Redacts a single row. Never fails: a payload that does not parse to a
/// JSON object degrades to an empty record, in which nothing is detectable.
fn process_row(row: InputRow, index: usize) -> OutputRow {
    let record_id = row
        .record_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| UNKNOWN_RECORD_ID.to_string());
    let payload = row.data_json.unwrap_or_else(|| "{}".to_string());

    let mut record: Record = match serde_json::from_str(&payload) {
        Ok(record) => record,
        Err(err) => {
            debug!(row = index + 1, error = %err, "payload is not a JSON object, treating as empty");
            Record::new()
        }
    };

    let is_pii = piimask::redact(&mut record);
    let redacted_data_json = serde_json::Value::Object(record).to_string();

    OutputRow {
        record_id,
        redacted_data_json,
        is_pii,
    }
}

#[cfg(test)]
mod tests {
    use super::{process_row, InputRow};

    fn row(record_id: Option<&str>, data_json: Option<&str>) -> InputRow {
        InputRow {
            record_id: record_id.map(String::from),
            data_json: data_json.map(String::from),
        }
    }

    #[test]
    fn row_with_valid_phone_is_flagged() {
        let out = process_row(row(Some("R1"), Some(r#"{"phone": "9876543210"}"#)), 0);
        assert_eq!(out.record_id, "R1");
        assert_eq!(out.redacted_data_json, r#"{"phone":"98XXXXXX10"}"#);
        assert!(out.is_pii);
    }

    #[test]
    fn row_with_invalid_json_degrades_to_empty_record() {
        let out = process_row(row(Some("R2"), Some("{not json")), 1);
        assert_eq!(out.redacted_data_json, "{}");
        assert!(!out.is_pii);
    }

    #[test]
    fn row_with_non_object_json_degrades_to_empty_record() {
        let out = process_row(row(Some("R3"), Some("[1, 2, 3]")), 2);
        assert_eq!(out.redacted_data_json, "{}");
        assert!(!out.is_pii);
    }

    #[test]
    fn missing_columns_take_documented_defaults() {
        let out = process_row(row(None, None), 3);
        assert_eq!(out.record_id, "UNKNOWN");
        assert_eq!(out.redacted_data_json, "{}");
        assert!(!out.is_pii);
    }

    #[test]
    fn empty_record_id_becomes_unknown() {
        let out = process_row(row(Some(""), Some("{}")), 4);
        assert_eq!(out.record_id, "UNKNOWN");
    }

    #[test]
    fn unrecognized_payload_fields_pass_through() {
        let out = process_row(
            row(Some("R5"), Some(r#"{"order": "A-1", "qty": 2}"#)),
            5,
        );
        assert_eq!(out.redacted_data_json, r#"{"order":"A-1","qty":2}"#);
        assert!(!out.is_pii);
    }
}
