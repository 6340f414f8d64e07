//! Record-level PII detection: the two passes over one decoded payload.
//!
//! A record is the JSON object carried by one row. [`redact`] runs the
//! standalone pass and the combinatorial pass over it, in that order, always
//! both (neither result short-circuits the other), and ORs their findings
//! into the returned flag.
//!
//! Both passes are single-shot, stateless evaluations of one record. Keys are
//! never touched; only values of matched fields are replaced, so unrecognized
//! fields survive redaction byte for byte.

use serde_json::{Map, Value};

use crate::classification::{QuasiIdentifier, StandaloneField};

/// A decoded row payload: field name to JSON value.
pub type Record = Map<String, Value>;

/// Redacts `record` in place and returns whether any PII was found.
///
/// The standalone pass masks fields that are PII on their own when their
/// coerced value matches the field's format gate exactly. The combinatorial
/// pass masks every present, non-empty quasi-identifier once two or more
/// co-occur. A record with no PII-eligible fields is left untouched and the
/// call returns `false`.
pub fn redact(record: &mut Record) -> bool {
    let standalone = detect_standalone(record);
    let combinatorial = detect_combinatorial(record);
    standalone || combinatorial
}

/// Standalone pass: phone, Aadhaar, passport, UPI id.
///
/// A field absent from the record, or present with a value that fails its
/// gate, is left untouched — even where the masker's own validation is
/// looser than the gate.
fn detect_standalone(record: &mut Record) -> bool {
    let mut found = false;
    for field in StandaloneField::ALL {
        let masked = match record.get(field.key()) {
            Some(value) => {
                let raw = coerce_to_string(value);
                field.matches_format(&raw).then(|| field.mask(&raw))
            }
            None => None,
        };
        if let Some(masked) = masked {
            record.insert(field.key().to_string(), Value::String(masked));
            found = true;
        }
    }
    found
}

/// Combinatorial pass: name, email, address, IP address, device id.
///
/// Masks ALL present quasi-identifiers, not just a minimal identifying
/// pair — once the combination exists, every contributing field is part of
/// the linkage risk.
fn detect_combinatorial(record: &mut Record) -> bool {
    let present: Vec<QuasiIdentifier> = QuasiIdentifier::ALL
        .into_iter()
        .filter(|field| record.get(field.key()).is_some_and(is_truthy))
        .collect();

    if present.len() < 2 {
        return false;
    }

    for field in present {
        let masked = record
            .get(field.key())
            .map(|value| field.mask(&coerce_to_string(value)));
        if let Some(masked) = masked {
            record.insert(field.key().to_string(), Value::String(masked));
        }
    }
    true
}

/// Coerces a JSON value to the string form classification runs against.
///
/// Strings are taken verbatim; every other value uses its JSON text, so a
/// numeric phone number still reads as a digit string.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truthiness over JSON values: null and `false` are falsy, numbers are
/// falsy iff zero, strings, arrays, and objects are falsy iff empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f != 0.0)
            }
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
