//! Records are JSON objects with insertion-ordered keys.

pub use serde_json::{Map, Value};

/// A single stored item: named fields mapped to arbitrary JSON values.
pub type Record = Map<String, Value>;

/// Returns the record inside `value` when it is a JSON object.
#[must_use]
pub fn into_record(value: Value) -> Option<Record> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Required fields that are absent from `record`, in declaration order.
#[must_use]
pub fn missing_fields<'a>(record: &Record, required: &[&'a str]) -> Vec<&'a str> {
    required.iter().copied().filter(|field| !record.contains_key(*field)).collect()
}

/// Required fields that are present but `null`, in declaration order.
#[must_use]
pub fn null_fields<'a>(record: &Record, required: &[&'a str]) -> Vec<&'a str> {
    required.iter().copied().filter(|field| record.get(*field).is_some_and(Value::is_null)).collect()
}
