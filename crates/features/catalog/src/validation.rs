//! Required-field policy applied on insert.

use crate::error::CatalogError;
use stencil_domain::constants::REQUIRED_FIELDS;
use stencil_domain::record::{Record, missing_fields, null_fields};
use tracing::{debug, error};

/// Checks that `record` carries every field in [`REQUIRED_FIELDS`] with a non-null value.
///
/// Absent fields are reported before null ones.
///
/// # Errors
/// Returns [`CatalogError::ValidationFailed`] naming the offending fields.
pub fn validate_record(record: &Record) -> Result<(), CatalogError> {
    let missing = missing_fields(record, &REQUIRED_FIELDS);
    if !missing.is_empty() {
        error!(
            "Missing required fields: {missing:?}. Item keys: {:?}",
            record.keys().collect::<Vec<_>>()
        );
        return Err(CatalogError::ValidationFailed {
            message: format!("Missing required fields: {}", missing.join(", ")).into(),
            fields: missing,
            context: None,
        });
    }

    let nulls = null_fields(record, &REQUIRED_FIELDS);
    if !nulls.is_empty() {
        error!("Required fields have null values: {nulls:?}");
        return Err(CatalogError::ValidationFailed {
            message: format!("Required fields cannot be null: {}", nulls.join(", ")).into(),
            fields: nulls,
            context: None,
        });
    }

    debug!("Item validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn complete_record_passes() {
        assert!(validate_record(&record(json!({ "id": 1, "name": "a", "value": 0 }))).is_ok());
    }

    #[test]
    fn falsy_values_are_not_null() {
        let r = record(json!({ "id": 0, "name": "", "value": false }));
        assert!(validate_record(&r).is_ok());
    }

    #[test]
    fn missing_fields_are_listed() {
        let err = validate_record(&record(json!({ "name": "a" }))).unwrap_err();
        let CatalogError::ValidationFailed { fields, message, .. } = err else {
            panic!("expected a validation failure");
        };
        assert_eq!(fields, vec!["id", "value"]);
        assert_eq!(message, "Missing required fields: id, value");
    }

    #[test]
    fn null_fields_are_listed() {
        let err = validate_record(&record(json!({ "id": 1, "name": null, "value": 2 }))).unwrap_err();
        assert!(
            matches!(&err, CatalogError::ValidationFailed { fields, .. } if fields == &vec!["name"]),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn empty_record_is_rejected() {
        assert!(validate_record(&Record::new()).is_err());
    }
}
