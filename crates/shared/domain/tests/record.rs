use serde_json::json;
use stencil_domain::constants::REQUIRED_FIELDS;
use stencil_domain::record::{into_record, missing_fields, null_fields};

#[test]
fn only_objects_become_records() {
    assert!(into_record(json!({ "id": 1 })).is_some());
    assert!(into_record(json!([1, 2])).is_none());
    assert!(into_record(json!(null)).is_none());
}

#[test]
fn missing_and_null_fields_are_reported_in_order() {
    let record = into_record(json!({ "value": null, "id": 1 })).unwrap();

    assert_eq!(missing_fields(&record, &REQUIRED_FIELDS), vec!["name"]);
    assert_eq!(null_fields(&record, &REQUIRED_FIELDS), vec!["value"]);
}
