use serde_json::json;
use stencil_catalog::processor::{DataProcessor, process_data};
use stencil_catalog::{CatalogError, Record};

struct Doubler;

impl DataProcessor for Doubler {
    fn process(&self, data: Vec<Record>) -> Vec<Record> {
        data.into_iter()
            .map(|mut record| {
                if let Some(n) = record.get("value").and_then(serde_json::Value::as_i64) {
                    record.insert("value".into(), json!(n * 2));
                }
                record
            })
            .collect()
    }
}

fn records(n: i64) -> Vec<Record> {
    (0..n).map(|i| json!({ "value": i }).as_object().cloned().expect("object")).collect()
}

#[test]
fn processor_output_is_returned() {
    let result = process_data(records(3), &Doubler, true).expect("processed");
    let values: Vec<i64> = result.iter().filter_map(|r| r["value"].as_i64()).collect();
    assert_eq!(values, vec![0, 2, 4]);
}

#[test]
fn closures_are_processors() {
    let keep_first = |data: Vec<Record>| data.into_iter().take(1).collect::<Vec<_>>();
    let result = process_data(records(5), &keep_first, true).expect("processed");
    assert_eq!(result.len(), 1);
}

#[test]
fn empty_input_fails_when_validating() {
    let err = process_data(Vec::new(), &Doubler, true).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyInput { .. }));
}

#[test]
fn empty_input_passes_without_validation() {
    let result = process_data(Vec::new(), &Doubler, false).expect("processed");
    assert!(result.is_empty());
}

#[test]
fn trait_objects_are_accepted() {
    let processor: Box<dyn DataProcessor> = Box::new(Doubler);
    for size in [1, 5, 10, 100] {
        let result = process_data(records(size), processor.as_ref(), true).expect("processed");
        assert_eq!(result.len(), usize::try_from(size).unwrap());
    }
}
