use proptest::prelude::*;
use serde_json::{Map, Value, json};
use stencil_kernel::transform::{Flattener, flatten};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

#[test]
fn flattens_one_level() {
    let flat = flatten(&object(json!({ "a": { "b": 1, "c": 2 } })));
    assert_eq!(Value::Object(flat), json!({ "a.b": 1, "a.c": 2 }));
}

#[test]
fn flattens_multiple_levels() {
    let flat = flatten(&object(json!({ "a": { "b": { "c": 2 } } })));
    assert_eq!(Value::Object(flat), json!({ "a.b.c": 2 }));
}

#[test]
fn custom_separator_and_prefix() {
    let flat = Flattener::new()
        .separator("/")
        .prefix("root")
        .flatten(&object(json!({ "a": { "b": 1 }, "c": [1, { "d": 2 }] })));

    assert_eq!(Value::Object(flat), json!({ "root/a/b": 1, "root/c": [1, { "d": 2 }] }));
}

#[test]
fn input_is_left_untouched() {
    let input = object(json!({ "a": { "b": 1 } }));
    let snapshot = input.clone();
    let _ = flatten(&input);
    assert_eq!(input, snapshot);
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn flat_objects_are_unchanged(entries in proptest::collection::btree_map("[a-z]{1,6}", scalar(), 0..16)) {
        let input: Map<String, Value> = entries.into_iter().collect();
        prop_assert_eq!(flatten(&input), input);
    }

    #[test]
    fn one_level_nesting_prefixes_every_key(
        outer in "[a-z]{1,6}",
        entries in proptest::collection::btree_map("[a-z]{1,6}", scalar(), 1..16),
    ) {
        let inner: Map<String, Value> = entries.clone().into_iter().collect();
        let mut input = Map::new();
        input.insert(outer.clone(), Value::Object(inner));

        let flat = flatten(&input);
        prop_assert_eq!(flat.len(), entries.len());
        for (key, value) in entries {
            prop_assert_eq!(flat.get(&format!("{outer}.{key}")), Some(&value));
        }
    }
}
