//! End-to-end tests: build a document from JSON, meta-validate it, then
//! run data instances through it and inspect the failure records.

use json_schema::{Failure, FailureKind, InstanceValidator, SchemaDocument, SchemaValidator};
use serde_json::{json, Value};

/// Build, meta-validate, then validate the instance.
fn run(schema: Value, instance: Value) -> (bool, Vec<Failure>) {
    let document = SchemaDocument::from_value(&schema).expect("schema must build");
    SchemaValidator::validate(&document).expect("schema must meta-validate");
    let mut validator = InstanceValidator::new(&document, &instance);
    let ok = validator.validate();
    (ok, validator.into_failures())
}

#[test]
fn required_property_missing_is_reported() {
    let schema = json!({
        "type": "object",
        "required": ["a"],
        "properties": {"a": {"type": "string"}}
    });
    assert!(run(schema.clone(), json!({"a": "x"})).0);

    let (ok, failures) = run(schema, json!({}));
    assert!(!ok);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].expected, "required");
    assert!(failures[0].message.as_deref().unwrap().contains('a'));
}

#[test]
fn person_schema() {
    let schema = json!({
        "title": "person",
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string", "minLength": 1, "maxLength": 80},
            "age": {"type": "integer", "minimum": 0, "maximum": 150},
            "email": {"type": "string", "format": "email"}
        },
        "additionalProperties": false
    });
    assert!(run(
        schema.clone(),
        json!({"name": "Ada", "age": 36, "email": "ada@example.com"})
    )
    .0);

    let (ok, failures) = run(
        schema,
        json!({"name": "", "age": -1, "email": "nope", "extra": true}),
    );
    assert!(!ok);
    let kinds: Vec<FailureKind> = failures.iter().map(|f| f.kind).collect();
    assert!(kinds.contains(&FailureKind::RangeViolation)); // minLength, minimum
    assert!(kinds.contains(&FailureKind::PatternError)); // email format
    assert!(kinds.contains(&FailureKind::SchemaShapeError)); // extra member
}

#[test]
fn every_keyword_is_checked_even_after_a_failure() {
    let schema = json!({
        "type": "object",
        "required": ["a"],
        "minProperties": 2
    });
    let (ok, failures) = run(schema, json!({"b": 1}));
    assert!(!ok);
    // Both the missing member and the size bound are recorded.
    assert_eq!(failures.len(), 2);
}

#[test]
fn exclusive_bounds_default_to_inclusive() {
    let schema = json!({"minimum": 100});
    assert!(!run(schema.clone(), json!(80)).0);
    assert!(run(schema.clone(), json!(100)).0);
    assert!(run(schema, json!(101)).0);

    let exclusive = json!({"minimum": 100, "exclusiveMinimum": true});
    assert!(!run(exclusive, json!(100)).0);
}

#[test]
fn nested_objects_recurse() {
    let schema = json!({
        "type": "object",
        "properties": {
            "address": {
                "type": "object",
                "required": ["city"],
                "properties": {"city": {"type": "string"}}
            }
        }
    });
    assert!(run(schema.clone(), json!({"address": {"city": "Oslo"}})).0);
    let (ok, failures) = run(schema, json!({"address": {"zip": "0150"}}));
    assert!(!ok);
    assert_eq!(failures[0].expected, "required");
}

#[test]
fn tuple_array_with_closed_tail() {
    let schema = json!({
        "type": "array",
        "items": [{"type": "number"}, {"type": "string"}],
        "additionalItems": false
    });
    assert!(run(schema.clone(), json!([1, "a"])).0);
    assert!(run(schema.clone(), json!([1])).0);
    assert!(!run(schema, json!([1, "a", 2])).0);
}

#[test]
fn composition_over_documents() {
    let schema = json!({
        "oneOf": [
            {"type": "object", "required": ["cash"]},
            {"type": "object", "required": ["card"]}
        ]
    });
    assert!(run(schema.clone(), json!({"cash": 10})).0);
    assert!(!run(schema.clone(), json!({})).0);
    let (ok, failures) = run(schema, json!({"cash": 1, "card": 2}));
    assert!(!ok);
    assert_eq!(failures[0].expected, "oneOf");
}

#[test]
fn dependency_forms_together() {
    let schema = json!({
        "type": "object",
        "dependencies": {
            "credit": ["billing"],
            "discount": {"type": "number", "maximum": 50}
        }
    });
    assert!(run(schema.clone(), json!({"credit": 1, "billing": 2})).0);
    assert!(!run(schema.clone(), json!({"credit": 1})).0);
    assert!(run(schema.clone(), json!({"discount": 25})).0);
    assert!(!run(schema, json!({"discount": 90})).0);
}

#[test]
fn enum_and_not() {
    let schema = json!({"enum": ["red", "green", "blue"], "not": {"enum": ["blue"]}});
    assert!(run(schema.clone(), json!("red")).0);
    let (ok, failures) = run(schema.clone(), json!("blue"));
    assert!(!ok);
    assert_eq!(failures[0].expected, "not");
    assert!(!run(schema, json!("mauve")).0);
}

#[test]
fn pattern_properties_and_open_tail() {
    let schema = json!({
        "type": "object",
        "properties": {"id": {"type": "string"}},
        "patternProperties": {"/^meta_/": {"type": "string"}},
        "additionalProperties": {"type": "number"}
    });
    assert!(run(
        schema.clone(),
        json!({"id": "x", "meta_tag": "y", "count": 3})
    )
    .0);
    assert!(!run(schema.clone(), json!({"meta_tag": 5})).0);
    assert!(!run(schema, json!({"stray": "not a number"})).0);
}
