//! Instance validation.
//!
//! An [`InstanceValidator`] is bound to one schema document and one data
//! instance. For every keyword present on the schema it builds the
//! instance-side semantic check (distinct from meta-validation: here
//! `multipleOf` divides the instance's number by the schema's divisor)
//! and recursively descends into sub-schemas against sub-values for the
//! composition keywords. The validator owns its failure log for the
//! duration of the run.
//!
//! Keyword checks whose shape does not apply to the instance are skipped:
//! `minLength` says nothing about a number, `required` nothing about an
//! array. The shape gate is the `type` keyword.

use serde_json::{Map, Value};

use crate::constraint::{ArrConstraint, ArrRules, Constraint, NumConstraint, NumRules, ObjConstraint, ObjRules, StrConstraint, StrRules};
use crate::document::SchemaDocument;
use crate::error::{Failure, FailureKind, FailureLog};
use crate::format;
use crate::keyword::{Format, Keyword, PrimitiveType};
use crate::pattern;
use crate::util;

pub struct InstanceValidator<'a> {
    schema: &'a SchemaDocument,
    instance: &'a Value,
    log: FailureLog,
}

impl<'a> InstanceValidator<'a> {
    pub fn new(schema: &'a SchemaDocument, instance: &'a Value) -> Self {
        Self {
            schema,
            instance,
            log: FailureLog::new(),
        }
    }

    /// Run every applicable keyword check. Succeeds iff all of them do;
    /// every keyword is evaluated so the log covers the whole instance.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for (keyword, value) in self.schema.entries() {
            if !self.apply(keyword, value) {
                ok = false;
            }
        }
        ok
    }

    /// Accumulated failure records, in arrival order.
    pub fn failures(&self) -> &[Failure] {
        self.log.failures()
    }

    pub fn into_failures(self) -> Vec<Failure> {
        self.log.into_inner()
    }

    fn apply(&mut self, keyword: Keyword, kw_value: &Value) -> bool {
        match keyword {
            // Annotations and keywords consumed by their partners.
            Keyword::Title
            | Keyword::Description
            | Keyword::Definitions
            | Keyword::ExclusiveMaximum
            | Keyword::ExclusiveMinimum
            | Keyword::AdditionalItems => true,

            Keyword::Type => self.check_type(kw_value),
            Keyword::Enum => self.check_enum(kw_value),

            Keyword::MultipleOf => self.check_number(NumRules {
                multiple_of: kw_value.as_f64().unwrap_or(0.0),
                ..Default::default()
            }),
            Keyword::Maximum => self.check_number(NumRules {
                higher_bound: kw_value.as_f64(),
                exclusive: self.bool_keyword(Keyword::ExclusiveMaximum),
                ..Default::default()
            }),
            Keyword::Minimum => self.check_number(NumRules {
                lower_bound: kw_value.as_f64(),
                exclusive: self.bool_keyword(Keyword::ExclusiveMinimum),
                ..Default::default()
            }),

            Keyword::MinLength => self.check_string(StrRules {
                min_length: as_count(kw_value),
                ..Default::default()
            }),
            Keyword::MaxLength => self.check_string(StrRules {
                max_length: Some(as_count(kw_value)),
                ..Default::default()
            }),
            Keyword::Pattern => self.check_pattern(kw_value),
            Keyword::Format => self.check_format(kw_value),

            Keyword::Items => self.check_items(kw_value),
            Keyword::MaxItems => self.check_max_items(kw_value),
            Keyword::MinItems => self.check_array(ArrRules {
                minimum_count: Some(as_count(kw_value)),
                ..Default::default()
            }),
            Keyword::UniqueItems => {
                if util::truthiness(kw_value) {
                    self.check_array(ArrRules {
                        uniqueness: true,
                        ..Default::default()
                    })
                } else {
                    true
                }
            }

            Keyword::Required => self.check_object(ObjRules {
                required_element_names: string_list(kw_value),
                ..Default::default()
            }),
            Keyword::Properties => self.check_properties(kw_value),
            Keyword::PatternProperties => self.check_pattern_properties(kw_value),
            Keyword::AdditionalProperties => self.check_additional_properties(kw_value),
            Keyword::MaxProperties => self.check_object(ObjRules {
                max_properties: Some(as_count(kw_value)),
                ..Default::default()
            }),
            Keyword::MinProperties => self.check_object(ObjRules {
                min_properties: as_count(kw_value),
                ..Default::default()
            }),
            Keyword::Dependencies => self.check_dependencies(kw_value),

            Keyword::AllOf => self.check_all_of(kw_value),
            Keyword::AnyOf => self.check_any_of(kw_value),
            Keyword::OneOf => self.check_one_of(kw_value),
            Keyword::Not => self.check_not(kw_value),
        }
    }

    /// Coerced boolean companion keyword (`exclusiveMaximum` etc.).
    fn bool_keyword(&self, keyword: Keyword) -> bool {
        self.schema
            .get(keyword)
            .map(util::truthiness)
            .unwrap_or(false)
    }

    fn check_type(&mut self, kw_value: &Value) -> bool {
        let matched = match kw_value {
            Value::String(name) => PrimitiveType::from_name(name)
                .map(|t| t.matches(self.instance))
                .unwrap_or(false),
            Value::Array(names) => names.iter().any(|name| {
                name.as_str()
                    .and_then(PrimitiveType::from_name)
                    .map(|t| t.matches(self.instance))
                    .unwrap_or(false)
            }),
            _ => false,
        };
        if !matched {
            let expected = match kw_value {
                Value::String(name) => name.clone(),
                Value::Array(names) => names
                    .iter()
                    .filter_map(|n| n.as_str())
                    .collect::<Vec<_>>()
                    .join(" or "),
                _ => String::new(),
            };
            self.log.push(
                Failure::new(self.instance, FailureKind::TypeMismatch, expected).with_message(
                    format!("instance is {}", util::type_name(self.instance)),
                ),
            );
        }
        matched
    }

    fn check_enum(&mut self, kw_value: &Value) -> bool {
        let candidates = match kw_value.as_array() {
            Some(c) => c,
            None => return true,
        };
        if candidates.iter().any(|c| util::json_equal(self.instance, c)) {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::CompositionFailure, "enum").with_message(
                format!("value matches none of the {} candidate(s)", candidates.len()),
            ),
        );
        false
    }

    fn check_number(&mut self, rules: NumRules) -> bool {
        if !self.instance.is_number() {
            return true;
        }
        Constraint::Num(NumConstraint::with_rules(self.instance, rules)).validate(&mut self.log)
    }

    fn check_string(&mut self, rules: StrRules) -> bool {
        if !self.instance.is_string() {
            return true;
        }
        Constraint::Str(StrConstraint::with_rules(self.instance, rules)).validate(&mut self.log)
    }

    fn check_array(&mut self, rules: ArrRules) -> bool {
        if !self.instance.is_array() {
            return true;
        }
        Constraint::Arr(ArrConstraint::with_rules(self.instance, rules)).validate(&mut self.log)
    }

    fn check_object(&mut self, rules: ObjRules) -> bool {
        if !self.instance.is_object() {
            return true;
        }
        Constraint::Obj(ObjConstraint::with_rules(self.instance, rules)).validate(&mut self.log)
    }

    fn check_pattern(&mut self, kw_value: &Value) -> bool {
        let s = match self.instance.as_str() {
            Some(s) => s,
            None => return true,
        };
        let source = match kw_value.as_str() {
            Some(p) => p,
            None => return true,
        };
        let re = match pattern::compile(source) {
            Ok(re) => re,
            Err(e) => {
                self.log.push(
                    Failure::new(kw_value, FailureKind::PatternError, "regular expression")
                        .with_message(e.to_string()),
                );
                return false;
            }
        };
        if re.is_match(s) {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::PatternError, source)
                .with_message("string does not match the pattern"),
        );
        false
    }

    fn check_format(&mut self, kw_value: &Value) -> bool {
        let s = match self.instance.as_str() {
            Some(s) => s,
            None => return true,
        };
        let fmt = match kw_value.as_str().and_then(Format::from_name) {
            Some(fmt) => fmt,
            None => return true,
        };
        if format::check(fmt, s) {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::PatternError, fmt.as_str())
                .with_message(format!("string is not a valid {fmt}")),
        );
        false
    }

    fn check_items(&mut self, kw_value: &Value) -> bool {
        let elements = match self.instance.as_array() {
            Some(e) => e,
            None => return true,
        };
        match kw_value {
            // One schema for every element.
            Value::Object(_) => {
                let mut ok = true;
                for element in elements {
                    if !self.validate_subschema(kw_value, element) {
                        ok = false;
                    }
                }
                ok
            }
            // Positional tuple schemas; extras governed by additionalItems.
            Value::Array(subschemas) => {
                let mut ok = true;
                for (element, subschema) in elements.iter().zip(subschemas) {
                    if !self.validate_subschema(subschema, element) {
                        ok = false;
                    }
                }
                if elements.len() > subschemas.len() {
                    ok &= self.check_extra_items(&elements[subschemas.len()..]);
                }
                ok
            }
            _ => true,
        }
    }

    fn check_extra_items(&mut self, extras: &[Value]) -> bool {
        match self.schema.get(Keyword::AdditionalItems) {
            Some(Value::Bool(false)) => {
                self.log.push(
                    Failure::new(self.instance, FailureKind::RangeViolation, "additionalItems")
                        .with_message(format!(
                            "{} element(s) beyond the tuple schemas",
                            extras.len()
                        )),
                );
                false
            }
            Some(subschema @ Value::Object(_)) => {
                let mut ok = true;
                for extra in extras {
                    if !self.validate_subschema(subschema, extra) {
                        ok = false;
                    }
                }
                ok
            }
            _ => true,
        }
    }

    fn check_max_items(&mut self, kw_value: &Value) -> bool {
        let elements = match self.instance.as_array() {
            Some(e) => e,
            None => return true,
        };
        let max = as_count(kw_value);
        if elements.len() <= max {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::RangeViolation, "maxItems").with_message(
                format!("{} element(s), maximum is {max}", elements.len()),
            ),
        );
        false
    }

    fn check_properties(&mut self, kw_value: &Value) -> bool {
        let members = match self.instance.as_object() {
            Some(m) => m,
            None => return true,
        };
        let subschemas = match kw_value.as_object() {
            Some(s) => s,
            None => return true,
        };
        let mut ok = true;
        for (name, subschema) in subschemas {
            if let Some(member) = members.get(name) {
                if !self.validate_subschema(subschema, member) {
                    ok = false;
                }
            }
        }
        ok
    }

    fn check_pattern_properties(&mut self, kw_value: &Value) -> bool {
        let members = match self.instance.as_object() {
            Some(m) => m,
            None => return true,
        };
        let subschemas = match kw_value.as_object() {
            Some(s) => s,
            None => return true,
        };
        let mut ok = true;
        for (source, subschema) in subschemas {
            let re = match pattern::compile(source) {
                Ok(re) => re,
                Err(e) => {
                    self.log.push(
                        Failure::new(kw_value, FailureKind::PatternError, "regular expression")
                            .with_message(e.to_string()),
                    );
                    ok = false;
                    continue;
                }
            };
            for (key, member) in members {
                if re.is_match(key) && !self.validate_subschema(subschema, member) {
                    ok = false;
                }
            }
        }
        ok
    }

    fn check_additional_properties(&mut self, kw_value: &Value) -> bool {
        let members = match self.instance.as_object() {
            Some(m) => m,
            None => return true,
        };
        match kw_value {
            Value::Bool(true) => true,
            Value::Bool(false) => {
                let rules = ObjRules {
                    strict_additional_properties: true,
                    allowed_property_names: Some(self.declared_property_names()),
                    regex_array: self.declared_property_patterns(),
                    ..Default::default()
                };
                self.check_object(rules)
            }
            Value::Object(_) => {
                let names = self.declared_property_names();
                let patterns = self.declared_property_patterns();
                let mut ok = true;
                for (key, member) in members {
                    let covered = names.iter().any(|n| n == key)
                        || patterns.iter().any(|re| re.is_match(key));
                    if !covered && !self.validate_subschema(kw_value, member) {
                        ok = false;
                    }
                }
                ok
            }
            _ => true,
        }
    }

    /// Member names declared under `properties`.
    fn declared_property_names(&self) -> Vec<String> {
        self.schema
            .get(Keyword::Properties)
            .and_then(Value::as_object)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Compilable key patterns declared under `patternProperties`.
    fn declared_property_patterns(&self) -> Vec<regex::Regex> {
        self.schema
            .get(Keyword::PatternProperties)
            .and_then(Value::as_object)
            .map(|m| m.keys().filter_map(|k| pattern::compile(k).ok()).collect())
            .unwrap_or_default()
    }

    fn check_dependencies(&mut self, kw_value: &Value) -> bool {
        let members = match self.instance.as_object() {
            Some(m) => m,
            None => return true,
        };
        let dependencies = match kw_value.as_object() {
            Some(d) => d,
            None => return true,
        };

        let mut schema_dependencies = Map::new();
        let mut required_names: Vec<String> = Vec::new();
        for (trigger, dependency) in dependencies {
            match dependency {
                Value::Object(_) => {
                    schema_dependencies.insert(trigger.clone(), dependency.clone());
                }
                Value::Array(names) => {
                    if members.contains_key(trigger) {
                        required_names.extend(
                            names.iter().filter_map(|n| n.as_str()).map(String::from),
                        );
                    }
                }
                _ => {}
            }
        }

        let rules = ObjRules {
            dependencies_instance_validation: true,
            schema_dependencies: Some(schema_dependencies),
            allowed_property_names: if required_names.is_empty() {
                None
            } else {
                Some(required_names)
            },
            ..Default::default()
        };
        self.check_object(rules)
    }

    fn check_all_of(&mut self, kw_value: &Value) -> bool {
        let branches = match kw_value.as_array() {
            Some(b) => b,
            None => return true,
        };
        let mut failed = 0usize;
        for branch in branches {
            if !self.validate_subschema(branch, self.instance) {
                failed += 1;
            }
        }
        if failed > 0 {
            self.log.push(
                Failure::new(self.instance, FailureKind::CompositionFailure, "allOf")
                    .with_message(format!("{failed} of {} branch(es) failed", branches.len())),
            );
        }
        failed == 0
    }

    fn check_any_of(&mut self, kw_value: &Value) -> bool {
        let branches = match kw_value.as_array() {
            Some(b) => b,
            None => return true,
        };
        if branches.iter().any(|b| validates(b, self.instance)) {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::CompositionFailure, "anyOf").with_message(
                format!("value matches none of the {} branch(es)", branches.len()),
            ),
        );
        false
    }

    fn check_one_of(&mut self, kw_value: &Value) -> bool {
        let branches = match kw_value.as_array() {
            Some(b) => b,
            None => return true,
        };
        let matched = branches
            .iter()
            .filter(|b| validates(b, self.instance))
            .count();
        if matched == 1 {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::CompositionFailure, "oneOf").with_message(
                format!(
                    "{matched} of {} branch(es) matched, exactly one must",
                    branches.len()
                ),
            ),
        );
        false
    }

    fn check_not(&mut self, kw_value: &Value) -> bool {
        if !validates(kw_value, self.instance) {
            return true;
        }
        self.log.push(
            Failure::new(self.instance, FailureKind::CompositionFailure, "not")
                .with_message("value must not match the forbidden schema"),
        );
        false
    }

    /// Validate `instance` against an embedded sub-schema, merging the
    /// child run's failures into this run's log.
    fn validate_subschema(&mut self, schema_value: &Value, instance: &Value) -> bool {
        match SchemaDocument::nested_from_value(schema_value) {
            Ok(document) => {
                let mut child = InstanceValidator::new(&document, instance);
                let ok = child.validate();
                self.log.merge(child.into_log());
                ok
            }
            Err(e) => {
                self.log.push(
                    Failure::new(schema_value, FailureKind::SchemaShapeError, "schema")
                        .with_message(e.to_string()),
                );
                false
            }
        }
    }

    fn into_log(self) -> FailureLog {
        self.log
    }
}

/// Probe: does `instance` satisfy the embedded sub-schema? Failure records
/// of the probe run are discarded; callers publish their own summary.
pub(crate) fn validates(schema_value: &Value, instance: &Value) -> bool {
    match SchemaDocument::nested_from_value(schema_value) {
        Ok(document) => InstanceValidator::new(&document, instance).validate(),
        Err(_) => false,
    }
}

/// Stored count keywords are integer-valued numbers by construction.
fn as_count(value: &Value) -> usize {
    value.as_f64().map(|n| n.max(0.0) as usize).unwrap_or(0)
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|names| {
        names
            .iter()
            .filter_map(|n| n.as_str())
            .map(String::from)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(schema: Value, instance: Value) -> (bool, Vec<Failure>) {
        let document = SchemaDocument::from_value(&schema).expect("schema must build");
        let mut validator = InstanceValidator::new(&document, &instance);
        let ok = validator.validate();
        (ok, validator.into_failures())
    }

    #[test]
    fn type_gate() {
        assert!(run(json!({"type": "string"}), json!("x")).0);
        let (ok, failures) = run(json!({"type": "string"}), json!(5));
        assert!(!ok);
        assert_eq!(failures[0].kind, FailureKind::TypeMismatch);
        assert!(run(json!({"type": ["string", "null"]}), json!(null)).0);
        assert!(run(json!({"type": "integer"}), json!(4.0)).0);
        assert!(!run(json!({"type": "integer"}), json!(4.5)).0);
    }

    #[test]
    fn inapplicable_keywords_are_skipped() {
        // A number is not constrained by string or object keywords.
        assert!(run(json!({"minLength": 10, "required": ["a"]}), json!(5)).0);
    }

    #[test]
    fn numeric_keywords() {
        assert!(run(json!({"multipleOf": 3}), json!(300)).0);
        assert!(!run(json!({"multipleOf": 3}), json!(55)).0);
        assert!(run(json!({"maximum": 10}), json!(10)).0);
        assert!(!run(json!({"maximum": 10, "exclusiveMaximum": true}), json!(10)).0);
        assert!(run(json!({"minimum": 2}), json!(2)).0);
        assert!(!run(json!({"minimum": 2, "exclusiveMinimum": true}), json!(2)).0);
    }

    #[test]
    fn string_keywords() {
        assert!(run(json!({"minLength": 2, "maxLength": 3}), json!("ab")).0);
        assert!(!run(json!({"minLength": 2}), json!("a")).0);
        assert!(run(json!({"pattern": "/^ab+$/"}), json!("abbb")).0);
        let (ok, failures) = run(json!({"pattern": "/^ab+$/"}), json!("zzz"));
        assert!(!ok);
        assert_eq!(failures[0].kind, FailureKind::PatternError);
    }

    #[test]
    fn enum_uses_deep_equality() {
        let schema = json!({"enum": [1, {"a": [2]}, "x"]});
        assert!(run(schema.clone(), json!({"a": [2]})).0);
        let (ok, failures) = run(schema, json!({"a": [3]}));
        assert!(!ok);
        assert_eq!(failures[0].kind, FailureKind::CompositionFailure);
    }

    #[test]
    fn homogeneous_items() {
        let schema = json!({"items": {"type": "number"}});
        assert!(run(schema.clone(), json!([1, 2, 3])).0);
        let (ok, failures) = run(schema, json!([1, "two"]));
        assert!(!ok);
        assert!(!failures.is_empty());
    }

    #[test]
    fn tuple_items_and_additional_items() {
        let tuple = json!([{"type": "number"}, {"type": "string"}]);
        assert!(run(json!({"items": tuple}), json!([1, "a", true])).0);
        let (ok, failures) = run(
            json!({"items": tuple, "additionalItems": false}),
            json!([1, "a", true]),
        );
        assert!(!ok);
        assert_eq!(failures[0].expected, "additionalItems");
        assert!(run(
            json!({"items": tuple, "additionalItems": {"type": "boolean"}}),
            json!([1, "a", true, false])
        )
        .0);
        assert!(!run(
            json!({"items": tuple, "additionalItems": {"type": "boolean"}}),
            json!([1, "a", "not-bool"])
        )
        .0);
    }

    #[test]
    fn array_bounds_and_uniqueness() {
        assert!(!run(json!({"maxItems": 2}), json!([1, 2, 3])).0);
        assert!(!run(json!({"minItems": 2}), json!([1])).0);
        assert!(!run(json!({"uniqueItems": true}), json!([1, 2, 1])).0);
        assert!(run(json!({"uniqueItems": false}), json!([1, 2, 1])).0);
    }

    #[test]
    fn object_keywords() {
        assert!(!run(json!({"required": ["a"]}), json!({})).0);
        assert!(!run(json!({"maxProperties": 1}), json!({"a": 1, "b": 2})).0);
        assert!(!run(json!({"minProperties": 2}), json!({"a": 1})).0);
    }

    #[test]
    fn properties_recurse() {
        let schema = json!({"properties": {"age": {"type": "integer", "minimum": 0}}});
        assert!(run(schema.clone(), json!({"age": 30})).0);
        assert!(run(schema.clone(), json!({"other": "ignored"})).0);
        let (ok, failures) = run(schema, json!({"age": -1}));
        assert!(!ok);
        assert_eq!(failures[0].kind, FailureKind::RangeViolation);
    }

    #[test]
    fn pattern_properties_recurse() {
        let schema = json!({"patternProperties": {"/^num_/": {"type": "number"}}});
        assert!(run(schema.clone(), json!({"num_a": 1, "other": "x"})).0);
        assert!(!run(schema, json!({"num_a": "not a number"})).0);
    }

    #[test]
    fn additional_properties_closed_map() {
        let schema = json!({
            "properties": {"foo": {}},
            "patternProperties": {"/^x-/": {}},
            "additionalProperties": false
        });
        assert!(run(schema.clone(), json!({"foo": 1, "x-custom": 2})).0);
        let (ok, failures) = run(schema, json!({"foo": 1, "intruder": 2}));
        assert!(!ok);
        assert!(failures[0]
            .message
            .as_deref()
            .unwrap()
            .contains("intruder"));
    }

    #[test]
    fn additional_properties_schema_applies_to_unmatched() {
        let schema = json!({
            "properties": {"foo": {}},
            "additionalProperties": {"type": "number"}
        });
        assert!(run(schema.clone(), json!({"foo": "anything", "extra": 3})).0);
        assert!(!run(schema, json!({"extra": "not a number"})).0);
    }

    #[test]
    fn dependencies_property_form() {
        let schema = json!({"dependencies": {"credit": ["billing", "name"]}});
        assert!(run(schema.clone(), json!({"other": 1})).0);
        assert!(run(
            schema.clone(),
            json!({"credit": 1, "billing": 2, "name": 3})
        )
        .0);
        assert!(!run(schema, json!({"credit": 1, "name": 3})).0);
    }

    #[test]
    fn dependencies_schema_form() {
        let schema = json!({"dependencies": {"credit": {"type": "number"}}});
        assert!(run(schema.clone(), json!({"credit": 42})).0);
        assert!(!run(schema.clone(), json!({"credit": "no"})).0);
        assert!(run(schema, json!({"unrelated": true})).0);
    }

    #[test]
    fn composition_keywords() {
        let any = json!({"anyOf": [{"type": "string"}, {"type": "number"}]});
        assert!(run(any.clone(), json!(5)).0);
        assert!(!run(any, json!(true)).0);

        let all = json!({"allOf": [{"type": "integer"}, {"minimum": 10}]});
        assert!(run(all.clone(), json!(12)).0);
        assert!(!run(all, json!(5)).0);

        let one = json!({"oneOf": [{"type": "integer"}, {"minimum": 10}]});
        assert!(run(one.clone(), json!(5)).0); // integer only
        assert!(run(one.clone(), json!(10.5)).0); // minimum only
        assert!(!run(one, json!(12)).0); // both branches match

        let not = json!({"not": {"type": "string"}});
        assert!(run(not.clone(), json!(5)).0);
        let (ok, failures) = run(not, json!("s"));
        assert!(!ok);
        assert_eq!(failures[0].expected, "not");
    }

    #[test]
    fn probe_branch_failures_stay_private() {
        let (ok, failures) = run(
            json!({"anyOf": [{"type": "string"}, {"type": "number"}]}),
            json!(true),
        );
        assert!(!ok);
        // One summary record only, not the two branch probes' records.
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].expected, "anyOf");
    }

    #[test]
    fn format_checks_apply_to_strings() {
        assert!(run(json!({"format": "ipv4"}), json!("10.0.0.1")).0);
        let (ok, failures) = run(json!({"format": "ipv4"}), json!("999.0.0.1"));
        assert!(!ok);
        assert_eq!(failures[0].expected, "ipv4");
        assert!(run(json!({"format": "ipv4"}), json!(42)).0);
    }
}
