//! Array constraint.

use serde_json::Value;

use crate::error::{Failure, FailureKind, FailureLog};
use crate::keyword::PrimitiveType;
use crate::meta;
use crate::util;

/// Optional, independently combinable rules for an array value.
#[derive(Debug, Clone, Default)]
pub struct ArrRules {
    /// Every element must itself be a valid schema object.
    pub nested_schema_validation: bool,
    /// Every element must inhabit the named primitive type.
    pub internal_type: Option<PrimitiveType>,
    /// Elements must be pairwise distinct (deep equality, read-only).
    pub uniqueness: bool,
    /// Lower bound on the element count.
    pub minimum_count: Option<usize>,
    /// Every element must be one of the seven primitive type names.
    pub internal_primitive_type_validation: bool,
}

#[derive(Debug, Clone)]
pub struct ArrConstraint<'a> {
    pub value: &'a Value,
    pub rules: ArrRules,
}

impl<'a> ArrConstraint<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            rules: ArrRules::default(),
        }
    }

    pub fn with_rules(value: &'a Value, rules: ArrRules) -> Self {
        Self { value, rules }
    }

    pub(crate) fn check(&self, log: &mut FailureLog) -> bool {
        let items = match self.value {
            Value::Array(items) => items,
            _ => return false,
        };

        if let Some(min) = self.rules.minimum_count {
            if items.len() < min {
                log.push(
                    Failure::new(self.value, FailureKind::RangeViolation, "minItems")
                        .with_message(format!("{} element(s), minimum is {min}", items.len())),
                );
                return false;
            }
        }

        if self.rules.nested_schema_validation {
            for (i, item) in items.iter().enumerate() {
                if !meta::is_valid_schema(item) {
                    log.push(
                        Failure::new(item, FailureKind::SchemaShapeError, "schema")
                            .with_message(format!("element {i} is not a valid schema")),
                    );
                    return false;
                }
            }
        }

        if let Some(internal) = self.rules.internal_type {
            for (i, item) in items.iter().enumerate() {
                if !internal.matches(item) {
                    log.push(
                        Failure::new(item, FailureKind::TypeMismatch, internal.as_str())
                            .with_message(format!(
                                "element {i} is {}",
                                util::type_name(item)
                            )),
                    );
                    return false;
                }
            }
        }

        if self.rules.internal_primitive_type_validation {
            for (i, item) in items.iter().enumerate() {
                let named = item.as_str().and_then(PrimitiveType::from_name);
                if named.is_none() {
                    log.push(
                        Failure::new(item, FailureKind::SchemaShapeError, "primitive type name")
                            .with_message(format!("element {i} is not a primitive type name")),
                    );
                    return false;
                }
            }
        }

        if self.rules.uniqueness && !util::all_unique(items) {
            log.push(
                Failure::new(self.value, FailureKind::SchemaShapeError, "uniqueItems")
                    .with_message("elements are not pairwise distinct"),
            );
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use serde_json::json;

    fn validate(value: &Value, rules: ArrRules) -> (bool, FailureLog) {
        let mut log = FailureLog::new();
        let ok = Constraint::Arr(ArrConstraint::with_rules(value, rules)).validate(&mut log);
        (ok, log)
    }

    #[test]
    fn minimum_count() {
        let rules = || ArrRules {
            minimum_count: Some(1),
            ..Default::default()
        };
        assert!(!validate(&json!([]), rules()).0);
        assert!(validate(&json!([1]), rules()).0);
    }

    #[test]
    fn internal_type_checks_every_element() {
        let v = json!(["a", "b", 3]);
        let (ok, log) = validate(
            &v,
            ArrRules {
                internal_type: Some(PrimitiveType::String),
                ..Default::default()
            },
        );
        assert!(!ok);
        assert_eq!(log.failures()[0].kind, FailureKind::TypeMismatch);
        assert_eq!(log.failures()[0].value, json!(3));
    }

    #[test]
    fn uniqueness_is_read_only() {
        let v = json!([1, 2, 1]);
        let (ok, _) = validate(
            &v,
            ArrRules {
                uniqueness: true,
                ..Default::default()
            },
        );
        assert!(!ok);
        // The inspected value is untouched.
        assert_eq!(v, json!([1, 2, 1]));
    }

    #[test]
    fn primitive_type_name_elements() {
        let rules = || ArrRules {
            internal_primitive_type_validation: true,
            ..Default::default()
        };
        assert!(validate(&json!(["string", "null"]), rules()).0);
        assert!(!validate(&json!(["string", "telephone"]), rules()).0);
        assert!(!validate(&json!(["string", 4]), rules()).0);
    }

    #[test]
    fn nested_schema_validation_recurses() {
        let rules = || ArrRules {
            nested_schema_validation: true,
            ..Default::default()
        };
        assert!(validate(&json!([{"type": "string"}, {"minimum": 3}]), rules()).0);
        // multipleOf must be positive, so the nested schema is invalid.
        let (ok, log) = validate(&json!([{"multipleOf": -1}]), rules());
        assert!(!ok);
        assert_eq!(log.failures()[0].kind, FailureKind::SchemaShapeError);
        // Non-object elements are not schemas.
        assert!(!validate(&json!(["not-a-schema"]), rules()).0);
    }
}
