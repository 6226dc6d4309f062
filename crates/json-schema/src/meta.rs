//! Schema meta-validation.
//!
//! Checks a schema DOCUMENT's own well-formedness, independent of any
//! instance: every keyword present is re-checked against the keyword
//! grammar through constraints built by the factory, composed in a group
//! when a keyword accepts a union of shapes.

use serde_json::Value;

use crate::constraint::{ArrRules, NumRules, ObjRules, StrRules};
use crate::document::SchemaDocument;
use crate::error::{FailureLog, SchemaError};
use crate::factory::{self, RuleSet};
use crate::group::{ConstraintGroup, Strictness};
use crate::keyword::{Keyword, PrimitiveType};

pub struct SchemaValidator;

impl SchemaValidator {
    /// Meta-validate an entire document. Fail-fast: the first keyword
    /// whose value fails its recipe aborts the pass, carrying that
    /// keyword's failure records.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidSchema`] naming the offending keyword, or a
    /// factory error (which indicates a broken recipe table, not a broken
    /// schema).
    pub fn validate(document: &SchemaDocument) -> Result<(), SchemaError> {
        for (keyword, value) in document.entries() {
            let group = build_group(keyword, value)?;
            let mut log = FailureLog::new();
            if !group.validate(&mut log) {
                return Err(SchemaError::InvalidSchema {
                    keyword: keyword.as_str().to_string(),
                    failures: log.into_inner(),
                });
            }
        }
        Ok(())
    }
}

/// Is this value a well-formed schema object? Used by constraints for
/// every nested-schema rule; recurses into full meta-validation.
pub(crate) fn is_valid_schema(value: &Value) -> bool {
    value.is_object() && validate_embedded(value).is_ok()
}

/// Build and meta-validate an embedded sub-schema, propagating the
/// authoring error.
pub(crate) fn validate_embedded(value: &Value) -> Result<(), SchemaError> {
    let document = SchemaDocument::nested_from_value(value)?;
    SchemaValidator::validate(&document)
}

/// The keyword → (strictness, recipes) table. Each recipe names a
/// constraint kind for the factory plus the rule set to configure it
/// with.
fn recipes(keyword: Keyword) -> (Strictness, Vec<(&'static str, RuleSet)>) {
    let str_default = || ("string", RuleSet::Str(StrRules::default()));
    let nonnegative = || {
        (
            "number",
            RuleSet::Num(NumRules {
                lower_bound: Some(0.0),
                exclusive: false,
                ..Default::default()
            }),
        )
    };
    let schema_object = || {
        (
            "object",
            RuleSet::Obj(Box::new(ObjRules {
                schema_validation: true,
                ..Default::default()
            })),
        )
    };
    let schema_array = || {
        (
            "array",
            RuleSet::Arr(ArrRules {
                nested_schema_validation: true,
                minimum_count: Some(1),
                ..Default::default()
            }),
        )
    };

    match keyword {
        Keyword::Title | Keyword::Description | Keyword::Format => {
            (Strictness::Any, vec![str_default()])
        }

        Keyword::MultipleOf => (
            Strictness::Any,
            vec![(
                "number",
                RuleSet::Num(NumRules {
                    lower_bound: Some(0.0),
                    exclusive: true,
                    ..Default::default()
                }),
            )],
        ),

        Keyword::Maximum | Keyword::Minimum => {
            (Strictness::Any, vec![("number", RuleSet::Num(NumRules::default()))])
        }

        Keyword::ExclusiveMaximum | Keyword::ExclusiveMinimum | Keyword::UniqueItems => {
            (Strictness::Any, vec![("boolean", RuleSet::Bool)])
        }

        Keyword::MinLength
        | Keyword::MaxLength
        | Keyword::MaxItems
        | Keyword::MinItems
        | Keyword::MaxProperties
        | Keyword::MinProperties => (Strictness::Any, vec![nonnegative()]),

        Keyword::Pattern => (
            Strictness::Any,
            vec![(
                "string",
                RuleSet::Str(StrRules {
                    regex_validation: true,
                    ..Default::default()
                }),
            )],
        ),

        Keyword::AdditionalItems | Keyword::AdditionalProperties => (
            Strictness::Any,
            vec![("boolean", RuleSet::Bool), schema_object()],
        ),

        Keyword::Items => (
            Strictness::Any,
            vec![
                schema_object(),
                (
                    "array",
                    RuleSet::Arr(ArrRules {
                        nested_schema_validation: true,
                        ..Default::default()
                    }),
                ),
            ],
        ),

        Keyword::Required => (
            Strictness::Any,
            vec![(
                "array",
                RuleSet::Arr(ArrRules {
                    internal_type: Some(PrimitiveType::String),
                    uniqueness: true,
                    minimum_count: Some(1),
                    ..Default::default()
                }),
            )],
        ),

        Keyword::Properties | Keyword::Definitions => (
            Strictness::Any,
            vec![(
                "object",
                RuleSet::Obj(Box::new(ObjRules {
                    nested_schema_validation: true,
                    ..Default::default()
                })),
            )],
        ),

        Keyword::PatternProperties => (
            Strictness::Any,
            vec![(
                "object",
                RuleSet::Obj(Box::new(ObjRules {
                    pattern_properties_validation: true,
                    ..Default::default()
                })),
            )],
        ),

        Keyword::Dependencies => (
            Strictness::Any,
            vec![(
                "object",
                RuleSet::Obj(Box::new(ObjRules {
                    dependencies_schema_validation: true,
                    ..Default::default()
                })),
            )],
        ),

        Keyword::Enum => (
            Strictness::Any,
            vec![(
                "array",
                RuleSet::Arr(ArrRules {
                    minimum_count: Some(1),
                    ..Default::default()
                }),
            )],
        ),

        Keyword::Type => (
            Strictness::Any,
            vec![
                (
                    "string",
                    RuleSet::Str(StrRules {
                        primitive_type_validation: true,
                        ..Default::default()
                    }),
                ),
                (
                    "array",
                    RuleSet::Arr(ArrRules {
                        internal_primitive_type_validation: true,
                        uniqueness: true,
                        ..Default::default()
                    }),
                ),
            ],
        ),

        Keyword::AllOf | Keyword::AnyOf | Keyword::OneOf => {
            (Strictness::Any, vec![schema_array()])
        }

        Keyword::Not => (Strictness::Any, vec![schema_object()]),
    }
}

fn build_group(keyword: Keyword, value: &Value) -> Result<ConstraintGroup<'_>, SchemaError> {
    let (strictness, recipe_list) = recipes(keyword);
    let mut group = ConstraintGroup::new();
    group.set_strictness(strictness);
    for (kind, rules) in recipe_list {
        group.add(factory::create_with(kind, rules, value)?);
    }
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid(value: Value) -> bool {
        SchemaDocument::from_value(&value)
            .and_then(|doc| SchemaValidator::validate(&doc))
            .is_ok()
    }

    #[test]
    fn well_formed_schema_passes() {
        assert!(valid(json!({
            "title": "person",
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": {"type": "string", "minLength": 1},
                "age": {"type": "integer", "minimum": 0}
            },
            "additionalProperties": false
        })));
    }

    #[test]
    fn type_accepts_name_or_unique_name_array() {
        assert!(valid(json!({"type": "string"})));
        assert!(valid(json!({"type": ["string", "null"]})));
        assert!(!valid(json!({"type": "telephone"})));
        assert!(!valid(json!({"type": ["string", "string"]})));
        assert!(!valid(json!({"type": ["string", 5]})));
    }

    #[test]
    fn items_union_of_schema_and_schema_array() {
        assert!(valid(json!({"items": {"type": "number"}})));
        assert!(valid(json!({"items": [{"type": "number"}, {"type": "null"}]})));
        assert!(!valid(json!({"items": [{"type": "number"}, "oops"]})));
    }

    #[test]
    fn composition_keywords_need_schema_branches() {
        assert!(valid(json!({"anyOf": [{"type": "string"}]})));
        assert!(!valid(json!({"anyOf": []})));
        // A branch that is itself malformed fails the recursion.
        assert!(!valid(json!({"oneOf": [{"pattern": "#broken"}]})));
    }

    #[test]
    fn enum_needs_at_least_one_candidate() {
        assert!(valid(json!({"enum": [1, "two", null]})));
        assert!(!valid(json!({"enum": []})));
    }

    #[test]
    fn nested_definitions_are_recursed_into() {
        assert!(valid(json!({
            "definitions": {"positive": {"type": "number", "minimum": 0}}
        })));
        assert!(!valid(json!({
            "definitions": {"broken": {"multipleOf": -3}}
        })));
    }

    #[test]
    fn invalid_keyword_reports_failures() {
        let doc = SchemaDocument::from_value(&json!({"enum": []})).unwrap();
        let err = SchemaValidator::validate(&doc).unwrap_err();
        match err {
            SchemaError::InvalidSchema { keyword, failures } => {
                assert_eq!(keyword, "enum");
                assert!(!failures.is_empty());
            }
            other => panic!("expected InvalidSchema, got {other:?}"),
        }
    }

    #[test]
    fn pattern_properties_recipe() {
        assert!(valid(json!({"patternProperties": {"/^x-/": {"type": "string"}}})));
        assert!(!valid(json!({"patternProperties": {"#broken": {"type": "string"}}})));
    }
}
