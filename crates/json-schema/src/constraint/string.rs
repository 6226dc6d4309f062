//! String constraint.

use serde_json::Value;

use crate::error::{Failure, FailureKind, FailureLog};
use crate::keyword::PrimitiveType;
use crate::pattern;

/// Optional rules for a string value.
#[derive(Debug, Clone)]
pub struct StrRules {
    /// The string must itself compile as a delimiter-wrapped pattern.
    pub regex_validation: bool,
    /// The string must be one of the seven JSON primitive type names.
    pub primitive_type_validation: bool,
    /// Lower bound on the character count.
    pub min_length: usize,
    /// Upper bound on the character count.
    pub max_length: Option<usize>,
}

impl Default for StrRules {
    fn default() -> Self {
        Self {
            regex_validation: false,
            primitive_type_validation: false,
            min_length: 0,
            max_length: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrConstraint<'a> {
    pub value: &'a Value,
    pub rules: StrRules,
}

impl<'a> StrConstraint<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            rules: StrRules::default(),
        }
    }

    pub fn with_rules(value: &'a Value, rules: StrRules) -> Self {
        Self { value, rules }
    }

    /// Rule checks. The shape was already verified by the caller.
    pub(crate) fn check(&self, log: &mut FailureLog) -> bool {
        let s = match self.value {
            Value::String(s) => s,
            _ => return false,
        };

        if self.rules.regex_validation {
            if let Err(e) = pattern::compile(s) {
                log.push(
                    Failure::new(self.value, FailureKind::PatternError, "regular expression")
                        .with_message(e.to_string()),
                );
                return false;
            }
        }

        if self.rules.primitive_type_validation && PrimitiveType::from_name(s).is_none() {
            log.push(
                Failure::new(
                    self.value,
                    FailureKind::SchemaShapeError,
                    "primitive type name",
                )
                .with_message(format!(
                    "'{s}' is not one of: array, boolean, integer, number, null, object, string"
                )),
            );
            return false;
        }

        let len = s.chars().count();
        if len < self.rules.min_length {
            log.push(
                Failure::new(self.value, FailureKind::RangeViolation, "minLength")
                    .with_message(format!(
                        "length {len} is below the minimum of {}",
                        self.rules.min_length
                    )),
            );
            return false;
        }
        if let Some(max) = self.rules.max_length {
            if len > max {
                log.push(
                    Failure::new(self.value, FailureKind::RangeViolation, "maxLength")
                        .with_message(format!("length {len} exceeds the maximum of {max}")),
                );
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use serde_json::json;

    fn validate(c: StrConstraint<'_>) -> (bool, FailureLog) {
        let mut log = FailureLog::new();
        let ok = Constraint::Str(c).validate(&mut log);
        (ok, log)
    }

    #[test]
    fn plain_string_passes() {
        let v = json!("hello");
        let (ok, log) = validate(StrConstraint::new(&v));
        assert!(ok);
        assert!(log.is_empty());
    }

    #[test]
    fn regex_validation_rejects_undelimited_patterns() {
        let v = json!("#missing-delimiter");
        let (ok, log) = validate(StrConstraint::with_rules(
            &v,
            StrRules {
                regex_validation: true,
                ..Default::default()
            },
        ));
        assert!(!ok);
        assert_eq!(log.failures()[0].kind, FailureKind::PatternError);

        let v = json!("#valid#");
        let (ok, _) = validate(StrConstraint::with_rules(
            &v,
            StrRules {
                regex_validation: true,
                ..Default::default()
            },
        ));
        assert!(ok);
    }

    #[test]
    fn primitive_type_names_enforced() {
        let rules = || StrRules {
            primitive_type_validation: true,
            ..Default::default()
        };
        let v = json!("integer");
        assert!(validate(StrConstraint::with_rules(&v, rules())).0);
        let v = json!("telephone");
        let (ok, log) = validate(StrConstraint::with_rules(&v, rules()));
        assert!(!ok);
        assert_eq!(log.failures()[0].kind, FailureKind::SchemaShapeError);
    }

    #[test]
    fn length_bounds_count_chars() {
        let v = json!("héllo");
        let (ok, _) = validate(StrConstraint::with_rules(
            &v,
            StrRules {
                min_length: 5,
                max_length: Some(5),
                ..Default::default()
            },
        ));
        assert!(ok);

        let (ok, log) = validate(StrConstraint::with_rules(
            &v,
            StrRules {
                max_length: Some(4),
                ..Default::default()
            },
        ));
        assert!(!ok);
        assert_eq!(log.failures()[0].expected, "maxLength");
    }
}
