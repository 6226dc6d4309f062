//! Object constraint.

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Failure, FailureKind, FailureLog};
use crate::instance;
use crate::meta;
use crate::pattern;
use crate::util;

/// Optional, independently combinable rules for an object value.
///
/// Meta-validation flags (`schema_validation`, `nested_schema_validation`,
/// `pattern_properties_validation`, `dependencies_schema_validation`)
/// recurse into full schema meta-validation. The rest are instance-side
/// member checks.
#[derive(Debug, Clone, Default)]
pub struct ObjRules {
    /// The whole value must be a valid schema object.
    pub schema_validation: bool,
    /// Every member value must be a valid schema.
    pub nested_schema_validation: bool,
    /// Every member key must compile as a pattern and every member value
    /// must be a valid schema.
    pub pattern_properties_validation: bool,
    /// Every member value must be an array of ≥1 unique strings or a
    /// valid schema.
    pub dependencies_schema_validation: bool,
    /// Instance side: members whose key has an entry here must validate
    /// against the paired schema.
    pub schema_dependencies: Option<Map<String, Value>>,
    /// Enables the schema-dependency member checks and the
    /// all-of-`allowed_property_names`-present requirement.
    pub dependencies_instance_validation: bool,
    /// Upper bound on the member count.
    pub max_properties: Option<usize>,
    /// Lower bound on the member count.
    pub min_properties: usize,
    /// Member keys must be a superset of these names.
    pub required_element_names: Option<Vec<String>>,
    /// Closed-map check: after removing members whose key is in
    /// `allowed_property_names` or matches any pattern in `regex_array`,
    /// no members may remain.
    pub strict_additional_properties: bool,
    pub allowed_property_names: Option<Vec<String>>,
    pub regex_array: Vec<Regex>,
}

#[derive(Debug, Clone)]
pub struct ObjConstraint<'a> {
    pub value: &'a Value,
    pub rules: ObjRules,
}

impl<'a> ObjConstraint<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            rules: ObjRules::default(),
        }
    }

    pub fn with_rules(value: &'a Value, rules: ObjRules) -> Self {
        Self { value, rules }
    }

    pub(crate) fn check(&self, log: &mut FailureLog) -> bool {
        let members = match self.value {
            Value::Object(members) => members,
            _ => return false,
        };

        if self.rules.schema_validation && !meta::is_valid_schema(self.value) {
            log.push(
                Failure::new(self.value, FailureKind::SchemaShapeError, "schema")
                    .with_message("value is not a valid schema"),
            );
            return false;
        }

        if self.rules.nested_schema_validation {
            for (key, member) in members {
                if !meta::is_valid_schema(member) {
                    log.push(
                        Failure::new(member, FailureKind::SchemaShapeError, "schema")
                            .with_message(format!("member '{key}' is not a valid schema")),
                    );
                    return false;
                }
            }
        }

        if self.rules.pattern_properties_validation {
            for (key, member) in members {
                if !pattern::is_valid(key) {
                    log.push(
                        Failure::new(self.value, FailureKind::PatternError, "regular expression")
                            .with_message(format!("key '{key}' is not a valid pattern")),
                    );
                    return false;
                }
                if !meta::is_valid_schema(member) {
                    log.push(
                        Failure::new(member, FailureKind::SchemaShapeError, "schema")
                            .with_message(format!("member '{key}' is not a valid schema")),
                    );
                    return false;
                }
            }
        }

        if self.rules.dependencies_schema_validation && !self.check_dependency_shapes(members, log)
        {
            return false;
        }

        if members.len() < self.rules.min_properties {
            log.push(
                Failure::new(self.value, FailureKind::RangeViolation, "minProperties")
                    .with_message(format!(
                        "{} member(s), minimum is {}",
                        members.len(),
                        self.rules.min_properties
                    )),
            );
            return false;
        }
        if let Some(max) = self.rules.max_properties {
            if members.len() > max {
                log.push(
                    Failure::new(self.value, FailureKind::RangeViolation, "maxProperties")
                        .with_message(format!("{} member(s), maximum is {max}", members.len())),
                );
                return false;
            }
        }

        if let Some(required) = &self.rules.required_element_names {
            let missing: Vec<&str> = required
                .iter()
                .filter(|name| !members.contains_key(name.as_str()))
                .map(|name| name.as_str())
                .collect();
            if !missing.is_empty() {
                log.push(
                    Failure::new(self.value, FailureKind::SchemaShapeError, "required")
                        .with_message(format!("missing properties: {}", missing.join(", "))),
                );
                return false;
            }
        }

        if self.rules.strict_additional_properties {
            let extra: Vec<&str> = members
                .keys()
                .filter(|key| !self.key_is_allowed(key))
                .map(|key| key.as_str())
                .collect();
            if !extra.is_empty() {
                log.push(
                    Failure::new(
                        self.value,
                        FailureKind::SchemaShapeError,
                        "additionalProperties",
                    )
                    .with_message(format!("unexpected properties: {}", extra.join(", "))),
                );
                return false;
            }
        }

        if self.rules.dependencies_instance_validation
            && !self.check_instance_dependencies(members, log)
        {
            return false;
        }

        true
    }

    fn key_is_allowed(&self, key: &str) -> bool {
        if let Some(allowed) = &self.rules.allowed_property_names {
            if allowed.iter().any(|name| name == key) {
                return true;
            }
        }
        self.rules.regex_array.iter().any(|re| re.is_match(key))
    }

    /// Meta side: every `dependencies` member must be a schema or an array
    /// of at least one unique property name.
    fn check_dependency_shapes(&self, members: &Map<String, Value>, log: &mut FailureLog) -> bool {
        for (key, member) in members {
            match member {
                Value::Object(_) => {
                    if !meta::is_valid_schema(member) {
                        log.push(
                            Failure::new(member, FailureKind::SchemaShapeError, "schema")
                                .with_message(format!(
                                    "dependency '{key}' is not a valid schema"
                                )),
                        );
                        return false;
                    }
                }
                Value::Array(names) => {
                    let shape_ok = !names.is_empty()
                        && names.iter().all(|n| n.is_string())
                        && util::all_unique(names);
                    if !shape_ok {
                        log.push(
                            Failure::new(
                                member,
                                FailureKind::SchemaShapeError,
                                "array of unique property names",
                            )
                            .with_message(format!("dependency '{key}' is malformed")),
                        );
                        return false;
                    }
                }
                other => {
                    log.push(
                        Failure::new(
                            other,
                            FailureKind::SchemaShapeError,
                            "schema or array of property names",
                        )
                        .with_message(format!(
                            "dependency '{key}' is {}",
                            util::type_name(other)
                        )),
                    );
                    return false;
                }
            }
        }
        true
    }

    /// Instance side: dependent members validate against their configured
    /// schema, and every allowed-property name must be present.
    fn check_instance_dependencies(
        &self,
        members: &Map<String, Value>,
        log: &mut FailureLog,
    ) -> bool {
        if let Some(deps) = &self.rules.schema_dependencies {
            for (key, dep_schema) in deps {
                let member = match members.get(key) {
                    Some(member) => member,
                    None => continue,
                };
                if !instance::validates(dep_schema, member) {
                    log.push(
                        Failure::new(member, FailureKind::CompositionFailure, "dependencies")
                            .with_message(format!(
                                "member '{key}' does not satisfy its dependency schema"
                            )),
                    );
                    return false;
                }
            }
        }

        if let Some(names) = &self.rules.allowed_property_names {
            let missing: Vec<&str> = names
                .iter()
                .filter(|name| !members.contains_key(name.as_str()))
                .map(|name| name.as_str())
                .collect();
            if !missing.is_empty() {
                log.push(
                    Failure::new(self.value, FailureKind::SchemaShapeError, "dependencies")
                        .with_message(format!(
                            "missing dependent properties: {}",
                            missing.join(", ")
                        )),
                );
                return false;
            }
        }

        true
    }
}
