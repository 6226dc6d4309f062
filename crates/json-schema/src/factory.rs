//! Constraint factory — resolves symbolic kind names to constructed
//! constraints.
//!
//! Kind resolution is data-driven (the meta-validation recipe table
//! addresses kinds by name), so resolution failures surface at runtime as
//! [`SchemaError::ConfigurationError`] rather than at compile time.

use serde_json::Value;

use crate::constraint::{
    ArrConstraint, ArrRules, BoolConstraint, Constraint, GenericConstraint, NumConstraint,
    NumRules, ObjConstraint, ObjRules, StrConstraint, StrRules,
};
use crate::error::SchemaError;

/// The resolvable constraint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Str,
    Num,
    Bool,
    Arr,
    Obj,
    Generic,
}

impl ConstraintKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Num => "number",
            Self::Bool => "boolean",
            Self::Arr => "array",
            Self::Obj => "object",
            Self::Generic => "generic",
        }
    }

    /// Resolve a short name (`"string"`) or qualified identifier
    /// (`"constraint.string"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix("constraint.").unwrap_or(name);
        match short {
            "string" => Some(Self::Str),
            "number" => Some(Self::Num),
            "boolean" => Some(Self::Bool),
            "array" => Some(Self::Arr),
            "object" => Some(Self::Obj),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

/// Configuration accepted by [`create_with`]; each rule set only fits the
/// kind it is written for.
#[derive(Debug, Clone)]
pub enum RuleSet {
    Str(StrRules),
    Num(NumRules),
    Bool,
    Arr(ArrRules),
    Obj(Box<ObjRules>),
    Generic,
}

impl RuleSet {
    fn kind(&self) -> ConstraintKind {
        match self {
            Self::Str(_) => ConstraintKind::Str,
            Self::Num(_) => ConstraintKind::Num,
            Self::Bool => ConstraintKind::Bool,
            Self::Arr(_) => ConstraintKind::Arr,
            Self::Obj(_) => ConstraintKind::Obj,
            Self::Generic => ConstraintKind::Generic,
        }
    }
}

/// Construct a default-configured constraint of the named kind, bound to
/// `value`.
///
/// # Errors
///
/// Returns [`SchemaError::ConfigurationError`] when no such kind exists.
pub fn create<'a>(kind: &str, value: &'a Value) -> Result<Constraint<'a>, SchemaError> {
    let resolved = ConstraintKind::from_name(kind).ok_or_else(|| SchemaError::ConfigurationError {
        kind: kind.to_string(),
    })?;
    Ok(match resolved {
        ConstraintKind::Str => Constraint::Str(StrConstraint::new(value)),
        ConstraintKind::Num => Constraint::Num(NumConstraint::new(value)),
        ConstraintKind::Bool => Constraint::Bool(BoolConstraint::new(value)),
        ConstraintKind::Arr => Constraint::Arr(ArrConstraint::new(value)),
        ConstraintKind::Obj => Constraint::Obj(ObjConstraint::new(value)),
        ConstraintKind::Generic => Constraint::Generic(GenericConstraint::new(value)),
    })
}

/// Construct a configured constraint: resolve the kind by name, then apply
/// the rule set — construct-then-verify, since the name is data.
///
/// # Errors
///
/// [`SchemaError::ConfigurationError`] for an unknown kind;
/// [`SchemaError::TypeMismatch`] when the resolved kind cannot carry the
/// supplied rule set.
pub fn create_with<'a>(
    kind: &str,
    rules: RuleSet,
    value: &'a Value,
) -> Result<Constraint<'a>, SchemaError> {
    let resolved = ConstraintKind::from_name(kind).ok_or_else(|| SchemaError::ConfigurationError {
        kind: kind.to_string(),
    })?;
    if resolved != rules.kind() {
        return Err(SchemaError::TypeMismatch {
            keyword: kind.to_string(),
            expected: rules.kind().as_str().to_string(),
            actual: resolved.as_str().to_string(),
        });
    }
    Ok(match rules {
        RuleSet::Str(rules) => Constraint::Str(StrConstraint::with_rules(value, rules)),
        RuleSet::Num(rules) => Constraint::Num(NumConstraint::with_rules(value, rules)),
        RuleSet::Bool => Constraint::Bool(BoolConstraint::new(value)),
        RuleSet::Arr(rules) => Constraint::Arr(ArrConstraint::with_rules(value, rules)),
        RuleSet::Obj(rules) => Constraint::Obj(ObjConstraint::with_rules(value, *rules)),
        RuleSet::Generic => Constraint::Generic(GenericConstraint::new(value)),
    })
}
