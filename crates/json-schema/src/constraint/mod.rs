//! Constraint hierarchy — typed validation units over borrowed values.
//!
//! A [`Constraint`] binds one borrowed value to one primitive shape plus
//! optional keyword-specific rules. The hierarchy is a closed sum type
//! dispatched by match; every variant follows the same protocol:
//! `validate` checks the shape first and short-circuits on mismatch, so
//! variant rules never run against a wrongly-shaped value, and every
//! failing rule pushes exactly one [`Failure`] record before returning
//! false.

mod array;
mod number;
mod object;
mod string;

pub use array::{ArrConstraint, ArrRules};
pub use number::{NumConstraint, NumRules};
pub use object::{ObjConstraint, ObjRules};
pub use string::{StrConstraint, StrRules};

use serde_json::Value;

use crate::error::{Failure, FailureKind, FailureLog};

/// Boolean shape check. No rules beyond the shape itself.
#[derive(Debug, Clone)]
pub struct BoolConstraint<'a> {
    pub value: &'a Value,
}

impl<'a> BoolConstraint<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }
}

/// Always succeeds. Placeholder for values whose shape is validated
/// elsewhere, e.g. individual enum candidates.
#[derive(Debug, Clone)]
pub struct GenericConstraint<'a> {
    pub value: &'a Value,
}

impl<'a> GenericConstraint<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }
}

/// The closed set of constraint variants.
#[derive(Debug, Clone)]
pub enum Constraint<'a> {
    Str(StrConstraint<'a>),
    Num(NumConstraint<'a>),
    Bool(BoolConstraint<'a>),
    Arr(ArrConstraint<'a>),
    Obj(ObjConstraint<'a>),
    Generic(GenericConstraint<'a>),
}

impl<'a> Constraint<'a> {
    /// The value this constraint is bound to.
    pub fn value(&self) -> &'a Value {
        match self {
            Self::Str(c) => c.value,
            Self::Num(c) => c.value,
            Self::Bool(c) => c.value,
            Self::Arr(c) => c.value,
            Self::Obj(c) => c.value,
            Self::Generic(c) => c.value,
        }
    }

    /// Declared type token, as published in `wrongValue` records.
    pub fn expected_type(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Num(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Arr(_) => "array",
            Self::Obj(_) => "object",
            Self::Generic(_) => "any",
        }
    }

    /// Pure shape predicate: does the bound value have this variant's
    /// required primitive shape?
    pub fn has_correct_type(&self) -> bool {
        match self {
            Self::Str(c) => c.value.is_string(),
            Self::Num(c) => c.value.is_number(),
            Self::Bool(c) => c.value.is_boolean(),
            Self::Arr(c) => c.value.is_array(),
            Self::Obj(c) => c.value.is_object(),
            Self::Generic(_) => true,
        }
    }

    /// Shape check with reporting: publishes a `wrongValue` record on
    /// mismatch.
    pub fn validate_type(&self, log: &mut FailureLog) -> bool {
        let ok = self.has_correct_type();
        if !ok {
            log.push(Failure::new(
                self.value(),
                FailureKind::TypeMismatch,
                self.expected_type(),
            ));
        }
        ok
    }

    /// Full validation: shape first, then the variant's rules.
    pub fn validate(&self, log: &mut FailureLog) -> bool {
        if !self.validate_type(log) {
            return false;
        }
        match self {
            Self::Str(c) => c.check(log),
            Self::Num(c) => c.check(log),
            Self::Arr(c) => c.check(log),
            Self::Obj(c) => c.check(log),
            Self::Bool(_) | Self::Generic(_) => true,
        }
    }
}
