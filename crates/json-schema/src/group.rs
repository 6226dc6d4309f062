//! Strictness composition of constraints.
//!
//! A group is used wherever a keyword legally accepts a union of shapes,
//! e.g. `items` may be a schema object or an array of schemas, combined
//! under ANY.

use crate::constraint::Constraint;
use crate::error::{Failure, FailureKind, FailureLog};

/// How a group's member verdicts combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Every member must pass.
    All,
    /// At least one member must pass.
    #[default]
    Any,
}

impl Strictness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
        }
    }
}

/// An ordered sequence of constraints evaluated together.
#[derive(Debug, Default)]
pub struct ConstraintGroup<'a> {
    members: Vec<Constraint<'a>>,
    strictness: Strictness,
}

impl<'a> ConstraintGroup<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, constraint: Constraint<'a>) {
        self.members.push(constraint);
    }

    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Evaluate every member (each member's own failure records are
    /// published), then reduce under the strictness mode. An empty group
    /// always passes. On an overall failure a single composition record is
    /// published on top of the member records.
    pub fn validate(&self, log: &mut FailureLog) -> bool {
        if self.members.is_empty() {
            return true;
        }

        let mut passed = 0usize;
        for member in &self.members {
            if member.validate(log) {
                passed += 1;
            }
        }

        let ok = match self.strictness {
            Strictness::All => passed == self.members.len(),
            Strictness::Any => passed > 0,
        };
        if !ok {
            log.push(
                Failure::new(
                    self.members[0].value(),
                    FailureKind::CompositionFailure,
                    self.strictness.as_str(),
                )
                .with_message(format!(
                    "{passed} of {} member constraint(s) passed",
                    self.members.len()
                )),
            );
        }
        ok
    }
}
