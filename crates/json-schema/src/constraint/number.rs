//! Numeric constraint.

use serde_json::Value;

use crate::error::{Failure, FailureKind, FailureLog};

/// Optional rules for a numeric value.
///
/// `exclusive` defaults to true, matching the engine's historical bound
/// semantics; callers that want inclusive comparison set it explicitly.
#[derive(Debug, Clone)]
pub struct NumRules {
    pub lower_bound: Option<f64>,
    pub higher_bound: Option<f64>,
    /// Strict (`<`/`>`) versus inclusive (`<=`/`>=`) bound comparison.
    pub exclusive: bool,
    /// Exact-divisibility requirement; 0 disables the check.
    pub multiple_of: f64,
}

impl Default for NumRules {
    fn default() -> Self {
        Self {
            lower_bound: None,
            higher_bound: None,
            exclusive: true,
            multiple_of: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumConstraint<'a> {
    pub value: &'a Value,
    pub rules: NumRules,
}

impl<'a> NumConstraint<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            rules: NumRules::default(),
        }
    }

    pub fn with_rules(value: &'a Value, rules: NumRules) -> Self {
        Self { value, rules }
    }

    pub(crate) fn check(&self, log: &mut FailureLog) -> bool {
        let n = match self.value.as_f64() {
            Some(n) => n,
            None => return false,
        };

        if let Some(lower) = self.rules.lower_bound {
            let ok = if self.rules.exclusive {
                n > lower
            } else {
                n >= lower
            };
            if !ok {
                let op = if self.rules.exclusive { ">" } else { ">=" };
                log.push(
                    Failure::new(self.value, FailureKind::RangeViolation, "minimum")
                        .with_message(format!("{n} must be {op} {lower}")),
                );
                return false;
            }
        }

        if let Some(higher) = self.rules.higher_bound {
            let ok = if self.rules.exclusive {
                n < higher
            } else {
                n <= higher
            };
            if !ok {
                let op = if self.rules.exclusive { "<" } else { "<=" };
                log.push(
                    Failure::new(self.value, FailureKind::RangeViolation, "maximum")
                        .with_message(format!("{n} must be {op} {higher}")),
                );
                return false;
            }
        }

        if self.rules.multiple_of != 0.0 && n % self.rules.multiple_of != 0.0 {
            log.push(
                Failure::new(self.value, FailureKind::RangeViolation, "multipleOf")
                    .with_message(format!(
                        "{n} is not a multiple of {}",
                        self.rules.multiple_of
                    )),
            );
            return false;
        }

        true
    }
}
