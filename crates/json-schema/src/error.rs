//! Failure records, the per-run failure log, and fail-fast schema-authoring
//! errors.
//!
//! Two reporting surfaces exist on purpose: schema-authoring problems
//! (bad keyword assignments, malformed schema documents) are `Result`s that
//! abort at the point of detection, while instance-validation failures are
//! accumulated as [`Failure`] records in a [`FailureLog`] owned by the
//! validation run.

use serde_json::Value;
use thiserror::Error;

/// Classification of a single violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The value's primitive shape does not match what was required.
    TypeMismatch,
    /// A numeric, length, or count bound was exceeded.
    RangeViolation,
    /// A pattern failed to compile, or a string failed to match one.
    PatternError,
    /// A compound schema value has an internally malformed shape.
    SchemaShapeError,
    /// No branch of an ANY group passed, or an ALL branch failed.
    CompositionFailure,
}

impl FailureKind {
    /// Wire token for this failure kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "wrongValue",
            Self::RangeViolation => "rangeViolation",
            Self::PatternError => "patternError",
            Self::SchemaShapeError => "schemaShape",
            Self::CompositionFailure => "composition",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated rule: the offending value, what kind of rule it broke,
/// what was expected, and an optional human-readable elaboration.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub value: Value,
    pub kind: FailureKind,
    pub expected: String,
    pub message: Option<String>,
}

impl Failure {
    pub fn new(value: &Value, kind: FailureKind, expected: impl Into<String>) -> Self {
        Self {
            value: value.clone(),
            kind,
            expected: expected.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] expected {}", self.kind, self.expected)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

/// Ordered sink for [`Failure`] records, owned by one validation run.
///
/// Constraints receive the log as `&mut` and push a record for every rule
/// they fail. The log never outlives its run and is never shared between
/// independent validator instances.
#[derive(Debug, Default)]
pub struct FailureLog {
    failures: Vec<Failure>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// All records in arrival order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn into_inner(self) -> Vec<Failure> {
        self.failures
    }

    /// Absorb another log's records, preserving arrival order.
    pub fn merge(&mut self, other: FailureLog) {
        self.failures.extend(other.failures);
    }
}

/// Fail-fast errors raised while authoring or meta-validating a schema
/// document, or while resolving constraint kinds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("keyword '{keyword}' expects {expected}, got {actual}")]
    TypeMismatch {
        keyword: String,
        expected: String,
        actual: String,
    },

    #[error("keyword '{keyword}': {message}")]
    RangeViolation { keyword: String, message: String },

    #[error("invalid pattern '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    #[error("keyword '{keyword}': {message}")]
    SchemaShapeError { keyword: String, message: String },

    #[error("unknown constraint kind '{kind}'")]
    ConfigurationError { kind: String },

    #[error("unrecognized schema keyword '{name}'")]
    UnknownKeyword { name: String },

    #[error("schema keyword '{keyword}' failed meta-validation ({} failure(s))", failures.len())]
    InvalidSchema {
        keyword: String,
        failures: Vec<Failure>,
    },
}
