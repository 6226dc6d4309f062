//! Constraint-based JSON Schema engine.
//!
//! # Overview
//!
//! The crate splits schema handling into two passes over two surfaces.
//! A [`SchemaDocument`] holds keyword/value entries and rejects malformed
//! values at assignment time; [`SchemaValidator`] then meta-validates the
//! whole document by running each stored value through the same constraint
//! machinery later used on data. [`InstanceValidator`] applies a valid
//! document to a data instance, accumulating [`Failure`] records instead
//! of stopping at the first violation.
//!
//! # Example
//!
//! ```
//! use json_schema::{InstanceValidator, SchemaDocument, SchemaValidator};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": {"name": {"type": "string"}}
//! });
//! let document = SchemaDocument::from_value(&schema).unwrap();
//! SchemaValidator::validate(&document).unwrap();
//!
//! let instance = json!({"name": "Ada"});
//! let mut validator = InstanceValidator::new(&document, &instance);
//! assert!(validator.validate());
//! ```

pub mod constraint;
pub mod document;
pub mod error;
pub mod factory;
pub mod format;
pub mod group;
pub mod instance;
pub mod keyword;
pub mod meta;
pub mod pattern;
pub mod util;

// Re-export the core public API
pub use constraint::{
    ArrConstraint, ArrRules, BoolConstraint, Constraint, GenericConstraint, NumConstraint,
    NumRules, ObjConstraint, ObjRules, StrConstraint, StrRules,
};
pub use document::SchemaDocument;
pub use error::{Failure, FailureKind, FailureLog, SchemaError};
pub use factory::{ConstraintKind, RuleSet};
pub use group::{ConstraintGroup, Strictness};
pub use instance::InstanceValidator;
pub use keyword::{Format, Keyword, PrimitiveType};
pub use meta::SchemaValidator;
