//! Schema document model.
//!
//! A [`SchemaDocument`] is a keyword-keyed container representing one
//! schema object, root or nested. Assignment is atomic: a value either
//! passes its keyword's rule and is stored, or the error is returned and
//! no partial state remains.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SchemaError;
use crate::keyword::{Format, Keyword};
use crate::meta;
use crate::pattern;
use crate::util;

#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    entries: IndexMap<Keyword, Value>,
    root: bool,
}

impl SchemaDocument {
    /// An empty root document.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            root: true,
        }
    }

    /// An empty nested (embedded) document. Identity bookkeeping only;
    /// behavior is identical to a root document.
    pub fn nested() -> Self {
        Self {
            entries: IndexMap::new(),
            root: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Build a root document from a parsed object tree by assigning every
    /// member.
    ///
    /// # Errors
    ///
    /// [`SchemaError::TypeMismatch`] when the value is not an object,
    /// [`SchemaError::UnknownKeyword`] for unrecognized members, or any
    /// per-keyword assignment error.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let mut document = Self::new();
        document.assign_members(value)?;
        Ok(document)
    }

    /// [`from_value`](Self::from_value) for an embedded sub-schema.
    pub fn nested_from_value(value: &Value) -> Result<Self, SchemaError> {
        let mut document = Self::nested();
        document.assign_members(value)?;
        Ok(document)
    }

    fn assign_members(&mut self, value: &Value) -> Result<(), SchemaError> {
        let members = value
            .as_object()
            .ok_or_else(|| SchemaError::TypeMismatch {
                keyword: "schema".to_string(),
                expected: "object".to_string(),
                actual: util::type_name(value).to_string(),
            })?;
        for (name, member) in members {
            self.set(Keyword::from_name(name)?, member.clone())?;
        }
        Ok(())
    }

    pub fn get(&self, keyword: Keyword) -> Option<&Value> {
        self.entries.get(&keyword)
    }

    pub fn has(&self, keyword: Keyword) -> bool {
        self.entries.contains_key(&keyword)
    }

    pub fn remove(&mut self, keyword: Keyword) -> Option<Value> {
        self.entries.shift_remove(&keyword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Present keywords with their stored values, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (Keyword, &Value)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Assign a keyword. Dispatches on the keyword's typed rule; scalar
    /// coercions (`title`, boolean keywords) store the coerced value.
    pub fn set(&mut self, keyword: Keyword, value: Value) -> Result<(), SchemaError> {
        let stored = Self::checked(keyword, value)?;
        self.entries.insert(keyword, stored);
        Ok(())
    }

    /// The keyword rule table: validates (and possibly coerces) one value.
    fn checked(keyword: Keyword, value: Value) -> Result<Value, SchemaError> {
        match keyword {
            Keyword::Title | Keyword::Description => match util::coerce_to_string(&value) {
                Some(s) => Ok(Value::String(s)),
                None => Err(type_mismatch(keyword, "string", &value)),
            },

            Keyword::MultipleOf => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| type_mismatch(keyword, "number", &value))?;
                if n.fract() != 0.0 {
                    return Err(type_mismatch(keyword, "integer", &value));
                }
                if n <= 0.0 {
                    return Err(SchemaError::RangeViolation {
                        keyword: keyword.as_str().to_string(),
                        message: format!("must be greater than 0, got {n}"),
                    });
                }
                Ok(value)
            }

            Keyword::Maximum | Keyword::Minimum => {
                if !value.is_number() {
                    return Err(type_mismatch(keyword, "number", &value));
                }
                Ok(value)
            }

            Keyword::ExclusiveMaximum | Keyword::ExclusiveMinimum | Keyword::UniqueItems => {
                Ok(Value::Bool(util::truthiness(&value)))
            }

            Keyword::MinLength
            | Keyword::MaxLength
            | Keyword::MaxItems
            | Keyword::MinItems
            | Keyword::MaxProperties
            | Keyword::MinProperties => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| type_mismatch(keyword, "number", &value))?;
                if n.fract() != 0.0 {
                    return Err(type_mismatch(keyword, "integer", &value));
                }
                if n < 0.0 {
                    return Err(SchemaError::RangeViolation {
                        keyword: keyword.as_str().to_string(),
                        message: format!("must be at least 0, got {n}"),
                    });
                }
                Ok(value)
            }

            Keyword::Pattern => {
                let s = value
                    .as_str()
                    .ok_or_else(|| type_mismatch(keyword, "string", &value))?;
                pattern::compile(s)?;
                Ok(value)
            }

            Keyword::AdditionalItems | Keyword::AdditionalProperties => match &value {
                Value::Bool(_) => Ok(value),
                Value::Object(_) => {
                    meta::validate_embedded(&value)?;
                    Ok(value)
                }
                other => Err(type_mismatch(keyword, "boolean or schema object", other)),
            },

            Keyword::Items => {
                if !value.is_object() && !value.is_array() {
                    return Err(type_mismatch(keyword, "object or array", &value));
                }
                Ok(value)
            }

            Keyword::Properties
            | Keyword::PatternProperties
            | Keyword::Definitions => {
                if !value.is_object() {
                    return Err(type_mismatch(keyword, "object", &value));
                }
                Ok(value)
            }

            Keyword::Required => {
                let names = value
                    .as_array()
                    .ok_or_else(|| type_mismatch(keyword, "array", &value))?;
                for name in names {
                    if !name.is_string() {
                        return Err(type_mismatch(keyword, "string", name));
                    }
                }
                if names.is_empty() {
                    return Err(shape_error(keyword, "must name at least one property"));
                }
                if !util::all_unique(names) {
                    return Err(shape_error(keyword, "property names must be unique"));
                }
                Ok(value)
            }

            Keyword::Dependencies => {
                let members = value
                    .as_object()
                    .ok_or_else(|| type_mismatch(keyword, "object", &value))?;
                for (name, member) in members {
                    match member {
                        Value::Object(_) => meta::validate_embedded(member)?,
                        Value::Array(entries) => {
                            if entries.is_empty()
                                || !entries.iter().all(|e| e.is_string())
                                || !util::all_unique(entries)
                            {
                                return Err(shape_error(
                                    keyword,
                                    format!(
                                        "dependency '{name}' must be a non-empty array of unique property names"
                                    ),
                                ));
                            }
                        }
                        other => {
                            return Err(shape_error(
                                keyword,
                                format!(
                                    "dependency '{name}' must be a schema or an array of property names, got {}",
                                    util::type_name(other)
                                ),
                            ));
                        }
                    }
                }
                Ok(value)
            }

            Keyword::Enum => {
                if !value.is_array() {
                    return Err(type_mismatch(keyword, "array", &value));
                }
                Ok(value)
            }

            Keyword::Type => {
                if !value.is_string() && !value.is_array() {
                    return Err(type_mismatch(keyword, "string or array", &value));
                }
                Ok(value)
            }

            Keyword::AllOf | Keyword::AnyOf | Keyword::OneOf => {
                let branches = value
                    .as_array()
                    .ok_or_else(|| type_mismatch(keyword, "array", &value))?;
                for (i, branch) in branches.iter().enumerate() {
                    if !branch.is_object() {
                        return Err(shape_error(
                            keyword,
                            format!(
                                "element {i} must be a schema object, got {}",
                                util::type_name(branch)
                            ),
                        ));
                    }
                }
                Ok(value)
            }

            Keyword::Not => {
                if !value.is_object() {
                    return Err(type_mismatch(keyword, "object", &value));
                }
                Ok(value)
            }

            Keyword::Format => {
                let s = value
                    .as_str()
                    .ok_or_else(|| type_mismatch(keyword, "string", &value))?;
                if Format::from_name(s).is_none() {
                    return Err(shape_error(
                        keyword,
                        format!("unknown format '{s}', allowed: {}", Format::allowed_set()),
                    ));
                }
                Ok(value)
            }
        }
    }
}

fn type_mismatch(keyword: Keyword, expected: &str, actual: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        keyword: keyword.as_str().to_string(),
        expected: expected.to_string(),
        actual: util::type_name(actual).to_string(),
    }
}

fn shape_error(keyword: Keyword, message: impl Into<String>) -> SchemaError {
    SchemaError::SchemaShapeError {
        keyword: keyword.as_str().to_string(),
        message: message.into(),
    }
}
