//! Keyword, primitive-type, and format enumerations.
//!
//! The keyword set is closed: [`Keyword`] replaces the string-keyed
//! dispatch of a dynamic schema container with an explicit enum, so every
//! recognized keyword is spelled out once here and matched exhaustively
//! everywhere else.

use serde_json::Value;

use crate::error::SchemaError;

/// Every schema keyword the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Title,
    Description,
    MultipleOf,
    Maximum,
    ExclusiveMaximum,
    Minimum,
    ExclusiveMinimum,
    MinLength,
    MaxLength,
    Pattern,
    AdditionalItems,
    Items,
    MaxItems,
    MinItems,
    UniqueItems,
    Required,
    AdditionalProperties,
    Properties,
    PatternProperties,
    MaxProperties,
    MinProperties,
    Dependencies,
    Enum,
    Type,
    AllOf,
    AnyOf,
    OneOf,
    Not,
    Definitions,
    Format,
}

impl Keyword {
    /// All recognized keywords, in meta-validation table order.
    pub const ALL: &'static [Keyword] = &[
        Self::Title,
        Self::Description,
        Self::MultipleOf,
        Self::Maximum,
        Self::ExclusiveMaximum,
        Self::Minimum,
        Self::ExclusiveMinimum,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::AdditionalItems,
        Self::Items,
        Self::MaxItems,
        Self::MinItems,
        Self::UniqueItems,
        Self::Required,
        Self::AdditionalProperties,
        Self::Properties,
        Self::PatternProperties,
        Self::MaxProperties,
        Self::MinProperties,
        Self::Dependencies,
        Self::Enum,
        Self::Type,
        Self::AllOf,
        Self::AnyOf,
        Self::OneOf,
        Self::Not,
        Self::Definitions,
        Self::Format,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::MultipleOf => "multipleOf",
            Self::Maximum => "maximum",
            Self::ExclusiveMaximum => "exclusiveMaximum",
            Self::Minimum => "minimum",
            Self::ExclusiveMinimum => "exclusiveMinimum",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::AdditionalItems => "additionalItems",
            Self::Items => "items",
            Self::MaxItems => "maxItems",
            Self::MinItems => "minItems",
            Self::UniqueItems => "uniqueItems",
            Self::Required => "required",
            Self::AdditionalProperties => "additionalProperties",
            Self::Properties => "properties",
            Self::PatternProperties => "patternProperties",
            Self::MaxProperties => "maxProperties",
            Self::MinProperties => "minProperties",
            Self::Dependencies => "dependencies",
            Self::Enum => "enum",
            Self::Type => "type",
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
            Self::Not => "not",
            Self::Definitions => "definitions",
            Self::Format => "format",
        }
    }

    /// Resolve a keyword by its schema-document spelling.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownKeyword`] for any name outside the
    /// recognized set.
    pub fn from_name(name: &str) -> Result<Self, SchemaError> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| SchemaError::UnknownKeyword {
                name: name.to_string(),
            })
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven JSON primitive type names a `type` keyword may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Number,
    Null,
    Object,
    String,
}

impl PrimitiveType {
    pub const ALL: &'static [PrimitiveType] = &[
        Self::Array,
        Self::Boolean,
        Self::Integer,
        Self::Number,
        Self::Null,
        Self::Object,
        Self::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Null => "null",
            Self::Object => "object",
            Self::String => "string",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Does the value inhabit this primitive type?
    ///
    /// `integer` accepts any number with a zero fractional part; `number`
    /// accepts integers as well.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Array => value.is_array(),
            Self::Boolean => value.is_boolean(),
            Self::Integer => value.as_f64().map(|n| n.fract() == 0.0).unwrap_or(false),
            Self::Number => value.is_number(),
            Self::Null => value.is_null(),
            Self::Object => value.is_object(),
            Self::String => value.is_string(),
        }
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approved values for the `format` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uri,
}

impl Format {
    pub const ALL: &'static [Format] = &[
        Self::DateTime,
        Self::Email,
        Self::Hostname,
        Self::Ipv4,
        Self::Ipv6,
        Self::Uri,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::Email => "email",
            Self::Hostname => "hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Uri => "uri",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// Comma-separated allowed set, used in shape-error messages.
    pub fn allowed_set() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
