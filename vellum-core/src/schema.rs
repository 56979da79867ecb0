//! Parsed schema specification types
//!
//! A `SchemaSpecification` is the authoritative content of one schema
//! version: the registry persists it verbatim, and UI forms render it.
//! Field order is declaration order and is semantically meaningful for
//! display and diffing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// CATEGORIES
// ============================================================================

/// The six kinds of schema document the registry manages.
///
/// The category determines the first keyword of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Command,
    Data,
    Document,
    Envelope,
    Event,
    Query,
}

impl Category {
    /// Every category, in the fixed alphabetical order diagnostics use.
    pub const ALL: [Category; 6] = [
        Category::Command,
        Category::Data,
        Category::Document,
        Category::Envelope,
        Category::Event,
        Category::Query,
    ];

    /// The DSL keyword that introduces a schema of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Command => "command",
            Category::Data => "data",
            Category::Document => "document",
            Category::Envelope => "envelope",
            Category::Event => "event",
            Category::Query => "query",
        }
    }

    /// Look up a category by its DSL keyword. Whole-word, case-sensitive.
    pub fn from_keyword(word: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == word)
    }

    /// The keyword list used in diagnostics:
    /// `command, data, document, envelope, event, query`.
    pub fn keyword_list() -> String {
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no schema category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown schema category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_keyword(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// TYPE REFERENCES
// ============================================================================

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Int,
    Boolean,
}

impl PrimitiveType {
    /// The DSL keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Boolean => "boolean",
        }
    }

    /// Look up a primitive by its DSL keyword.
    pub fn from_keyword(word: &str) -> Option<PrimitiveType> {
        match word {
            "string" => Some(PrimitiveType::String),
            "int" => Some(PrimitiveType::Int),
            "boolean" => Some(PrimitiveType::Boolean),
            _ => None,
        }
    }
}

/// Registry-reserved metadata field types that most schemas carry
/// (e.g. `type eventType`, `version schemaVersion`, `timestamp occurredOn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialType {
    Type,
    Version,
    Timestamp,
}

impl SpecialType {
    /// The DSL keyword for this reserved type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialType::Type => "type",
            SpecialType::Version => "version",
            SpecialType::Timestamp => "timestamp",
        }
    }

    /// Look up a reserved type by its DSL keyword.
    pub fn from_keyword(word: &str) -> Option<SpecialType> {
        match word {
            "type" => Some(SpecialType::Type),
            "version" => Some(SpecialType::Version),
            "timestamp" => Some(SpecialType::Timestamp),
            _ => None,
        }
    }
}

/// A field's declared type.
///
/// Arrays are one level deep in this DSL: `Array` never wraps another
/// `Array`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeReference {
    Primitive(PrimitiveType),
    Special(SpecialType),
    /// A reference to another declared data type, written
    /// `namespace.TypeName` or as a bare `TypeName`.
    #[serde(rename_all = "camelCase")]
    Qualified {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        namespace: Option<String>,
        type_name: String,
    },
    Array(Box<TypeReference>),
}

impl TypeReference {
    /// Wrap a type in the one-level array shape (`T[]`).
    pub fn array(inner: TypeReference) -> TypeReference {
        TypeReference::Array(Box::new(inner))
    }

    /// A qualified reference with an explicit namespace.
    pub fn qualified(namespace: impl Into<String>, type_name: impl Into<String>) -> TypeReference {
        TypeReference::Qualified {
            namespace: Some(namespace.into()),
            type_name: type_name.into(),
        }
    }
}

impl fmt::Display for TypeReference {
    /// Renders the type the way it is written in the DSL
    /// (`string`, `data.PersonalInfo`, `int[]`, ...).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Primitive(p) => f.write_str(p.as_str()),
            TypeReference::Special(s) => f.write_str(s.as_str()),
            TypeReference::Qualified {
                namespace: Some(namespace),
                type_name,
            } => write!(f, "{}.{}", namespace, type_name),
            TypeReference::Qualified {
                namespace: None,
                type_name,
            } => f.write_str(type_name),
            TypeReference::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}

// ============================================================================
// DEFAULT VALUES
// ============================================================================

/// A field's default value literal.
///
/// Lists are written `{ "a", "b" }` in the DSL and preserve element
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    List(Vec<DefaultValue>),
}

// ============================================================================
// SCHEMA SPECIFICATION
// ============================================================================

/// One declared member of a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub type_ref: TypeReference,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<DefaultValue>,
}

/// The parsed, validated output of one schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSpecification {
    pub category: Category,
    pub name: String,
    /// Declaration order, preserved exactly.
    pub fields: Vec<Field>,
}

// ============================================================================
// TESTS
// ============================================================================
