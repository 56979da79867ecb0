//! Parse tree node types
//!
//! The grammar engine emits these raw nodes; they mirror the grammar
//! productions one-to-one. `convert` flattens them into the public
//! `SchemaSpecification`, so consumers can pattern-match a closed set
//! of variants instead of probing an untyped tree.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vellum_core::{Category, Span};

/// Root node: one schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Already checked against the six category keywords by the
    /// grammar's `category` rule.
    pub category: Category,
    pub name: String,
    pub fields: Vec<FieldNode>,
}

/// One field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
    pub type_ref: TypeNode,
    pub name: String,
    pub default: Option<LiteralNode>,
}

/// A type reference as written: a possibly-dotted name plus the
/// optional `[]` suffix. Classification into primitive/special/
/// qualified happens during conversion, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeNode {
    /// The identifier before the dot (or the whole name if undotted).
    pub head: String,
    /// The identifier after the dot, if any.
    pub member: Option<String>,
    pub is_array: bool,
}

/// A literal in default-value position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralNode {
    String(String),
    Integer(i64),
    Boolean(bool),
    List(Vec<LiteralNode>),
}

/// Raw grammar failure: the first point at which no rule matched.
///
/// Translated into the public `ParseError` by `diagnostics`; the byte
/// range lets the translator slice the offending token text out of the
/// source.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at line {}, column {}", .span.start.line, .span.start.column)]
pub struct SyntaxError {
    pub message: String,
    /// 1-based span of the offending token.
    pub span: Span,
    /// Byte range of the offending token in the source.
    pub start: usize,
    pub end: usize,
}
