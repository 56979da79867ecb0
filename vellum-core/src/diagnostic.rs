//! Parse diagnostics and the public parse result
//!
//! These are the types the rest of the registry consumes: UI forms
//! render `errors[0].location` as an inline editor marker, and the
//! storage layer refuses to persist a result with `success: false`.

use crate::schema::SchemaSpecification;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SOURCE LOCATIONS
// ============================================================================

/// 1-based line/column position in schema source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Position {
        Position { line, column }
    }
}

/// Source region between two positions; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Span {
        Span { start, end }
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Diagnostic severity. The DSL currently produces errors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// One diagnostic produced by parsing or validation.
///
/// `location` is present whenever the failure can be attributed to a
/// source position; document-level failures (empty input, category
/// mismatch) carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<Span>,
    pub severity: Severity,
}

impl ParseError {
    /// Diagnostic attributed to a source span.
    pub fn spanned(message: impl Into<String>, location: Span) -> ParseError {
        ParseError {
            message: message.into(),
            location: Some(location),
            severity: Severity::Error,
        }
    }

    /// Document-level diagnostic with no position.
    pub fn document(message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            location: None,
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(span) => write!(
                f,
                "Parse error at line {}, column {}: {}",
                span.start.line, span.start.column, self.message
            ),
            None => write!(f, "Parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// PARSE RESULT
// ============================================================================

/// Outcome of one parse call.
///
/// Exactly one of the two shapes: success with a specification and no
/// errors, or failure with one diagnostic and no specification. A
/// failed parse never yields a partially-populated specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub specification: Option<SchemaSpecification>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Successful parse carrying the specification.
    pub fn success(specification: SchemaSpecification) -> ParseResult {
        ParseResult {
            success: true,
            specification: Some(specification),
            errors: Vec::new(),
        }
    }

    /// Failed parse carrying a single diagnostic.
    pub fn failure(error: ParseError) -> ParseResult {
        ParseResult {
            success: false,
            specification: None,
            errors: vec![error],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
