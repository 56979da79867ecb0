//! Vellum Schema DSL - Specification Language Parser
//!
//! This crate turns schema-specification text into a validated
//! `SchemaSpecification` or a single positioned diagnostic. It is a
//! pure library: no I/O, no shared state, safe to call from any number
//! of concurrent callers.
//!
//! Architecture:
//! ```text
//! Schema Source (DSL text)
//!     ↓
//! Lexer (tokens with spans)
//!     ↓
//! Parser (grammar engine → parse tree)
//!     ↓
//! Converter (parse tree → SchemaSpecification)
//!     ↓
//! Category Validator (expected-category check)
//!     ↓
//! ParseResult (success + specification | failure + one diagnostic)
//! ```
//!
//! Example:
//! ```
//! use vellum_dsl::{parse, Category};
//!
//! let result = parse("event UserRegistered { string email }", Some(Category::Event));
//! assert!(result.success);
//! assert_eq!(result.specification.unwrap().fields.len(), 1);
//! ```

pub mod convert;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod validation;

// Re-export key types for convenience
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Parser, SyntaxError, MAX_LIST_DEPTH};
pub use vellum_core::{
    Category, DefaultValue, Field, ParseError, ParseResult, Position, PrimitiveType,
    SchemaSpecification, Severity, Span, SpecialType, TypeReference,
};

/// Parse one schema document.
///
/// Sequences the whole pipeline: empty-input check, lexing, grammar
/// engine, parse-tree conversion, and (when `expected_category` is
/// given) the category check. Every call is a single atomic attempt
/// producing either success with a specification or failure with
/// exactly one diagnostic; no internal error escapes as a panic.
pub fn parse(input: &str, expected_category: Option<Category>) -> ParseResult {
    if input.trim().is_empty() {
        return ParseResult::failure(diagnostics::empty_input());
    }

    let tokens = Lexer::new(input).tokenize();
    let node = match Parser::new(tokens).parse_schema() {
        Ok(node) => node,
        Err(err) => return ParseResult::failure(diagnostics::translate(err, input)),
    };

    let specification = convert::to_specification(node);

    if let Some(expected) = expected_category {
        if let Some(error) = validation::check_category(&specification, expected) {
            return ParseResult::failure(error);
        }
    }

    ParseResult::success(specification)
}

/// Parse and return only the diagnostics, discarding the
/// specification. UI forms call this on every keystroke.
pub fn validate(input: &str, expected_category: Option<Category>) -> Vec<ParseError> {
    parse(input, expected_category).errors
}
