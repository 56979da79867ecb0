//! Error translation
//!
//! Converts raw grammar failures into the uniform diagnostics the
//! registry surfaces, and owns the friendlier rewrite for the single
//! most common authoring mistake: a wrong or misspelled leading
//! category keyword.

use crate::parser::cst::SyntaxError;
use vellum_core::{Category, ParseError};

/// Diagnostic for empty or whitespace-only input. Produced before the
/// grammar engine runs; carries no location.
pub fn empty_input() -> ParseError {
    ParseError::document("Input cannot be empty")
}

/// Translate a raw grammar failure into a positioned diagnostic.
///
/// A failure on the document's first token whose text is not a valid
/// category keyword becomes the "unknown schema type" message, keeping
/// the original span. Everything else passes through as-is.
pub fn translate(error: SyntaxError, source: &str) -> ParseError {
    if first_token_start(source) == Some(error.start) {
        let found = &source[error.start..error.end];
        if !found.is_empty() && Category::from_keyword(found).is_none() {
            return ParseError::spanned(
                format!(
                    "Invalid schema type \"{}\". Expected one of: {}",
                    found,
                    Category::keyword_list()
                ),
                error.span,
            );
        }
    }
    ParseError::spanned(error.message, error.span)
}

/// Byte offset of the document's first token: the first position past
/// leading whitespace and comments. `None` when the document holds no
/// token at all.
fn first_token_start(source: &str) -> Option<usize> {
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            ' ' | '\t' | '\r' | '\n' => {}
            '/' => match chars.peek().map(|(_, c)| *c) {
                Some('/') => {
                    for (_, c) in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            closed = true;
                            break;
                        }
                        prev = c;
                    }
                    if !closed {
                        return None;
                    }
                }
                _ => return Some(i),
            },
            _ => return Some(i),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::{Position, Span};

    fn syntax_error(start: usize, end: usize) -> SyntaxError {
        SyntaxError {
            message: "Expected schema category (command, data, document, envelope, event, query)"
                .to_string(),
            span: Span::new(Position::new(1, 1 + start as u32), Position::new(1, 1 + end as u32)),
            start,
            end,
        }
    }

    #[test]
    fn test_first_token_start_skips_whitespace_and_comments() {
        assert_eq!(first_token_start("event X { }"), Some(0));
        assert_eq!(first_token_start("  \n\tevent"), Some(4));
        assert_eq!(first_token_start("// header\nevent"), Some(10));
        assert_eq!(first_token_start("/* a */ event"), Some(8));
        assert_eq!(first_token_start("   "), None);
        assert_eq!(first_token_start("/* unterminated"), None);
        assert_eq!(first_token_start(""), None);
    }

    #[test]
    fn test_rewrites_unknown_leading_keyword() {
        let err = translate(syntax_error(0, 6), "banana Foo { }");
        assert_eq!(
            err.message,
            "Invalid schema type \"banana\". Expected one of: command, data, document, envelope, event, query"
        );
        assert!(err.location.is_some());
    }

    #[test]
    fn test_failure_past_first_token_passes_through() {
        // Failure on the schema name, not the category keyword.
        let raw = SyntaxError {
            message: "Expected schema name".to_string(),
            span: Span::new(Position::new(1, 7), Position::new(1, 8)),
            start: 6,
            end: 7,
        };
        let err = translate(raw, "event { }");
        assert_eq!(err.message, "Expected schema name");
    }

    #[test]
    fn test_valid_category_keyword_is_never_rewritten() {
        // A failure at the first token whose text IS a category keyword
        // keeps its grammar message (pathological, but pinned).
        let raw = SyntaxError {
            message: "Expected schema name".to_string(),
            span: Span::new(Position::new(1, 1), Position::new(1, 6)),
            start: 0,
            end: 5,
        };
        let err = translate(raw, "event");
        assert_eq!(err.message, "Expected schema name");
    }

    #[test]
    fn test_empty_input_has_no_location() {
        let err = empty_input();
        assert_eq!(err.message, "Input cannot be empty");
        assert!(err.location.is_none());
    }
}
