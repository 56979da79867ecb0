//! Fuzz test for the schema DSL lexer
//!
//! Feeds arbitrary byte sequences to the lexer to find panics,
//! infinite loops, and memory safety issues.
//!
//! Run with: cargo +nightly fuzz run lexer_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use vellum_dsl::{Lexer, TokenKind};

fuzz_target!(|data: &[u8]| {
    // The lexer should handle any valid UTF-8 string without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        let tokens = Lexer::new(input).tokenize();

        // Tokenization always produces at least, and terminates with, Eof
        assert!(!tokens.is_empty(), "Tokenization should produce at least Eof");
        assert_eq!(
            tokens.last().unwrap().kind,
            TokenKind::Eof,
            "Last token should always be Eof"
        );

        // Byte ranges and spans stay ordered and 1-based
        for token in &tokens {
            assert!(token.start <= token.end, "Byte range start should be <= end");
            assert!(token.span.start.line >= 1, "Line numbers should be >= 1");
            assert!(token.span.start.column >= 1, "Column numbers should be >= 1");
            assert!(
                token.span.end.line >= token.span.start.line,
                "Spans should not end before they start"
            );
        }
    }
});
