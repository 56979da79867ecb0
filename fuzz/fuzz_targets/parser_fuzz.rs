//! Fuzz test for the schema DSL parser
//!
//! Feeds arbitrary byte sequences through the full parse pipeline to
//! find panics, infinite loops, and malformed diagnostics.
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use vellum_dsl::{parse, Lexer, Parser};

fuzz_target!(|data: &[u8]| {
    // The parser should handle any valid UTF-8 string without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        let result = parse(input, None);

        if result.success {
            assert!(result.specification.is_some(), "Success must carry a specification");
            assert!(result.errors.is_empty(), "Success must carry no errors");
        } else {
            assert!(result.specification.is_none(), "Failure must not carry a specification");
            assert_eq!(result.errors.len(), 1, "Failure carries exactly one diagnostic");

            let err = &result.errors[0];
            assert!(!err.message.is_empty(), "Error message should not be empty");
            if let Some(location) = err.location {
                assert!(location.start.line >= 1, "Error line should be >= 1");
                assert!(location.start.column >= 1, "Error column should be >= 1");
            }
        }

        // Also test the lexer -> grammar-engine pipeline separately;
        // the result doesn't matter, it just shouldn't panic.
        let tokens = Lexer::new(input).tokenize();
        let _ = Parser::new(tokens).parse_schema();
    }
});
