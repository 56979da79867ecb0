//! Recursive-descent grammar engine
//!
//! Recognizes well-formed schema documents and rejects everything else
//! with the position of the first token no rule could match:
//!
//! ```text
//! schema       := category identifier '{' fieldList '}'
//! fieldList    := field*
//! field        := typeRef identifier ('=' defaultValue)?
//! typeRef      := identifier ('.' identifier)? ('[' ']')?
//! defaultValue := string | integer | boolean | '{' values? '}'
//! ```
//!
//! Whitespace and comments are consumed by the lexer; the parser
//! fails fast, so the deepest rule to reject a token determines the
//! reported position.

use super::cst::*;
use crate::lexer::{Token, TokenKind};
use vellum_core::Category;

/// Maximum nesting depth for list literals in default values.
///
/// Deeper input is rejected with a positioned error instead of
/// recursing toward a stack overflow; human-authored schemas sit far
/// below this.
pub const MAX_LIST_DEPTH: usize = 32;

/// Parser for the schema DSL.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from a vector of tokens.
    /// The token stream must end with `Eof`, as `Lexer::tokenize` guarantees.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse one schema document, consuming the entire token stream.
    pub fn parse_schema(&mut self) -> Result<SchemaNode, SyntaxError> {
        // Surface the first lexer error before any grammar rule runs.
        if let Some(token) = self
            .tokens
            .iter()
            .find(|t| matches!(t.kind, TokenKind::Error(_)))
        {
            let message = match &token.kind {
                TokenKind::Error(msg) => msg.clone(),
                _ => "Lexer error".to_string(),
            };
            return Err(SyntaxError {
                message,
                span: token.span,
                start: token.start,
                end: token.end,
            });
        }

        let category = self.parse_category()?;
        let name = self.expect_identifier("Expected schema name")?;
        self.expect(TokenKind::LBrace, "Expected '{'")?;

        let mut fields = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            fields.push(self.parse_field()?);
        }

        self.expect(TokenKind::RBrace, "Expected '}'")?;

        // Only whitespace and comments may follow the closing brace.
        if !self.is_at_end() {
            return Err(self.error("Expected end of input"));
        }

        Ok(SchemaNode {
            category,
            name,
            fields,
        })
    }

    /// Parse the leading category keyword.
    fn parse_category(&mut self) -> Result<Category, SyntaxError> {
        if let TokenKind::Identifier(word) = &self.current().kind {
            if let Some(category) = Category::from_keyword(word) {
                self.advance();
                return Ok(category);
            }
        }
        Err(self.error(format!(
            "Expected schema category ({})",
            Category::keyword_list()
        )))
    }

    /// Parse a field declaration.
    fn parse_field(&mut self) -> Result<FieldNode, SyntaxError> {
        let type_ref = self.parse_type_ref()?;
        let name = self.expect_identifier("Expected field name")?;

        let default = if self.check(&TokenKind::Eq) {
            self.advance();
            Some(self.parse_literal(0)?)
        } else {
            None
        };

        Ok(FieldNode {
            type_ref,
            name,
            default,
        })
    }

    /// Parse a type reference: `name`, `namespace.Name`, with an
    /// optional `[]` suffix.
    fn parse_type_ref(&mut self) -> Result<TypeNode, SyntaxError> {
        let head = self.expect_identifier("Expected type reference")?;

        let member = if self.check(&TokenKind::Dot) {
            self.advance();
            let member = self.expect_identifier("Expected type name after '.'")?;
            // qualifiedName admits a single namespace segment
            if self.check(&TokenKind::Dot) {
                return Err(self.error("Qualified type names take a single namespace segment"));
            }
            Some(member)
        } else {
            None
        };

        let is_array = if self.check(&TokenKind::LBracket) {
            self.advance();
            self.expect(TokenKind::RBracket, "Expected ']' after '['")?;
            true
        } else {
            false
        };

        Ok(TypeNode {
            head,
            member,
            is_array,
        })
    }

    /// Parse a default-value literal.
    fn parse_literal(&mut self, depth: usize) -> Result<LiteralNode, SyntaxError> {
        match &self.current().kind {
            TokenKind::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(LiteralNode::String(s))
            }
            TokenKind::Integer(n) => {
                let n = *n;
                self.advance();
                Ok(LiteralNode::Integer(n))
            }
            TokenKind::Identifier(word) if word == "true" => {
                self.advance();
                Ok(LiteralNode::Boolean(true))
            }
            TokenKind::Identifier(word) if word == "false" => {
                self.advance();
                Ok(LiteralNode::Boolean(false))
            }
            TokenKind::LBrace => self.parse_list(depth),
            _ => Err(self.error("Expected default value (string, number, boolean, or list)")),
        }
    }

    /// Parse a list literal `{ v, v, ... }`. Elements are
    /// comma-separated; the grammar admits no trailing comma.
    fn parse_list(&mut self, depth: usize) -> Result<LiteralNode, SyntaxError> {
        if depth >= MAX_LIST_DEPTH {
            return Err(self.error("List literals nest too deeply"));
        }

        self.expect(TokenKind::LBrace, "Expected '{'")?;

        let mut items = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            items.push(self.parse_literal(depth + 1)?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                items.push(self.parse_literal(depth + 1)?);
            }
        }

        self.expect(TokenKind::RBrace, "Expected ',' or '}' in list")?;
        Ok(LiteralNode::List(items))
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), SyntaxError> {
        if self.check(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn expect_identifier(&mut self, message: &str) -> Result<String, SyntaxError> {
        match &self.current().kind {
            TokenKind::Identifier(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.error(message)),
        }
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        let token = self.current();
        SyntaxError {
            message: message.into(),
            span: token.span,
            start: token.start,
            end: token.end,
        }
    }
}
