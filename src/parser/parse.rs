//! Main parser coordinator.
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, cursor helpers, and the top-level parse
//! loop. Grammar productions are split across sibling modules as
//! `impl Parser` extension blocks —
//! - `declarations`: variables, functions, structs, asserts
//! - `statements`: control flow, jumps, blocks, I/O statements
//! - `expressions`: precedence climbing over the expression grammar
//!
//! Parsing is plain recursive descent. The token position is the only
//! mutable parser state, lookahead is bounded (two tokens), and the first
//! grammar violation unwinds out of every production as a [`ParseError`] —
//! there is no recovery and no partial tree.

use super::ast::Program;
use super::lexer::{tokenize, LexError};
use super::token::{Position, Token, TokenKind};
use thiserror::Error;

/// Parser error type.
///
/// Every variant carries the offending lexeme (inside `found`) and the
/// position it was seen at.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed before parsing could start.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A specific token or category was required and something else was
    /// found.
    #[error("expected {expected}, found {found} at {pos}")]
    Expected {
        expected: String,
        found: String,
        pos: Position,
    },

    /// No production matches the current token.
    #[error("unexpected {found} at {pos}")]
    Unexpected { found: String, pos: Position },

    /// Numeric literal text that does not convert to a value.
    #[error("invalid numeric literal '{text}' at {pos}")]
    InvalidLiteral { text: String, pos: Position },
}

/// Recursive descent parser over an immutable token stream.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Build a parser over an already-lexed token stream.
    ///
    /// The stream is normalized to end with exactly one `Eof` token, so the
    /// cursor helpers never run off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(token) if token.kind == TokenKind::Eof) {
            let pos = tokens
                .last()
                .map(|token| token.pos)
                .unwrap_or_else(|| Position::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, "", pos));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Lex `source` and build a parser over the resulting tokens.
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Ok(Self::new(tokenize(source)?))
    }

    /// Parse the entire program: top-level declarations until end of input.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            program.decls.push(self.parse_declaration()?);
        }

        Ok(program)
    }

    // ===== Cursor helpers =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    /// Consume the current token (never past `Eof`) and return it.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn current_position(&self) -> Position {
        self.peek().pos
    }

    /// Consume a token of the given kind or fail with "expected ...".
    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.expected(expected))
        }
    }

    /// Consume an identifier token and return its text.
    pub(crate) fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().text.clone())
        } else {
            Err(self.expected(expected))
        }
    }

    pub(crate) fn expected(&self, expected: &str) -> ParseError {
        ParseError::Expected {
            expected: expected.to_string(),
            found: self.peek().to_string(),
            pos: self.current_position(),
        }
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        ParseError::Unexpected {
            found: self.peek().to_string(),
            pos: self.current_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Decl, Stmt, Type};

    #[test]
    fn test_parse_simple_function() {
        let mut parser = Parser::from_source("int main() { return 0; }").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.decls.len(), 1);
        match &program.decls[0] {
            Decl::Func(func) => {
                assert_eq!(func.name, "main");
                assert_eq!(func.return_type, Type::Int);
                assert!(func.params.is_empty());
                let body = func.body.as_ref().unwrap();
                assert_eq!(body.len(), 1);
                assert!(matches!(body[0], Stmt::Return(Some(_))));
            }
            other => panic!("expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_program() {
        let mut parser = Parser::from_source("").unwrap();
        let program = parser.parse_program().unwrap();
        assert!(program.decls.is_empty());
    }

    #[test]
    fn test_lex_error_converts() {
        let err = Parser::from_source("int x = `;").unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
    }

    #[test]
    fn test_first_error_aborts() {
        // Nothing after the first violation is parsed; no partial tree.
        let mut parser = Parser::from_source("int x int y;").unwrap();
        assert!(parser.parse_program().is_err());
    }

    #[test]
    fn test_stray_token_at_top_level() {
        let mut parser = Parser::from_source("return 0;").unwrap();
        let err = parser.parse_program().unwrap_err();
        assert!(matches!(err, ParseError::Unexpected { .. }));
    }
}
