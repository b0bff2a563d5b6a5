//! Declaration parsing.
//!
//! Handles the four top-level declaration forms:
//!
//! ```text
//! declaration := var_decl | func_decl | struct_decl | assert_decl
//! var_decl    := type binding ("," binding)* ";"
//! binding     := ID ("[" expr? "]")? ("=" (array_init | assign))?
//! func_decl   := type ID "(" (type ID ("," type ID)*)? ")" (";" | block)
//! struct_decl := "struct" ID "{" var_decl* "}" ";"
//! assert_decl := "assert" "(" assign ("," STRING)? ")" ";"
//! ```
//!
//! A variable and a function declaration both begin with `type ID`, so
//! dispatch looks two tokens ahead: a `(` there means function. Binding
//! initializers and the assert condition parse at assignment level so that
//! `,` keeps its separator role.

use super::ast::{AssertDecl, Binding, Decl, FuncDecl, Param, StructDecl, Type, VarDecl};
use super::parse::{ParseError, Parser};
use super::token::TokenKind;

impl Parser {
    /// Parse one top-level declaration.
    pub(crate) fn parse_declaration(&mut self) -> Result<Decl, ParseError> {
        match self.peek_kind() {
            kind if kind.is_type_keyword() || kind == TokenKind::Ident => {
                if self.peek_ahead(2).map(|token| token.kind) == Some(TokenKind::LParen) {
                    Ok(Decl::Func(self.parse_func_decl()?))
                } else {
                    Ok(Decl::Var(self.parse_var_decl()?))
                }
            }
            TokenKind::KwStruct => {
                self.advance();
                Ok(Decl::Struct(self.parse_struct_decl()?))
            }
            TokenKind::KwAssert => {
                self.advance();
                Ok(Decl::Assert(self.parse_assert_decl()?))
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse a type name: a type keyword or a struct-type identifier.
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let ty = match self.peek_kind() {
            TokenKind::KwInt => Type::Int,
            TokenKind::KwFloat => Type::Float,
            TokenKind::KwChar => Type::Char,
            TokenKind::KwBool => Type::Bool,
            TokenKind::KwVoid => Type::Void,
            TokenKind::Ident => Type::Named(self.peek().text.clone()),
            _ => return Err(self.expected("a type name")),
        };
        self.advance();
        Ok(ty)
    }

    /// Parse a variable declaration: `type binding, binding, ...;`
    pub(crate) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let ty = self.parse_type()?;

        let mut bindings = Vec::new();
        loop {
            bindings.push(self.parse_binding()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::Semicolon, "';' after variable declaration")?;

        Ok(VarDecl { ty, bindings })
    }

    /// Parse one binding: a name, an optional array declarator, and an
    /// optional initializer.
    fn parse_binding(&mut self) -> Result<Binding, ParseError> {
        let name = self.expect_identifier("a variable name")?;

        let mut size = None;
        if self.eat(TokenKind::LBracket) {
            if !self.check(TokenKind::RBracket) {
                size = Some(self.parse_expression()?);
            }
            self.expect(TokenKind::RBracket, "']' after array size")?;
        }

        let init = if self.eat(TokenKind::Assign) {
            // A brace opens an aggregate initializer; anything else is a
            // single value at assignment level, leaving ',' to separate
            // bindings.
            if self.check(TokenKind::LBrace) {
                Some(self.parse_array_init()?)
            } else {
                Some(self.parse_assignment()?)
            }
        } else {
            None
        };

        Ok(Binding { name, size, init })
    }

    /// Parse a function declaration. A `;` after the parameter list makes
    /// it a prototype; otherwise a block body is required.
    pub(crate) fn parse_func_decl(&mut self) -> Result<FuncDecl, ParseError> {
        let return_type = self.parse_type()?;
        let name = self.expect_identifier("a function name")?;

        self.expect(TokenKind::LParen, "'(' after function name")?;
        let params = self.parse_param_list()?;
        self.expect(TokenKind::RParen, "')' after parameters")?;

        if self.eat(TokenKind::Semicolon) {
            return Ok(FuncDecl {
                return_type,
                name,
                params,
                body: None,
            });
        }

        let body = self.parse_block()?;
        Ok(FuncDecl {
            return_type,
            name,
            params,
            body: Some(body),
        })
    }

    /// Parse a comma-separated `(type, name)` parameter list, up to but not
    /// including the closing paren.
    fn parse_param_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let ty = self.parse_type()?;
            let name = self.expect_identifier("a parameter name")?;
            params.push(Param { ty, name });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse a struct declaration (the `struct` keyword is already
    /// consumed): `Name { field-var-decls } ;`
    pub(crate) fn parse_struct_decl(&mut self) -> Result<StructDecl, ParseError> {
        let name = self.expect_identifier("a struct name")?;

        self.expect(TokenKind::LBrace, "'{' after struct name")?;

        let mut fields = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            fields.push(self.parse_var_decl()?);
        }

        self.expect(TokenKind::RBrace, "'}' after struct fields")?;
        self.expect(TokenKind::Semicolon, "';' after struct declaration")?;

        Ok(StructDecl { name, fields })
    }

    /// Parse an assert declaration (the `assert` keyword is already
    /// consumed): `( condition [, "message"] ) ;`
    pub(crate) fn parse_assert_decl(&mut self) -> Result<AssertDecl, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'assert'")?;

        let condition = self.parse_assignment()?;

        let message = if self.eat(TokenKind::Comma) {
            if !self.check(TokenKind::StrLit) {
                return Err(self.expected("a string literal after ',' in assert"));
            }
            Some(self.advance().text.clone())
        } else {
            None
        };

        self.expect(TokenKind::RParen, "')' after assert condition")?;
        self.expect(TokenKind::Semicolon, "';' after assert declaration")?;

        Ok(AssertDecl { condition, message })
    }
}
