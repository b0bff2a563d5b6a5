//! Statement parsing.
//!
//! Keyword-led statements route to dedicated productions; a brace opens a
//! nested block; a type-keyword-or-identifier followed by an identifier is
//! an embedded variable declaration; a bare `;` is an empty statement;
//! anything else is an expression statement.
//!
//! Two shapes here are the documented language surface rather than
//! oversights: `return` wraps an optional *statement*, and `print`/`read`
//! wrap their parenthesized payload as a statement node.

use super::ast::Stmt;
use super::parse::{ParseError, Parser};
use super::token::TokenKind;

impl Parser {
    /// Parse a brace-delimited block and return its statement list.
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(TokenKind::LBrace, "'{' to open a block")?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace, "'}' to close a block")?;

        Ok(statements)
    }

    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::KwIf => {
                self.advance();
                self.parse_if()
            }
            TokenKind::KwWhile => {
                self.advance();
                self.parse_while()
            }
            TokenKind::KwDo => {
                self.advance();
                self.parse_do_while()
            }
            TokenKind::KwFor => {
                self.advance();
                self.parse_for()
            }
            TokenKind::KwReturn => {
                self.advance();
                self.parse_return()
            }
            TokenKind::KwBreak => {
                self.advance();
                self.expect(TokenKind::Semicolon, "';' after 'break'")?;
                Ok(Stmt::Break)
            }
            TokenKind::KwContinue => {
                self.advance();
                self.expect(TokenKind::Semicolon, "';' after 'continue'")?;
                Ok(Stmt::Continue)
            }
            TokenKind::KwExit => {
                self.advance();
                self.parse_exit()
            }
            TokenKind::KwPrint => {
                self.advance();
                self.parse_print()
            }
            TokenKind::KwRead => {
                self.advance();
                self.parse_read()
            }
            TokenKind::KwSizeof => {
                self.advance();
                self.parse_sizeof()
            }
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Semicolon => {
                self.advance();
                Ok(Stmt::Empty)
            }
            _ if self.starts_local_decl() => Ok(Stmt::Decl(self.parse_var_decl()?)),
            _ => {
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Semicolon, "';' after expression")?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    /// A type keyword or identifier followed by another identifier begins
    /// an embedded variable declaration.
    fn starts_local_decl(&self) -> bool {
        let starts_type = self.peek_kind().is_type_keyword() || self.check(TokenKind::Ident);
        starts_type && self.peek_ahead(1).map(|token| token.kind) == Some(TokenKind::Ident)
    }

    /// `if (cond) then-stmt [else else-stmt]`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.eat(TokenKind::KwElse) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `while (cond) body`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after while condition")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// `do body while (cond) ;`
    fn parse_do_while(&mut self) -> Result<Stmt, ParseError> {
        let body = Box::new(self.parse_statement()?);

        self.expect(TokenKind::KwWhile, "'while' after do body")?;
        self.expect(TokenKind::LParen, "'(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after do-while condition")?;
        self.expect(TokenKind::Semicolon, "';' after do-while")?;

        Ok(Stmt::DoWhile { body, condition })
    }

    /// `for (init?; cond?; incr?) body` — each clause independently
    /// optional; init may be a declaration or an expression.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'for'")?;

        let init = if self.eat(TokenKind::Semicolon) {
            None
        } else if self.starts_local_decl() {
            // The declaration consumes its own ';'.
            Some(Box::new(Stmt::Decl(self.parse_var_decl()?)))
        } else {
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "';' after for initializer")?;
            Some(Box::new(Stmt::Expr(expr)))
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon, "';' after for condition")?;

        let increment = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RParen, "')' after for clauses")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::For {
            init,
            condition,
            increment,
            body,
        })
    }

    /// `return;` or `return stmt` — the wrapped statement's own grammar
    /// consumes the terminator.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        if self.eat(TokenKind::Semicolon) {
            return Ok(Stmt::Return(None));
        }

        let inner = Box::new(self.parse_statement()?);
        Ok(Stmt::Return(Some(inner)))
    }

    /// `exit ( status-expr ) ;`
    fn parse_exit(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'exit'")?;
        let status = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after exit status")?;
        self.expect(TokenKind::Semicolon, "';' after 'exit'")?;

        Ok(Stmt::Exit(status))
    }

    /// `print ( payload ) ;` — the payload is wrapped as an expression
    /// statement, keeping the statement-in-statement node shape.
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'print'")?;
        let payload = Box::new(Stmt::Expr(self.parse_expression()?));
        self.expect(TokenKind::RParen, "')' after print argument")?;
        self.expect(TokenKind::Semicolon, "';' after 'print'")?;

        Ok(Stmt::Print(payload))
    }

    /// `read ( payload ) ;` — same wrapping as `print`.
    fn parse_read(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'read'")?;
        let payload = Box::new(Stmt::Expr(self.parse_expression()?));
        self.expect(TokenKind::RParen, "')' after read argument")?;
        self.expect(TokenKind::Semicolon, "';' after 'read'")?;

        Ok(Stmt::Read(payload))
    }

    /// `sizeof ( expr ) ;`
    fn parse_sizeof(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "'(' after 'sizeof'")?;
        let expr = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')' after sizeof operand")?;
        self.expect(TokenKind::Semicolon, "';' after 'sizeof'")?;

        Ok(Stmt::Sizeof(expr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Decl, Expr};

    fn parse_body(statements: &str) -> Vec<Stmt> {
        let source = format!("void f() {{ {} }}", statements);
        let program = Parser::from_source(&source)
            .unwrap()
            .parse_program()
            .unwrap();
        match program.decls.into_iter().next() {
            Some(Decl::Func(func)) => func.body.unwrap(),
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else() {
        let body = parse_body("if (x > 0) return 1; else return 0;");

        match &body[0] {
            Stmt::If {
                else_branch: Some(else_branch),
                ..
            } => {
                assert!(matches!(**else_branch, Stmt::Return(Some(_))));
            }
            other => panic!("expected if with else, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_else_binds_to_inner_if() {
        let body = parse_body("if (a) if (b) x = 1; else x = 2;");

        match &body[0] {
            Stmt::If {
                then_branch,
                else_branch: None,
                ..
            } => {
                assert!(matches!(
                    **then_branch,
                    Stmt::If {
                        else_branch: Some(_),
                        ..
                    }
                ));
            }
            other => panic!("expected outer if without else, got {:?}", other),
        }
    }

    #[test]
    fn test_while_with_block_body() {
        let body = parse_body("while (i < 10) { i = i + 1; }");

        match &body[0] {
            Stmt::While { body, .. } => assert!(matches!(**body, Stmt::Block(_))),
            other => panic!("expected while, got {:?}", other),
        }
    }

    #[test]
    fn test_do_while() {
        let body = parse_body("do { i = i + 1; } while (i < 10);");
        assert!(matches!(body[0], Stmt::DoWhile { .. }));
    }

    #[test]
    fn test_do_while_requires_semicolon() {
        let source = "void f() { do { } while (x) }";
        let mut parser = Parser::from_source(source).unwrap();
        assert!(parser.parse_program().is_err());
    }

    #[test]
    fn test_for_with_all_clauses() {
        let body = parse_body("for (int i = 0; i < 10; i++) total = total + i;");

        match &body[0] {
            Stmt::For {
                init: Some(init),
                condition: Some(_),
                increment: Some(_),
                ..
            } => {
                assert!(matches!(**init, Stmt::Decl(_)));
            }
            other => panic!("expected fully-clause for, got {:?}", other),
        }
    }

    #[test]
    fn test_for_with_expression_init() {
        let body = parse_body("for (i = 0; i < 10; i++) total = total + i;");

        match &body[0] {
            Stmt::For {
                init: Some(init), ..
            } => assert!(matches!(**init, Stmt::Expr(_))),
            other => panic!("expected for, got {:?}", other),
        }
    }

    #[test]
    fn test_for_with_empty_clauses() {
        let body = parse_body("for (;;) break;");

        match &body[0] {
            Stmt::For {
                init,
                condition,
                increment,
                ..
            } => {
                assert!(init.is_none());
                assert!(condition.is_none());
                assert!(increment.is_none());
            }
            other => panic!("expected for, got {:?}", other),
        }
    }

    #[test]
    fn test_return_forms() {
        let body = parse_body("return; return x + 1;");

        assert!(matches!(body[0], Stmt::Return(None)));
        match &body[1] {
            Stmt::Return(Some(inner)) => assert!(matches!(**inner, Stmt::Expr(_))),
            other => panic!("expected return with value, got {:?}", other),
        }
    }

    #[test]
    fn test_break_continue() {
        let body = parse_body("while (1) { break; continue; }");

        match &body[0] {
            Stmt::While { body, .. } => match &**body {
                Stmt::Block(statements) => {
                    assert_eq!(statements[0], Stmt::Break);
                    assert_eq!(statements[1], Stmt::Continue);
                }
                other => panic!("expected block, got {:?}", other),
            },
            other => panic!("expected while, got {:?}", other),
        }
    }

    #[test]
    fn test_print_read_sizeof_exit() {
        let body = parse_body("print(x); read(y); sizeof(arr); exit(0);");

        match &body[0] {
            Stmt::Print(payload) => assert!(matches!(**payload, Stmt::Expr(_))),
            other => panic!("expected print, got {:?}", other),
        }
        match &body[1] {
            Stmt::Read(payload) => assert!(matches!(**payload, Stmt::Expr(_))),
            other => panic!("expected read, got {:?}", other),
        }
        assert!(matches!(body[2], Stmt::Sizeof(Expr::Ident(_))));
        assert!(matches!(body[3], Stmt::Exit(_)));
    }

    #[test]
    fn test_local_declaration_statement() {
        let body = parse_body("int x = 5; Point p; x;");

        assert!(matches!(body[0], Stmt::Decl(_)));
        assert!(matches!(body[1], Stmt::Decl(_)));
        assert!(matches!(body[2], Stmt::Expr(Expr::Ident(_))));
    }

    #[test]
    fn test_empty_statement() {
        let body = parse_body("; x = 1;;");

        assert_eq!(body[0], Stmt::Empty);
        assert!(matches!(body[1], Stmt::Expr(_)));
        assert_eq!(body[2], Stmt::Empty);
    }

    #[test]
    fn test_nested_blocks_preserve_order() {
        let body = parse_body("{ a = 1; { b = 2; } c = 3; }");

        match &body[0] {
            Stmt::Block(statements) => {
                assert_eq!(statements.len(), 3);
                assert!(matches!(statements[0], Stmt::Expr(_)));
                assert!(matches!(statements[1], Stmt::Block(_)));
                assert!(matches!(statements[2], Stmt::Expr(_)));
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_statement_semicolon() {
        let mut parser = Parser::from_source("void f() { x = 1 }").unwrap();
        assert!(parser.parse_program().is_err());
    }
}
