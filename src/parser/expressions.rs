//! Expression parsing.
//!
//! Precedence climbing: one method per tier, each delegating
//! tighter-binding operators to the next. Lowest to highest:
//!
//! ```text
//! expression  := assign ("," assign)*          left-assoc sequencing
//! assign      := ternary ("=" assign)?         right-assoc
//! ternary     := or ("?" expression ":" expression)?
//! or          := and ("||" and)*
//! and         := equality ("&&" equality)*
//! equality    := relational (("==" | "!=") relational)*
//! relational  := additive (("<" | ">" | "<=" | ">=") additive)*
//! additive    := multiplicative (("+" | "-") multiplicative)*
//! multiplicative := unary (("*" | "/" | "%") unary)*
//! unary       := ("+" | "-" | "!") assign | postfix
//! postfix     := primary ("++" | "--" | "[" expression "]"
//!                        | "(" args ")" | "." ID)*
//! primary     := literal | ID | "(" expression ")"
//! ```
//!
//! Each binary tier is a loop folding into a left-leaning node. The unary
//! operand re-entering at assignment level is deliberate permissiveness in
//! the language, not a shortcut. Compound-assignment, bitwise, shift, and
//! `->` tokens exist in the lexer but no tier accepts them, so using one is
//! a parse error.

use super::ast::{BinaryOp, Expr, Literal, PostfixOp, UnaryOp};
use super::parse::{ParseError, Parser};
use super::token::TokenKind;

impl Parser {
    /// Parse a full expression: comma sequencing, the lowest tier.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_assignment()?;

        while self.eat(TokenKind::Comma) {
            let right = self.parse_assignment()?;
            expr = Expr::Binary {
                op: BinaryOp::Comma,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse an assignment. Right-associative: the right-hand side recurses
    /// into assignment, not the full expression.
    pub(crate) fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_ternary()?;

        if self.eat(TokenKind::Assign) {
            let value = Box::new(self.parse_assignment()?);
            return Ok(Expr::Assign {
                target: Box::new(expr),
                value,
            });
        }

        Ok(expr)
    }

    /// Parse `cond ? t : f`. Both branches recurse into the full expression
    /// level, which makes chained ternaries right-associative by
    /// construction.
    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_logical_or()?;

        if self.eat(TokenKind::Question) {
            let true_expr = Box::new(self.parse_expression()?);
            self.expect(TokenKind::Colon, "':' in ternary expression")?;
            let false_expr = Box::new(self.parse_expression()?);

            return Ok(Expr::Ternary {
                condition: Box::new(condition),
                true_expr,
                false_expr,
            });
        }

        Ok(condition)
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.eat(TokenKind::OrOr) {
            let right = Box::new(self.parse_logical_and()?);
            left = Expr::Binary {
                op: BinaryOp::Or,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.eat(TokenKind::AndAnd) {
            let right = Box::new(self.parse_equality()?);
            left = Expr::Binary {
                op: BinaryOp::And,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;

        loop {
            let op = match self.peek_kind() {
                TokenKind::Eq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::Ne,
                _ => break,
            };
            self.advance();

            let right = Box::new(self.parse_relational()?);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = match self.peek_kind() {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Le => BinaryOp::Le,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::Ge => BinaryOp::Ge,
                _ => break,
            };
            self.advance();

            let right = Box::new(self.parse_additive()?);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();

            let right = Box::new(self.parse_multiplicative()?);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();

            let right = Box::new(self.parse_unary()?);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Not => Some(UnaryOp::Not),
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            // Operand re-enters at assignment level.
            let operand = Box::new(self.parse_assignment()?);
            return Ok(Expr::Unary { op, operand });
        }

        self.parse_postfix()
    }

    /// Parse postfix chains: `++`, `--`, indexing, calls, and member
    /// access, folding left-to-right.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.peek_kind() {
                TokenKind::Increment => {
                    self.advance();
                    expr = Expr::Postfix {
                        op: PostfixOp::Inc,
                        operand: Box::new(expr),
                    };
                }
                TokenKind::Decrement => {
                    self.advance();
                    expr = Expr::Postfix {
                        op: PostfixOp::Dec,
                        operand: Box::new(expr),
                    };
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = Box::new(self.parse_expression()?);
                    self.expect(TokenKind::RBracket, "']' after array index")?;
                    expr = Expr::Index {
                        array: Box::new(expr),
                        index,
                    };
                }
                TokenKind::LParen => {
                    self.advance();
                    let args = self.parse_argument_list()?;
                    self.expect(TokenKind::RParen, "')' after call arguments")?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                    };
                }
                TokenKind::Dot => {
                    self.advance();
                    let field = self.expect_identifier("a field name after '.'")?;
                    expr = Expr::Member {
                        object: Box::new(expr),
                        field,
                    };
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Parse a call argument list up to the closing paren. Arguments parse
    /// at assignment level so `,` separates them.
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check(TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_assignment()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        Ok(args)
    }

    /// Parse a primary: a literal, an identifier reference, or a
    /// parenthesized sub-expression (returned unwrapped — no grouping
    /// node). Literal text converts to its value here.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::IntLit => {
                let token = self.advance().clone();
                let value = token
                    .text
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidLiteral {
                        text: token.text.clone(),
                        pos: token.pos,
                    })?;
                Ok(Expr::Literal(Literal::Int(value)))
            }
            TokenKind::FloatLit => {
                let token = self.advance().clone();
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidLiteral {
                        text: token.text.clone(),
                        pos: token.pos,
                    })?;
                Ok(Expr::Literal(Literal::Float(value)))
            }
            TokenKind::CharLit => {
                let token = self.advance().clone();
                let value = token
                    .text
                    .chars()
                    .next()
                    .ok_or(ParseError::InvalidLiteral {
                        text: token.text.clone(),
                        pos: token.pos,
                    })?;
                Ok(Expr::Literal(Literal::Char(value)))
            }
            TokenKind::StrLit => {
                let text = self.advance().text.clone();
                Ok(Expr::Literal(Literal::Str(text)))
            }
            TokenKind::BoolLit => {
                let value = self.advance().text == "true";
                Ok(Expr::Literal(Literal::Bool(value)))
            }
            TokenKind::Ident => {
                let name = self.advance().text.clone();
                Ok(Expr::Ident(name))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')' after expression")?;
                Ok(expr)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse a brace-delimited aggregate initializer. Elements are
    /// comma-separated at assignment level and may nest.
    pub(crate) fn parse_array_init(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LBrace, "'{' to open an array initializer")?;

        let mut elements = Vec::new();
        if !self.check(TokenKind::RBrace) {
            loop {
                let element = if self.check(TokenKind::LBrace) {
                    self.parse_array_init()?
                } else {
                    self.parse_assignment()?
                };
                elements.push(element);

                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::RBrace, "'}' to close an array initializer")?;

        Ok(Expr::ArrayInit(elements))
    }
}
