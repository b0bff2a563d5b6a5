//! Double-dispatch traversal over the syntax tree.
//!
//! A [`Visitor`] implements one method per concrete node kind across all
//! three families, and every node `accept`s a visitor by invoking the
//! matching method. This is the whole contract a downstream pass needs: it
//! never has to know how the tree was parsed. None of the methods have
//! default bodies, so adding a node kind breaks every visitor at compile
//! time instead of at runtime.

use super::ast::{
    AssertDecl, BinaryOp, Decl, Expr, FuncDecl, Literal, PostfixOp, Program, Stmt, StructDecl,
    UnaryOp, VarDecl,
};

/// One handling operation per concrete node kind.
pub trait Visitor {
    // Root
    fn visit_program(&mut self, program: &Program);

    // Declarations
    fn visit_var_decl(&mut self, decl: &VarDecl);
    fn visit_func_decl(&mut self, decl: &FuncDecl);
    fn visit_struct_decl(&mut self, decl: &StructDecl);
    fn visit_assert_decl(&mut self, decl: &AssertDecl);

    // Statements
    fn visit_block(&mut self, statements: &[Stmt]);
    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>);
    fn visit_while(&mut self, condition: &Expr, body: &Stmt);
    fn visit_do_while(&mut self, body: &Stmt, condition: &Expr);
    fn visit_for(
        &mut self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        increment: Option<&Expr>,
        body: &Stmt,
    );
    fn visit_return(&mut self, value: Option<&Stmt>);
    fn visit_break(&mut self);
    fn visit_continue(&mut self);
    fn visit_expr_stmt(&mut self, expr: &Expr);
    fn visit_decl_stmt(&mut self, decl: &VarDecl);
    fn visit_print(&mut self, payload: &Stmt);
    fn visit_read(&mut self, payload: &Stmt);
    fn visit_sizeof(&mut self, expr: &Expr);
    fn visit_exit(&mut self, status: &Expr);
    fn visit_empty(&mut self);

    // Expressions
    fn visit_literal(&mut self, literal: &Literal);
    fn visit_ident(&mut self, name: &str);
    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr);
    fn visit_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr);
    fn visit_ternary(&mut self, condition: &Expr, true_expr: &Expr, false_expr: &Expr);
    fn visit_assign(&mut self, target: &Expr, value: &Expr);
    fn visit_postfix(&mut self, op: PostfixOp, operand: &Expr);
    fn visit_member(&mut self, object: &Expr, field: &str);
    fn visit_call(&mut self, callee: &Expr, args: &[Expr]);
    fn visit_index(&mut self, array: &Expr, index: &Expr);
    fn visit_array_init(&mut self, elements: &[Expr]);
}

impl Program {
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_program(self);
    }
}

impl Decl {
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Decl::Var(decl) => visitor.visit_var_decl(decl),
            Decl::Func(decl) => visitor.visit_func_decl(decl),
            Decl::Struct(decl) => visitor.visit_struct_decl(decl),
            Decl::Assert(decl) => visitor.visit_assert_decl(decl),
        }
    }
}

impl Stmt {
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Stmt::Block(statements) => visitor.visit_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if(condition, then_branch, else_branch.as_deref()),
            Stmt::While { condition, body } => visitor.visit_while(condition, body),
            Stmt::DoWhile { body, condition } => visitor.visit_do_while(body, condition),
            Stmt::For {
                init,
                condition,
                increment,
                body,
            } => visitor.visit_for(
                init.as_deref(),
                condition.as_ref(),
                increment.as_ref(),
                body,
            ),
            Stmt::Return(value) => visitor.visit_return(value.as_deref()),
            Stmt::Break => visitor.visit_break(),
            Stmt::Continue => visitor.visit_continue(),
            Stmt::Expr(expr) => visitor.visit_expr_stmt(expr),
            Stmt::Decl(decl) => visitor.visit_decl_stmt(decl),
            Stmt::Print(payload) => visitor.visit_print(payload),
            Stmt::Read(payload) => visitor.visit_read(payload),
            Stmt::Sizeof(expr) => visitor.visit_sizeof(expr),
            Stmt::Exit(status) => visitor.visit_exit(status),
            Stmt::Empty => visitor.visit_empty(),
        }
    }
}

impl Expr {
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Ident(name) => visitor.visit_ident(name),
            Expr::Unary { op, operand } => visitor.visit_unary(*op, operand),
            Expr::Binary { op, left, right } => visitor.visit_binary(*op, left, right),
            Expr::Ternary {
                condition,
                true_expr,
                false_expr,
            } => visitor.visit_ternary(condition, true_expr, false_expr),
            Expr::Assign { target, value } => visitor.visit_assign(target, value),
            Expr::Postfix { op, operand } => visitor.visit_postfix(*op, operand),
            Expr::Member { object, field } => visitor.visit_member(object, field),
            Expr::Call { callee, args } => visitor.visit_call(callee, args),
            Expr::Index { array, index } => visitor.visit_index(array, index),
            Expr::ArrayInit(elements) => visitor.visit_array_init(elements),
        }
    }
}
