//! Debug tree printer.
//!
//! [`TreePrinter`] is a pure consumer of the syntax tree through the
//! [`Visitor`] contract: it renders each top-level declaration as one line
//! of compact `Kind(child, child)` notation, e.g.
//!
//! ```text
//! VarDecl(int, [x = Literal(5)])
//! Func(int main, [], Block([Return(Expr(Ident(x)))]))
//! ```
//!
//! Nothing here touches parser internals; any future pass (type checker,
//! interpreter) consumes the tree the same way.

use crate::parser::ast::{
    AssertDecl, BinaryOp, Expr, FuncDecl, Literal, PostfixOp, Program, Stmt, StructDecl, UnaryOp,
    VarDecl,
};
use crate::parser::visit::Visitor;

/// Renders syntax trees in a compact one-line-per-declaration notation.
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
}

impl TreePrinter {
    pub fn new() -> Self {
        TreePrinter::default()
    }

    /// Render an entire program.
    pub fn render(program: &Program) -> String {
        let mut printer = TreePrinter::new();
        program.accept(&mut printer);
        printer.out
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn exprs(&mut self, elements: &[Expr]) {
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            element.accept(self);
        }
    }

    fn stmts(&mut self, statements: &[Stmt]) {
        for (i, statement) in statements.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            statement.accept(self);
        }
    }

    fn var_decl_inline(&mut self, decl: &VarDecl) {
        self.push(&format!("VarDecl({}, [", decl.ty));
        for (i, binding) in decl.bindings.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push(&binding.name);
            if let Some(size) = &binding.size {
                self.push("[");
                size.accept(self);
                self.push("]");
            }
            if let Some(init) = &binding.init {
                self.push(" = ");
                init.accept(self);
            }
        }
        self.push("])");
    }
}

impl Visitor for TreePrinter {
    fn visit_program(&mut self, program: &Program) {
        for decl in &program.decls {
            decl.accept(self);
            self.push("\n");
        }
    }

    // === Declarations ===

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        self.var_decl_inline(decl);
    }

    fn visit_func_decl(&mut self, decl: &FuncDecl) {
        self.push(&format!("Func({} {}, [", decl.return_type, decl.name));
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push(&format!("{} {}", param.ty, param.name));
        }
        self.push("]");
        match &decl.body {
            Some(body) => {
                self.push(", Block([");
                self.stmts(body);
                self.push("]))");
            }
            None => self.push(", prototype)"),
        }
    }

    fn visit_struct_decl(&mut self, decl: &StructDecl) {
        self.push(&format!("Struct({}, [", decl.name));
        for (i, field) in decl.fields.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.var_decl_inline(field);
        }
        self.push("])");
    }

    fn visit_assert_decl(&mut self, decl: &AssertDecl) {
        self.push("Assert(");
        decl.condition.accept(self);
        if let Some(message) = &decl.message {
            self.push(&format!(", \"{}\"", message));
        }
        self.push(")");
    }

    // === Statements ===

    fn visit_block(&mut self, statements: &[Stmt]) {
        self.push("Block([");
        self.stmts(statements);
        self.push("])");
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.push("If(");
        condition.accept(self);
        self.push(", ");
        then_branch.accept(self);
        if let Some(else_branch) = else_branch {
            self.push(", ");
            else_branch.accept(self);
        }
        self.push(")");
    }

    fn visit_while(&mut self, condition: &Expr, body: &Stmt) {
        self.push("While(");
        condition.accept(self);
        self.push(", ");
        body.accept(self);
        self.push(")");
    }

    fn visit_do_while(&mut self, body: &Stmt, condition: &Expr) {
        self.push("DoWhile(");
        body.accept(self);
        self.push(", ");
        condition.accept(self);
        self.push(")");
    }

    fn visit_for(
        &mut self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        increment: Option<&Expr>,
        body: &Stmt,
    ) {
        self.push("For(");
        if let Some(init) = init {
            init.accept(self);
        }
        self.push("; ");
        if let Some(condition) = condition {
            condition.accept(self);
        }
        self.push("; ");
        if let Some(increment) = increment {
            increment.accept(self);
        }
        self.push(", ");
        body.accept(self);
        self.push(")");
    }

    fn visit_return(&mut self, value: Option<&Stmt>) {
        self.push("Return(");
        if let Some(value) = value {
            value.accept(self);
        }
        self.push(")");
    }

    fn visit_break(&mut self) {
        self.push("Break");
    }

    fn visit_continue(&mut self) {
        self.push("Continue");
    }

    fn visit_expr_stmt(&mut self, expr: &Expr) {
        self.push("Expr(");
        expr.accept(self);
        self.push(")");
    }

    fn visit_decl_stmt(&mut self, decl: &VarDecl) {
        self.var_decl_inline(decl);
    }

    fn visit_print(&mut self, payload: &Stmt) {
        self.push("Print(");
        payload.accept(self);
        self.push(")");
    }

    fn visit_read(&mut self, payload: &Stmt) {
        self.push("Read(");
        payload.accept(self);
        self.push(")");
    }

    fn visit_sizeof(&mut self, expr: &Expr) {
        self.push("Sizeof(");
        expr.accept(self);
        self.push(")");
    }

    fn visit_exit(&mut self, status: &Expr) {
        self.push("Exit(");
        status.accept(self);
        self.push(")");
    }

    fn visit_empty(&mut self) {
        self.push("Empty");
    }

    // === Expressions ===

    fn visit_literal(&mut self, literal: &Literal) {
        self.push(&format!("Literal({})", literal));
    }

    fn visit_ident(&mut self, name: &str) {
        self.push(&format!("Ident({})", name));
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) {
        self.push(&format!("Unary({}, ", op));
        operand.accept(self);
        self.push(")");
    }

    fn visit_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {
        self.push(&format!("Binary({}, ", op));
        left.accept(self);
        self.push(", ");
        right.accept(self);
        self.push(")");
    }

    fn visit_ternary(&mut self, condition: &Expr, true_expr: &Expr, false_expr: &Expr) {
        self.push("Ternary(");
        condition.accept(self);
        self.push(" ? ");
        true_expr.accept(self);
        self.push(" : ");
        false_expr.accept(self);
        self.push(")");
    }

    fn visit_assign(&mut self, target: &Expr, value: &Expr) {
        self.push("Assign(");
        target.accept(self);
        self.push(" = ");
        value.accept(self);
        self.push(")");
    }

    fn visit_postfix(&mut self, op: PostfixOp, operand: &Expr) {
        self.push("Postfix(");
        operand.accept(self);
        self.push(&format!("{})", op));
    }

    fn visit_member(&mut self, object: &Expr, field: &str) {
        self.push("Access(");
        object.accept(self);
        self.push(&format!(".{})", field));
    }

    fn visit_call(&mut self, callee: &Expr, args: &[Expr]) {
        self.push("Call(");
        callee.accept(self);
        self.push(", [");
        self.exprs(args);
        self.push("])");
    }

    fn visit_index(&mut self, array: &Expr, index: &Expr) {
        self.push("Array(");
        array.accept(self);
        self.push("[");
        index.accept(self);
        self.push("])");
    }

    fn visit_array_init(&mut self, elements: &[Expr]) {
        self.push("ArrayInit([");
        self.exprs(elements);
        self.push("])");
    }
}
