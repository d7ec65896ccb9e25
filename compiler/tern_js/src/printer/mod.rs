//! Printer
//!
//! Renders the target tree to text in a single recursive pass. The rules are
//! fixed: no indentation, no line breaks, and every property access gets its
//! object parenthesized regardless of precedence.

use crate::ast::{AssignTarget, Expr, Stmt};
use crate::emitter::{Emitter, StringEmitter};

/// Render a statement tree to a string.
pub fn render_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::new(StringEmitter::with_capacity(1024));
    printer.stmt(stmt);
    printer.finish().output()
}

/// Render an expression to a string.
pub fn render_expr(expr: &Expr) -> String {
    let mut printer = Printer::new(StringEmitter::new());
    printer.expr(expr);
    printer.finish().output()
}

/// Recursive-descent renderer writing into an [`Emitter`].
pub struct Printer<E: Emitter> {
    emitter: E,
}

impl<E: Emitter> Printer<E> {
    pub fn new(emitter: E) -> Self {
        Printer { emitter }
    }

    /// Consume the printer, returning its emitter.
    pub fn finish(self) -> E {
        self.emitter
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Statements(stmts) => self.stmts(stmts),
            Stmt::Expr(value) => {
                self.expr(value);
                self.emitter.emit_char(';');
            }
            Stmt::Function { name, params, body } => {
                self.emitter.emit("function ");
                self.emitter.emit(name);
                self.emitter.emit_char('(');
                self.emitter.emit(&params.join(", "));
                self.emitter.emit(") ");
                self.block(body);
            }
            Stmt::Return(value) => {
                self.emitter.emit("return ");
                self.expr(value);
                self.emitter.emit_char(';');
            }
            Stmt::Var { name, init } => {
                self.emitter.emit("var ");
                self.emitter.emit(name);
                if let Some(init) = init {
                    self.emitter.emit(" = ");
                    self.expr(init);
                }
                self.emitter.emit_char(';');
            }
            Stmt::If {
                condition,
                then_body,
                else_body,
            } => {
                self.emitter.emit("if (");
                self.expr(condition);
                self.emitter.emit(") ");
                self.block(then_body);
                self.emitter.emit(" else ");
                self.block(else_body);
            }
        }
    }

    pub fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Assign { target, value } => {
                self.assign_target(target);
                self.emitter.emit(" = ");
                self.expr(value);
            }
            Expr::Property { object, property } => self.property(object, property),
            Expr::Call { callee, args } => {
                self.expr(callee);
                self.emitter.emit_char('(');
                self.comma_separated(args);
                self.emitter.emit_char(')');
            }
            Expr::Name(name) => self.emitter.emit(name),
            Expr::Number(value) => self.emitter.emit(&value.to_string()),
            Expr::Null => self.emitter.emit("null"),
            Expr::Str(value) => self.emitter.emit(&escape_string(value)),
            Expr::Array(elements) => {
                self.emitter.emit_char('[');
                self.comma_separated(elements);
                self.emitter.emit_char(']');
            }
            Expr::Bool(value) => self.emitter.emit(if *value { "true" } else { "false" }),
        }
    }

    fn stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn block(&mut self, body: &[Stmt]) {
        self.emitter.emit("{ ");
        self.stmts(body);
        self.emitter.emit(" }");
    }

    fn assign_target(&mut self, target: &AssignTarget) {
        match target {
            AssignTarget::Variable(name) => self.emitter.emit(name),
            AssignTarget::Property { object, property } => self.property(object, property),
        }
    }

    fn property(&mut self, object: &Expr, property: &str) {
        self.emitter.emit_char('(');
        self.expr(object);
        self.emitter.emit(").");
        self.emitter.emit(property);
    }

    fn comma_separated(&mut self, exprs: &[Expr]) {
        for (index, expr) in exprs.iter().enumerate() {
            if index > 0 {
                self.emitter.emit(", ");
            }
            self.expr(expr);
        }
    }
}

/// Escape a string as a double-quoted JSON string literal.
///
/// JSON string syntax is a subset of the target's string literal syntax, so
/// any Unicode content survives re-lexing unchanged.
pub fn escape_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
