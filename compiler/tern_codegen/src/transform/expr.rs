//! Expression Lowering
//!
//! Expressions carry no per-unit state, so lowering them is a pure function.

use tern_ir::Expr;

use crate::runtime;

/// Lower one expression.
pub fn lower_expr(expr: &Expr) -> tern_js::Expr {
    match expr {
        Expr::Call { func, args } => {
            tern_js::Expr::call(lower_expr(func), args.iter().map(lower_expr).collect())
        }

        // Attribute lookup can be overridden per type, so it always goes
        // through the runtime shim rather than a native property access.
        Expr::Attribute { value, attr } => runtime::get_attribute(lower_expr(value), attr),

        // Operands may implement overloads; native infix operators would not
        // dispatch to them.
        Expr::Binary { op, left, right } => {
            runtime::binary_operation(*op, lower_expr(left), lower_expr(right))
        }

        Expr::Name(name) => tern_js::Expr::name(name),
        Expr::None => tern_js::Expr::Null,
        Expr::Bool(value) => tern_js::Expr::Bool(*value),
        Expr::Int(value) => tern_js::Expr::Number(*value),
        Expr::Str(value) => tern_js::Expr::str(value),
        Expr::List(elements) => tern_js::Expr::Array(elements.iter().map(lower_expr).collect()),
    }
}
