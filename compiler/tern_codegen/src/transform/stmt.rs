//! Statement Lowering

use tern_ir::Stmt;
use tern_js::Expr;

use super::expr::lower_expr;
use super::imports::{lower_import, lower_import_from};
use crate::context::TransformContext;
use crate::hoist::hoisted_declarations;
use crate::runtime;

/// Lower every statement of a body, in order.
pub fn lower_body(ctx: &mut TransformContext<'_>, body: &[Stmt]) -> Vec<tern_js::Stmt> {
    body.iter().map(|stmt| lower_stmt(ctx, stmt)).collect()
}

/// Lower one statement.
pub fn lower_stmt(ctx: &mut TransformContext<'_>, stmt: &Stmt) -> tern_js::Stmt {
    match stmt {
        Stmt::Import(aliases) => lower_import(aliases),
        Stmt::ImportFrom { module, names } => lower_import_from(ctx, module, names),

        Stmt::Expr(value) => tern_js::Stmt::expr(lower_expr(value)),

        // `a = b = value` becomes `a = b = <value>;`: the value is lowered
        // once and becomes the innermost assignment, the first target the
        // outermost.
        Stmt::Assign { targets, value } => {
            let chain = targets
                .iter()
                .rev()
                .fold(lower_expr(value), |inner, target| Expr::assign(target, inner));
            tern_js::Stmt::expr(chain)
        }

        Stmt::FunctionDef { name, args, body } => {
            let mut lowered = hoisted_declarations(body);
            lowered.extend(lower_body(ctx, body));
            tern_js::Stmt::Function {
                name: name.clone(),
                params: args.iter().map(|arg| arg.name.clone()).collect(),
                body: lowered,
            }
        }

        Stmt::Return(value) => tern_js::Stmt::ret(lower_expr(value)),

        Stmt::IfElse {
            condition,
            true_body,
            false_body,
        } => tern_js::Stmt::If {
            condition: runtime::truthiness(lower_expr(condition)),
            then_body: lower_body(ctx, true_body),
            else_body: lower_body(ctx, false_body),
        },
    }
}
