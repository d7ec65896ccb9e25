//! Lowering Transformer
//!
//! Maps one source module to one target statement tree. Lowering is a total
//! function over the closed source variant set: every `match` here is
//! exhaustive, so a new source variant cannot compile without a rule.
//!
//! Dynamic semantics are never resolved statically. Truthiness, attribute
//! access, operators and module loading all lower to calls into the runtime
//! prelude (see [`crate::runtime`]).

mod expr;
mod imports;
mod stmt;

pub use expr::lower_expr;
pub use stmt::{lower_body, lower_stmt};

use tern_ir::{Module, Name};
use tern_js::{AssignTarget, Expr};

use crate::context::TransformContext;
use crate::hoist::hoisted_declarations;
use crate::runtime::EXPORTS_OBJECT;

/// Per-unit transformer.
///
/// Holds the unit's [`TransformContext`]; create a fresh one for every unit.
pub struct Transformer<'a> {
    ctx: TransformContext<'a>,
}

impl<'a> Transformer<'a> {
    pub fn new(exports: &'a [Name]) -> Self {
        Self {
            ctx: TransformContext::new(exports),
        }
    }

    /// Lower a module to a flat run of target statements.
    pub fn transform(&mut self, module: &Module) -> tern_js::Stmt {
        lower_module(&mut self.ctx, module)
    }
}

/// Lower `module` with a fresh transformer.
pub fn transform(module: &Module, exports: &[Name]) -> tern_js::Stmt {
    Transformer::new(exports).transform(module)
}

/// Module layout: hoisted declarations, then the body, then one export
/// assignment per exported name.
fn lower_module(ctx: &mut TransformContext<'_>, module: &Module) -> tern_js::Stmt {
    let mut stmts = hoisted_declarations(&module.body);
    stmts.extend(lower_body(ctx, &module.body));
    stmts.extend(ctx.exports().iter().map(|name| {
        tern_js::Stmt::assign(
            AssignTarget::property(Expr::name(EXPORTS_OBJECT), name),
            Expr::name(name),
        )
    }));
    tern_js::Stmt::Statements(stmts)
}

#[cfg(test)]
mod tests;
