//! Source Tree
//!
//! The closed set of source-language node variants. Trees arrive fully
//! resolved from the parser and type checker and are never mutated.

mod bindings;
mod expr;
mod operators;
mod stmt;

pub use bindings::{for_each_binding, BindingKind};
pub use expr::Expr;
pub use operators::{BinaryOp, NumberOp};
pub use stmt::{Arg, ImportAlias, ImportName, Stmt};

/// Root of one compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Module {
    pub body: Vec<Stmt>,
}

impl Module {
    pub fn new(body: Vec<Stmt>) -> Self {
        Module { body }
    }
}

#[cfg(test)]
mod tests;
