//! Scope Bindings
//!
//! Walks the statements of one scope and reports every name bound there.
//! The source language has function scope only: `if`/`else` branches belong
//! to the enclosing scope, while nested function bodies are separate scopes
//! and are not entered.

use super::stmt::Stmt;

/// How a name came to be bound in a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingKind {
    /// Target of an assignment statement.
    Assignment,
    /// Bound by `import` or `from ... import`.
    Import,
    /// Name of a function definition.
    Function,
}

/// Visit every binding in `body`, in source order.
///
/// Names are reported once per binding site, so a name assigned twice is
/// reported twice.
pub fn for_each_binding<F>(body: &[Stmt], f: &mut F)
where
    F: FnMut(&str, BindingKind),
{
    for stmt in body {
        match stmt {
            Stmt::Assign { targets, .. } => {
                for target in targets {
                    f(target, BindingKind::Assignment);
                }
            }
            Stmt::Import(aliases) => {
                for alias in aliases {
                    if let Some(name) = alias.bound_name() {
                        f(name, BindingKind::Import);
                    }
                }
            }
            Stmt::ImportFrom { names, .. } => {
                for name in names {
                    f(name.bound_name(), BindingKind::Import);
                }
            }
            Stmt::FunctionDef { name, .. } => f(name, BindingKind::Function),
            Stmt::IfElse {
                true_body,
                false_body,
                ..
            } => {
                for_each_binding(true_body, f);
                for_each_binding(false_body, f);
            }
            Stmt::Expr(_) | Stmt::Return(_) => {}
        }
    }
}
