//! Hoisting
//!
//! Declares every name bound in a scope before any statement of that scope.
//! The source language gives names function-wide visibility, so a name
//! assigned inside an `if` branch is declared at the top of the enclosing
//! function (or module). Nested function bodies are their own scopes.
//!
//! Function definitions are not hoisted here: the target hoists function
//! declarations natively.

use rustc_hash::FxHashSet;
use tern_ir::{for_each_binding, BindingKind, Name, Stmt};

/// Names to declare for the scope `body`, in first-occurrence order, each once.
pub fn declared_names(body: &[Stmt]) -> Vec<Name> {
    let mut seen = FxHashSet::default();
    let mut names = Vec::new();

    for_each_binding(body, &mut |name, kind| {
        if kind != BindingKind::Function && seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    });

    tracing::trace!(count = names.len(), "hoisted scope declarations");
    names
}

/// One `var name;` declaration per hoisted name.
pub fn hoisted_declarations(body: &[Stmt]) -> Vec<tern_js::Stmt> {
    declared_names(body)
        .into_iter()
        .map(tern_js::Stmt::var)
        .collect()
}
