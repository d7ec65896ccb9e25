//! Module Export Sets
//!
//! Computes which top-level names a module exposes to importers. The code
//! generator consumes this list verbatim when it emits export assignments.

use rustc_hash::FxHashSet;

use crate::ast::{for_each_binding, Expr, Module, Stmt};
use crate::Name;

/// Name of the explicit export-list variable.
pub const EXPORT_LIST_NAME: &str = "__all__";

/// Compute the ordered export set of `module`.
///
/// If the module assigns a list of string literals to `__all__`, those
/// strings are the exports, in list order. Otherwise every name bound at
/// module scope that does not start with `_` is exported, in first-binding
/// order. Each name appears once.
pub fn exported_names(module: &Module) -> Vec<Name> {
    if let Some(names) = explicit_export_list(&module.body) {
        return dedup(names);
    }

    let mut names = Vec::new();
    for_each_binding(&module.body, &mut |name, _| {
        if !name.starts_with('_') {
            names.push(name.to_string());
        }
    });
    dedup(names)
}

/// Find the string elements of a top-level `__all__ = [...]` assignment.
fn explicit_export_list(body: &[Stmt]) -> Option<Vec<Name>> {
    body.iter().find_map(|stmt| match stmt {
        Stmt::Assign {
            targets,
            value: Expr::List(elements),
        } if targets.iter().any(|target| target == EXPORT_LIST_NAME) => Some(
            elements
                .iter()
                .filter_map(|element| match element {
                    Expr::Str(name) => Some(name.clone()),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

fn dedup(names: Vec<Name>) -> Vec<Name> {
    let mut seen = FxHashSet::default();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
