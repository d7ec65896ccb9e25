//! Import Lowering
//!
//! Both import forms resolve modules at run time through `$tern.require`.
//! Module paths are slash-joined segments; a path ending in `.` (the current
//! or parent package) gets a trailing `/` so it resolves as a directory.

use tern_ir::{ImportAlias, ImportName, Name};
use tern_js::{AssignTarget, Expr, Stmt};

use crate::context::TransformContext;
use crate::runtime;

/// `import a.b.c` binds `a`, then `(a).b`, then `((a).b).c`, each to the
/// module at that path prefix. `import a.b as d` binds only `d`, to `a/b`.
pub(super) fn lower_import(aliases: &[ImportAlias]) -> Stmt {
    let mut stmts = Vec::new();

    for alias in aliases {
        if let Some(alias_name) = &alias.alias {
            let module = runtime::require(&module_path(&alias.name_parts));
            stmts.push(Stmt::assign(alias_name, module));
            continue;
        }

        let mut bound: Option<Expr> = None;
        for (index, part) in alias.name_parts.iter().enumerate() {
            let module = runtime::require(&module_path(&alias.name_parts[..=index]));
            bound = Some(match bound {
                None => {
                    stmts.push(Stmt::assign(part, module));
                    Expr::name(part)
                }
                Some(parent) => {
                    stmts.push(Stmt::assign(
                        AssignTarget::property(parent.clone(), part),
                        module,
                    ));
                    Expr::property(parent, part)
                }
            });
        }
    }

    Stmt::Statements(stmts)
}

/// `from m import x, y as z` loads `m` once into a fresh `$importN`
/// temporary and copies each name off it.
pub(super) fn lower_import_from(
    ctx: &mut TransformContext<'_>,
    module: &[Name],
    names: &[ImportName],
) -> Stmt {
    let temp = ctx.fresh_import_name();
    let path = module_path(module);
    tracing::trace!(%temp, %path, "binding import temporary");

    let mut stmts = Vec::with_capacity(names.len() + 1);
    stmts.push(Stmt::var_init(temp.as_str(), runtime::require(&path)));
    for name in names {
        stmts.push(Stmt::assign(
            name.bound_name(),
            Expr::property(Expr::name(temp.as_str()), &name.name),
        ));
    }
    Stmt::Statements(stmts)
}

/// Join module path segments with `/`, adding a trailing `/` after a final
/// `.` or `..` segment.
pub(super) fn module_path(segments: &[Name]) -> String {
    let mut path = segments.join("/");
    if path.ends_with('.') {
        path.push('/');
    }
    path
}
