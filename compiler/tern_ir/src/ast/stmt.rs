//! Statement Types
//!
//! Statement variants that may appear in a module body or a function body.

use super::expr::Expr;
use crate::Name;

/// One `a.b.c [as d]` entry of a bare `import` statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportAlias {
    /// Dotted path segments, e.g. `["a", "b", "c"]`.
    pub name_parts: Vec<Name>,
    pub alias: Option<Name>,
}

impl ImportAlias {
    /// Parse a dotted path such as `"a.b"`.
    pub fn new(dotted: &str, alias: Option<&str>) -> Self {
        ImportAlias {
            name_parts: dotted.split('.').map(Name::from).collect(),
            alias: alias.map(Name::from),
        }
    }

    /// The name this entry binds in the importing scope.
    ///
    /// Without an alias only the first segment is bound; the rest become
    /// properties of it.
    pub fn bound_name(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .or_else(|| self.name_parts.first().map(String::as_str))
    }
}

/// One `name [as alias]` entry of a `from ... import` statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportName {
    pub name: Name,
    pub alias: Option<Name>,
}

impl ImportName {
    pub fn new(name: &str, alias: Option<&str>) -> Self {
        ImportName {
            name: name.into(),
            alias: alias.map(Name::from),
        }
    }

    /// The name this entry binds in the importing scope.
    pub fn bound_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A function parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Arg {
    pub name: Name,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// `import a.b, c as d`
    Import(Vec<ImportAlias>),

    /// `from .x import y, z as w`
    ///
    /// `module` holds path segments: `"."` and `".."` for relative levels,
    /// followed by package names, e.g. `[".", "x"]`.
    ImportFrom {
        module: Vec<Name>,
        names: Vec<ImportName>,
    },

    /// Expression evaluated for its side effects
    Expr(Expr),

    /// `a = b = value`
    Assign { targets: Vec<Name>, value: Expr },

    /// `def name(args): body`
    FunctionDef {
        name: Name,
        args: Vec<Arg>,
        body: Vec<Stmt>,
    },

    /// `return value`
    Return(Expr),

    /// `if condition: true_body else: false_body`
    IfElse {
        condition: Expr,
        true_body: Vec<Stmt>,
        false_body: Vec<Stmt>,
    },
}

impl Stmt {
    pub fn expr(value: Expr) -> Self {
        Stmt::Expr(value)
    }

    pub fn assign<I, S>(targets: I, value: Expr) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Name>,
    {
        Stmt::Assign {
            targets: targets.into_iter().map(Into::into).collect(),
            value,
        }
    }

    pub fn func<I, S>(name: impl Into<Name>, args: I, body: Vec<Stmt>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Name>,
    {
        Stmt::FunctionDef {
            name: name.into(),
            args: args.into_iter().map(|arg| Arg { name: arg.into() }).collect(),
            body,
        }
    }

    pub fn ret(value: Expr) -> Self {
        Stmt::Return(value)
    }

    pub fn if_else(condition: Expr, true_body: Vec<Stmt>, false_body: Vec<Stmt>) -> Self {
        Stmt::IfElse {
            condition,
            true_body,
            false_body,
        }
    }

    pub fn import(aliases: Vec<ImportAlias>) -> Self {
        Stmt::Import(aliases)
    }

    pub fn import_from<I, S>(module: I, names: Vec<ImportName>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Name>,
    {
        Stmt::ImportFrom {
            module: module.into_iter().map(Into::into).collect(),
            names,
        }
    }
}
