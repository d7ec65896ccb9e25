//! Expression Types

use super::operators::BinaryOp;
use crate::Name;

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Positional call: `func(args...)`
    Call { func: Box<Expr>, args: Vec<Expr> },

    /// Attribute access: `value.attr`
    Attribute { value: Box<Expr>, attr: Name },

    /// Binary operation: `left <op> right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Variable reference
    Name(Name),

    /// `None`
    None,

    /// `True` / `False`
    Bool(bool),

    /// Integer literal
    Int(i64),

    /// String literal
    Str(String),

    /// List literal: `[a, b, c]`
    List(Vec<Expr>),
}

impl Expr {
    pub fn name(name: impl Into<Name>) -> Self {
        Expr::Name(name.into())
    }

    pub fn int(value: i64) -> Self {
        Expr::Int(value)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
        }
    }

    pub fn attr(value: Expr, attr: impl Into<Name>) -> Self {
        Expr::Attribute {
            value: Box::new(value),
            attr: attr.into(),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn list(elements: Vec<Expr>) -> Self {
        Expr::List(elements)
    }
}
