//! Target Syntax Tree
//!
//! Nodes are built once by the transformer and consumed once by the printer;
//! nothing mutates them in between.

/// An identifier in the generated program.
pub type Name = String;

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// A flat run of statements; nested runs flatten when printed.
    Statements(Vec<Stmt>),

    /// `value;`
    Expr(Expr),

    /// `function name(params) { body }`
    Function {
        name: Name,
        params: Vec<Name>,
        body: Vec<Stmt>,
    },

    /// `return value;`
    Return(Expr),

    /// `var name;` or `var name = init;`
    Var { name: Name, init: Option<Expr> },

    /// `if (condition) { then_body } else { else_body }`
    If {
        condition: Expr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
}

/// Left-hand side of an assignment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignTarget {
    /// A plain variable.
    Variable(Name),
    /// A property of an object, e.g. `(a).b` or `((a).b).c`.
    Property { object: Box<Expr>, property: Name },
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// `target = value`; nests right-associatively for chained assignment.
    Assign {
        target: AssignTarget,
        value: Box<Expr>,
    },

    /// `(object).property`
    Property { object: Box<Expr>, property: Name },

    /// `callee(args...)`
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// Variable reference. May be a dotted runtime path such as `$tern.bool`.
    Name(Name),

    /// Integer literal
    Number(i64),

    /// `null`
    Null,

    /// String literal, stored unescaped
    Str(String),

    /// `[elements...]`
    Array(Vec<Expr>),

    /// `true` / `false`
    Bool(bool),
}

impl Stmt {
    pub fn expr(value: Expr) -> Self {
        Stmt::Expr(value)
    }

    pub fn ret(value: Expr) -> Self {
        Stmt::Return(value)
    }

    /// `var name;`
    pub fn var(name: impl Into<Name>) -> Self {
        Stmt::Var {
            name: name.into(),
            init: None,
        }
    }

    /// `var name = init;`
    pub fn var_init(name: impl Into<Name>, init: Expr) -> Self {
        Stmt::Var {
            name: name.into(),
            init: Some(init),
        }
    }

    /// `target = value;`
    pub fn assign(target: impl Into<AssignTarget>, value: Expr) -> Self {
        Stmt::Expr(Expr::assign(target, value))
    }
}

impl Expr {
    pub fn name(name: impl Into<Name>) -> Self {
        Expr::Name(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn property(object: Expr, property: impl Into<Name>) -> Self {
        Expr::Property {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn assign(target: impl Into<AssignTarget>, value: Expr) -> Self {
        Expr::Assign {
            target: target.into(),
            value: Box::new(value),
        }
    }
}

impl AssignTarget {
    pub fn property(object: Expr, property: impl Into<Name>) -> Self {
        AssignTarget::Property {
            object: Box::new(object),
            property: property.into(),
        }
    }
}

impl From<&str> for AssignTarget {
    fn from(name: &str) -> Self {
        AssignTarget::Variable(name.to_string())
    }
}

impl From<String> for AssignTarget {
    fn from(name: String) -> Self {
        AssignTarget::Variable(name)
    }
}

impl From<&String> for AssignTarget {
    fn from(name: &String) -> Self {
        AssignTarget::Variable(name.clone())
    }
}
