//! Binary Operators
//!
//! Operator tags carried by `Expr::Binary`. The transformer never lowers these
//! to native infix operators; each tag names an entry in the runtime's
//! operator-dispatch table instead.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Mod,
    Pow,

    // Bitwise
    LShift,
    RShift,
    BitAnd,
    BitOr,
    BitXor,
}

/// How the runtime evaluates an operator when both operands are numbers.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum NumberOp {
    /// A native infix operator token, e.g. `+`.
    Infix(&'static str),
    /// A prelude helper function taking `(left, right)`.
    Helper(&'static str),
}

impl BinaryOp {
    /// Every operator, in dispatch-table order.
    pub const ALL: [BinaryOp; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::TrueDiv,
        Self::FloorDiv,
        Self::Mod,
        Self::Pow,
        Self::LShift,
        Self::RShift,
        Self::BitAnd,
        Self::BitOr,
        Self::BitXor,
    ];

    /// Returns the stable runtime tag for this operator.
    ///
    /// Emitted code calls `$tern.operators.<tag>`, and the prelude builds its
    /// dispatch table from the same tags.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::TrueDiv => "truediv",
            Self::FloorDiv => "floordiv",
            Self::Mod => "mod",
            Self::Pow => "pow",
            Self::LShift => "lshift",
            Self::RShift => "rshift",
            Self::BitAnd => "and",
            Self::BitOr => "or",
            Self::BitXor => "xor",
        }
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::TrueDiv => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::LShift => "<<",
            Self::RShift => ">>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
        }
    }

    /// Name of the overload method looked up on the left operand.
    pub fn overload_method(self) -> String {
        format!("__{}__", self.tag())
    }

    /// Native evaluation used by the runtime's numeric fast path.
    ///
    /// Floor division, modulo and power differ from the target's native
    /// operators (sign of the remainder, integer flooring), so they go
    /// through prelude helpers.
    pub const fn number_op(self) -> NumberOp {
        match self {
            Self::Add => NumberOp::Infix("+"),
            Self::Sub => NumberOp::Infix("-"),
            Self::Mul => NumberOp::Infix("*"),
            Self::TrueDiv => NumberOp::Infix("/"),
            Self::FloorDiv => NumberOp::Helper("numberFloorDiv"),
            Self::Mod => NumberOp::Helper("numberMod"),
            Self::Pow => NumberOp::Helper("numberPow"),
            Self::LShift => NumberOp::Infix("<<"),
            Self::RShift => NumberOp::Infix(">>"),
            Self::BitAnd => NumberOp::Infix("&"),
            Self::BitOr => NumberOp::Infix("|"),
            Self::BitXor => NumberOp::Infix("^"),
        }
    }
}
