use crate::interpreter::value::core::Value;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each node owns its children, so a parsed formula is always a tree. Every
/// variant records the offset of the token that produced it, which is the
/// offset reported when evaluating that node fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, already decoded.
    ///
    /// Literals, the last answer and the bare constants `e` and `π` all become
    /// `Number` nodes during parsing.
    Number {
        /// The constant value.
        value:    Value,
        /// Offset in the formula.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// Arithmetic negation of a single factor (e.g. `-x`).
    UnaryMinus {
        /// The operand expression.
        expr:     Box<Self>,
        /// Offset of the minus sign.
        position: usize,
    },
    /// Call without arguments, e.g. `pi()`.
    Call0 {
        /// Name of the function as written.
        name:     String,
        /// Offset of the name.
        position: usize,
    },
    /// Call with one argument, e.g. `sin(x)`.
    Call1 {
        /// Name of the function as written.
        name:     String,
        /// The argument.
        argument: Box<Self>,
        /// Offset of the name.
        position: usize,
    },
    /// Call with two arguments, e.g. `log(x, b)`.
    Call2 {
        /// Name of the function as written.
        name:     String,
        /// The first argument.
        first:    Box<Self>,
        /// The second argument.
        second:   Box<Self>,
        /// Offset of the name.
        position: usize,
    },
}

impl Expr {
    /// Gets the formula offset from `self`.
    /// ## Example
    /// ```
    /// use kalkulacka::{ast::Expr, interpreter::value::core::Value};
    ///
    /// let expr = Expr::Number { value:    Value::Integer(7),
    ///                           position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryMinus { position, .. }
            | Self::Call0 { position, .. }
            | Self::Call1 { position, .. }
            | Self::Call2 { position, .. } => *position,
        }
    }
}

/// Fully parenthesized rendering, used in debug logs.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryMinus { expr, .. } => write!(f, "(-{expr})"),
            Self::Call0 { name, .. } => write!(f, "{name}()"),
            Self::Call1 { name, argument, .. } => write!(f, "{name}({argument})"),
            Self::Call2 { name,
                          first,
                          second,
                          .. } => write!(f, "{name}({first}, {second})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^` or `**`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
