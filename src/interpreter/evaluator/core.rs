use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::function::core::Callable, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context.
///
/// This struct holds the function namespace a formula is evaluated against.
/// It is built once per evaluation and never mutated afterwards; the only
/// state that survives between evaluations, the last answer, is resolved by
/// the parser.
pub struct Context {
    /// Callable functions keyed by their lower-case name.
    pub functions: HashMap<String, Callable>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context whose namespace holds every builtin function.
    #[must_use]
    pub fn new() -> Self {
        Self { functions: Callable::namespace() }
    }

    /// Evaluates a parsed formula and returns its final value.
    ///
    /// The result of the whole tree must be finite. A real result that is
    /// mathematically integral and fits an `i64` is returned as an integer.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::tokenize,
    ///     parser::core::parse_formula,
    ///     value::core::Value,
    /// };
    ///
    /// let tokens = tokenize("log(8, 2) + 1").unwrap();
    /// let expr = parse_formula(&tokens, Value::Integer(0)).unwrap();
    ///
    /// assert_eq!(Context::new().evaluate(&expr), Ok(Value::Integer(4)));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        value.finite(expr.position()).map(Value::normalized)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant: numbers, binary
    /// operations, unary minus and calls with zero, one or two arguments.
    /// Operands are evaluated left to right, and the first error aborts the
    /// walk.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression, not yet normalized.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)?.finite(*position)
            },
            Expr::UnaryMinus { expr, .. } => self.eval(expr).map(Self::eval_negate),
            Expr::Call0 { name, position } => self.eval_function(name, &[], *position),
            Expr::Call1 { name,
                          argument,
                          position, } => {
                let argument = self.eval(argument)?;
                self.eval_function(name, &[argument], *position)
            },
            Expr::Call2 { name,
                          first,
                          second,
                          position, } => {
                let first = self.eval(first)?;
                let second = self.eval(second)?;
                self.eval_function(name, &[first, second], *position)
            },
        }
    }
}
