use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    kernel::{
        DomainError,
        arith::{add, div, floor_div_rem, mul, sub},
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers are combined with checked integer arithmetic; a result
    /// that overflows `i64` is recomputed in real arithmetic instead. Integer
    /// division stays integral only when the divisor divides the dividend
    /// exactly. As soon as either operand is real, both are promoted and the
    /// kernel's real arithmetic is used. The operator must be one of `Add`,
    /// `Sub`, `Mul` or `Div`; other operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Errors
    /// `RuntimeError::Domain` with `DivisionByZero` for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let exact = Context::eval_scalar_op(BinaryOperator::Div, Value::Integer(8), Value::Integer(2), 1);
    /// assert_eq!(exact, Ok(Value::Integer(4)));
    ///
    /// let inexact = Context::eval_scalar_op(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 1);
    /// assert_eq!(inexact, Ok(Value::Real(3.5)));
    ///
    /// let promoted = Context::eval_scalar_op(BinaryOperator::Mul, Value::Integer(i64::MAX), Value::Integer(2), 1);
    /// assert!(matches!(promoted, Ok(Value::Real(_))));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: Value,
                          right: Value,
                          position: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        use Value::{Integer, Real};

        if let (Integer(a), Integer(b)) = (left, right) {
            let exact = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => {
                    if b == 0 {
                        return Err(RuntimeError::domain(DomainError::DivisionByZero, position));
                    }
                    match a.checked_rem(b) {
                        Some(0) => a.checked_div(b),
                        _ => None,
                    }
                },
                Pow => unreachable!(),
            };
            if let Some(result) = exact {
                return Ok(Integer(result));
            }
        }

        let left = left.as_real();
        let right = right.as_real();

        Ok(Real(match op {
                    Add => add(left, right),
                    Sub => sub(left, right),
                    Mul => mul(left, right),
                    Div => div(left, right).map_err(|source| RuntimeError::domain(source, position))?,
                    Pow => unreachable!(),
                }))
    }

    /// Evaluates the two operands of a division and returns the floor
    /// quotient and the remainder.
    ///
    /// The remainder takes the sign of the divisor. Both operands must be
    /// integral after evaluation.
    ///
    /// # Parameters
    /// - `left`: The dividend expression.
    /// - `right`: The divisor expression.
    /// - `position`: Offset of the `/` operator.
    ///
    /// # Errors
    /// - `RuntimeError::ExpectedInteger` if an operand has a fractional part.
    /// - `RuntimeError::Domain` with `DivisionByZero` for a zero divisor.
    /// - Any error raised while evaluating the operands.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let minus_seven = Expr::Number { value:    Value::Integer(-7),
    ///                                  position: 0, };
    /// let two = Expr::Number { value:    Value::Integer(2),
    ///                          position: 3, };
    ///
    /// assert_eq!(Context::new().eval_division_with_remainder(&minus_seven, &two, 2), Ok((-4, 1)));
    /// ```
    pub fn eval_division_with_remainder(&self,
                                        left: &Expr,
                                        right: &Expr,
                                        position: usize)
                                        -> EvalResult<(i64, i64)> {
        let dividend = self.evaluate(left)?.as_integer(left.position())?;
        let divisor = self.evaluate(right)?.as_integer(right.position())?;

        floor_div_rem(dividend, divisor).map_err(|source| RuntimeError::domain(source, position))
    }
}
