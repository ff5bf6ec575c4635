use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    kernel::power::power,
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer base raised to a non-negative integer exponent uses checked
    /// integer arithmetic and stays an integer while the result fits. Every
    /// other combination, including integer powers that overflow, is computed
    /// by the kernel's `power`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Errors
    /// - `RuntimeError::Domain` with `ComplexResult` for a negative base and a
    ///   fractional exponent.
    /// - `RuntimeError::Domain` with `DivisionByZero` for zero raised to a
    ///   negative power.
    /// - `RuntimeError::Overflow` if the result is not finite.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(10), 1);
    /// assert_eq!(result, Ok(Value::Integer(1024)));
    ///
    /// let result = Context::eval_pow(Value::Integer(2), Value::Integer(-2), 1);
    /// assert_eq!(result, Ok(Value::Real(0.25)));
    /// ```
    pub fn eval_pow(base: Value, exponent: Value, position: usize) -> EvalResult<Value> {
        if let (Value::Integer(b), Value::Integer(e)) = (base, exponent)
           && let Ok(e) = u32::try_from(e)
           && let Some(result) = b.checked_pow(e)
        {
            return Ok(Value::Integer(result));
        }

        power(base.as_real(), exponent.as_real()).map(Value::Real)
                                                 .map_err(|source| RuntimeError::domain(source, position))
    }
}
