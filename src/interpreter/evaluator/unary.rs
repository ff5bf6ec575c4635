use crate::{
    interpreter::{evaluator::core::Context, value::core::Value},
    util::num::i64_to_f64,
};

impl Context {
    /// Negates a value.
    ///
    /// Integers stay integers unless the negation overflows, which only
    /// happens for `i64::MIN`; that value is promoted to a real.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_negate(Value::Integer(5)), Value::Integer(-5));
    /// assert_eq!(Context::eval_negate(Value::Real(-2.5)), Value::Real(2.5));
    /// assert_eq!(Context::eval_negate(Value::Integer(i64::MIN)),
    ///            Value::Real(9_223_372_036_854_775_808.0));
    /// ```
    #[must_use]
    pub fn eval_negate(value: Value) -> Value {
        match value {
            Value::Integer(n) => n.checked_neg()
                                  .map_or_else(|| Value::Real(-i64_to_f64(n)), Value::Integer),
            Value::Real(r) => Value::Real(-r),
        }
    }
}
