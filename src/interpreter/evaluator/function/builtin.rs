//! Adapters giving infallible kernel functions the signature the function
//! namespace expects.

use crate::kernel::{MathResult, arith, constants};

/// Absolute value.
///
/// # Example
/// ```
/// use kalkulacka::interpreter::evaluator::function::builtin::abs;
///
/// assert_eq!(abs(-2.5), Ok(2.5));
/// ```
pub fn abs(a: f64) -> MathResult<f64> {
    Ok(arith::abs(a))
}

/// Euler's number, as callable `e()`.
pub fn e() -> MathResult<f64> {
    Ok(constants::e())
}

/// `π`, as callable `pi()` or `π()`.
pub fn pi() -> MathResult<f64> {
    Ok(constants::pi())
}
