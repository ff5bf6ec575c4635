use crate::kernel::{
    ROUND_DIGITS,
    domain::{DomainError, MathResult},
};

/// Largest argument whose factorial is a finite `f64`.
pub const MAX_FACTORIAL_ARGUMENT: f64 = 170.0;

/// Largest magnitude below which rounding to [`ROUND_DIGITS`] fractional
/// digits can change an `f64`.
const ROUNDING_LIMIT: f64 = 1e15;

#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
/// [`DomainError::DivisionByZero`] if `b` is zero.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, arith::div};
///
/// assert_eq!(div(7.0, 2.0), Ok(3.5));
/// assert_eq!(div(5.0, 0.0), Err(DomainError::DivisionByZero));
/// ```
pub fn div(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// Computes the floor quotient and the remainder of `a / b`.
///
/// The quotient is rounded towards negative infinity and the remainder takes
/// the sign of the divisor, so `a == q * b + r` always holds.
///
/// # Errors
/// - [`DomainError::DivisionByZero`] if `b` is zero.
/// - [`DomainError::Overflow`] for `i64::MIN / -1`.
///
/// # Example
/// ```
/// use kalkulacka::kernel::arith::floor_div_rem;
///
/// assert_eq!(floor_div_rem(5, 3), Ok((1, 2)));
/// assert_eq!(floor_div_rem(-7, 2), Ok((-4, 1)));
/// ```
pub fn floor_div_rem(a: i64, b: i64) -> MathResult<(i64, i64)> {
    if b == 0 {
        return Err(DomainError::DivisionByZero);
    }
    let quotient = a.checked_div(b).ok_or(DomainError::Overflow)?;
    let remainder = a.checked_rem(b).ok_or(DomainError::Overflow)?;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Ok((quotient - 1, remainder + b))
    } else {
        Ok((quotient, remainder))
    }
}

/// Computes `n!` as an iterative product.
///
/// The product is exact for every `n` up to 22; larger arguments carry the
/// usual `f64` rounding.
///
/// # Errors
/// - [`DomainError::NegativeFactorial`] for `n < 0`.
/// - [`DomainError::FractionalFactorial`] if `n` is not a whole number.
/// - [`DomainError::Overflow`] if `n!` exceeds the `f64` range.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, arith::factorial};
///
/// assert_eq!(factorial(5.0), Ok(120.0));
/// assert_eq!(factorial(0.0), Ok(1.0));
/// assert_eq!(factorial(-3.0), Err(DomainError::NegativeFactorial));
/// ```
pub fn factorial(n: f64) -> MathResult<f64> {
    if n < 0.0 {
        return Err(DomainError::NegativeFactorial);
    }
    if n.fract() != 0.0 {
        return Err(DomainError::FractionalFactorial);
    }
    if n > MAX_FACTORIAL_ARGUMENT {
        return Err(DomainError::Overflow);
    }

    let mut product = 1.0;
    let mut k = 2.0;
    while k <= n {
        product *= k;
        k += 1.0;
    }
    Ok(product)
}

#[must_use]
pub fn abs(a: f64) -> f64 {
    if a < 0.0 { -a } else { a }
}

/// Rounds `value` to `digits` fractional digits.
///
/// Values too large to carry that many fractional digits are returned as-is.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    if abs(value) >= ROUNDING_LIMIT {
        return value;
    }
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Rounds `value` to the crate-wide number of fractional digits.
#[must_use]
pub fn round_default(value: f64) -> f64 {
    round_to(value, ROUND_DIGITS)
}

/// Replaces `value` by the nearest integer when it lies within `tolerance` of
/// it.
#[must_use]
pub fn snap_to_integer(value: f64, tolerance: f64) -> f64 {
    let nearest = value.round();
    if abs(value - nearest) < tolerance {
        nearest
    } else {
        value
    }
}
