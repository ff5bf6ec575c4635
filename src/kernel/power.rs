use crate::kernel::{
    MAX_SERIES_TERMS, SERIES_PRECISION,
    arith::abs,
    domain::{DomainError, MathResult},
    logarithm::{ln, ln_two},
};

/// Largest argument whose exponential is a finite `f64`.
const MAX_EXP_ARGUMENT: f64 = 709.782_712_893_384;
/// Arguments below this underflow to zero.
const MIN_EXP_ARGUMENT: f64 = -745.133_219_101_941_2;
/// Integral exponents up to this magnitude use square-and-multiply.
const MAX_INTEGER_EXPONENT: f64 = 9_007_199_254_740_991.0;

/// Raises `base` to `exponent`.
///
/// Integral exponents are computed by square-and-multiply, so integer powers
/// of integers stay exact while they fit an `f64`. Integral exponents beyond
/// 2^53 are all even and raise `|base|`. Other exponents require a positive
/// base and are computed as `exp(exponent · ln(base))`.
///
/// # Errors
/// - [`DomainError::DivisionByZero`] for zero raised to a negative power.
/// - [`DomainError::ComplexResult`] for a negative base with a fractional
///   exponent.
/// - [`DomainError::Overflow`] if the result is not finite.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, power::power};
///
/// assert_eq!(power(2.0, 10.0), Ok(1024.0));
/// assert_eq!(power(2.0, -2.0), Ok(0.25));
/// assert_eq!(power(10.0, -400.0), Ok(0.0));
/// assert_eq!(power(-1.0, 1e17), Ok(1.0));
/// assert_eq!(power(-8.0, 0.5), Err(DomainError::ComplexResult));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn power(base: f64, exponent: f64) -> MathResult<f64> {
    if exponent.fract() == 0.0 {
        if abs(exponent) <= MAX_INTEGER_EXPONENT {
            return integer_power(base, exponent as i64);
        }
        return real_power(abs(base), exponent);
    }
    if base < 0.0 {
        return Err(DomainError::ComplexResult);
    }
    real_power(base, exponent)
}

/// `base^exponent` for a non-negative base.
fn real_power(base: f64, exponent: f64) -> MathResult<f64> {
    if base > 0.0 {
        return exp(exponent * ln(base)?);
    }
    if exponent > 0.0 {
        Ok(0.0)
    } else {
        Err(DomainError::DivisionByZero)
    }
}

fn integer_power(base: f64, exponent: i64) -> MathResult<f64> {
    let magnitude = exponent.unsigned_abs();
    let result = if exponent < 0 {
        if base == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        let denominator = square_and_multiply(base, magnitude);
        if denominator.is_finite() {
            1.0 / denominator
        } else {
            square_and_multiply(1.0 / base, magnitude)
        }
    } else {
        square_and_multiply(base, magnitude)
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(DomainError::Overflow)
    }
}

fn square_and_multiply(base: f64, exponent: u64) -> f64 {
    let mut result = 1.0;
    let mut factor = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor *= factor;
        }
    }
    result
}

/// The exponential function.
///
/// The argument is split as `x = k·ln 2 + r` with `|r| ≤ ln 2 / 2`; `e^r` is
/// summed as a Taylor series and scaled by `2^k`.
///
/// # Errors
/// [`DomainError::Overflow`] if `e^x` is not a finite `f64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn exp(x: f64) -> MathResult<f64> {
    if x.is_nan() || x > MAX_EXP_ARGUMENT {
        return Err(DomainError::Overflow);
    }
    if x < MIN_EXP_ARGUMENT {
        return Ok(0.0);
    }

    let ln2 = ln_two();
    let halvings = (x / ln2).round();
    let r = x - halvings * ln2;

    let mut term = 1.0;
    let mut sum = 1.0;
    let mut converged = false;
    for n in 1..=MAX_SERIES_TERMS {
        term *= r / n as f64;
        sum += term;
        if abs(term) <= SERIES_PRECISION {
            converged = true;
            break;
        }
    }
    if !converged {
        log::warn!("exp({x}) did not converge within {MAX_SERIES_TERMS} terms");
    }

    let result = scale_by_power_of_two(sum, halvings as i32);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(DomainError::Overflow)
    }
}

/// Multiplies `value` by `2^k`, split in two halves so that neither factor
/// overflows or underflows on its own.
fn scale_by_power_of_two(value: f64, k: i32) -> f64 {
    let first = k / 2;
    let second = k - first;
    value * 2f64.powi(first) * 2f64.powi(second)
}
