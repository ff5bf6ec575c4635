use crate::kernel::{
    LN_PRECISION, MAX_SERIES_TERMS,
    arith::abs,
    domain::{DomainError, MathResult},
};

/// Natural logarithm.
///
/// `ln(1)` is exactly zero. Arguments above one are halved into `[1, 2)`,
/// adding `ln 2` per halving, and the remainder is summed as
/// `2·Σ x^(2k+1)/(2k+1)` with `x = (a − 1)/(a + 1)` until the term drops
/// below [`LN_PRECISION`]. Arguments in `(0, 1)` use `ln(a) = −ln(1/a)`;
/// subnormal arguments are first doubled into the normal range.
///
/// # Errors
/// - [`DomainError::NonPositiveLogarithm`] for `a ≤ 0`.
/// - [`DomainError::Overflow`] for a non-finite argument.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, logarithm::ln};
///
/// assert_eq!(ln(1.0), Ok(0.0));
/// assert!((ln(2.718_281_828_459_045).unwrap() - 1.0).abs() < 1e-15);
/// assert_eq!(ln(0.0), Err(DomainError::NonPositiveLogarithm));
/// ```
pub fn ln(a: f64) -> MathResult<f64> {
    if a.is_nan() || a.is_infinite() {
        return Err(DomainError::Overflow);
    }
    if a <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm);
    }
    if a == 1.0 {
        return Ok(0.0);
    }
    if a < f64::MIN_POSITIVE {
        let mut scaled = a;
        let mut doublings = 0u32;
        while scaled < f64::MIN_POSITIVE {
            scaled *= 2.0;
            doublings += 1;
        }
        return Ok(ln(scaled)? - f64::from(doublings) * ln_two());
    }
    if a < 1.0 {
        return Ok(-ln(1.0 / a)?);
    }

    let mut reduced = a;
    let mut halvings = 0u32;
    while reduced >= 2.0 {
        reduced /= 2.0;
        halvings += 1;
    }
    Ok(f64::from(halvings) * ln_two() + ln_series(reduced))
}

/// Logarithm of `a` in base `b`, `ln(a) / ln(b)`.
///
/// # Errors
/// - [`DomainError::NonPositiveLogarithm`] for `a ≤ 0`.
/// - [`DomainError::InvalidLogarithmBase`] for `b ≤ 0` or `b = 1`.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, logarithm::log};
///
/// assert_eq!(log(8.0, 2.0), Ok(3.0));
/// assert_eq!(log(8.0, 1.0), Err(DomainError::InvalidLogarithmBase));
/// ```
pub fn log(a: f64, b: f64) -> MathResult<f64> {
    if a <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm);
    }
    if b <= 0.0 || b == 1.0 {
        return Err(DomainError::InvalidLogarithmBase);
    }
    Ok(ln(a)? / ln(b)?)
}

/// `ln 2`, summed with the same series as every other logarithm.
pub(crate) fn ln_two() -> f64 {
    ln_series(2.0)
}

fn ln_series(a: f64) -> f64 {
    let x = (a - 1.0) / (a + 1.0);
    let mut result = 0.0;
    let mut power = x;
    let mut divisor = 1.0;
    for _ in 0..MAX_SERIES_TERMS {
        let term = power / divisor;
        if abs(term) <= LN_PRECISION {
            return 2.0 * result;
        }
        result += term;
        power *= x * x;
        divisor += 2.0;
    }
    log::warn!("ln({a}) did not converge within {MAX_SERIES_TERMS} terms");
    2.0 * result
}
