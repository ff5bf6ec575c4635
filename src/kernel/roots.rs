use crate::kernel::{
    ROOT_SNAP_TOLERANCE,
    arith::{abs, round_default},
    domain::{DomainError, MathResult},
    power::power,
};

/// Square root, `a^0.5` refined by a Newton step and rounded to ten
/// fractional digits.
///
/// If the nearest integer squared lies within [`ROOT_SNAP_TOLERANCE`] of `a`,
/// that integer is returned instead, so perfect squares come back exact.
///
/// # Errors
/// [`DomainError::NegativeSquareRoot`] for `a < 0`.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, roots::sqrt};
///
/// assert_eq!(sqrt(16.0), Ok(4.0));
/// assert_eq!(sqrt(2.0), Ok(1.414_213_562_4));
/// assert_eq!(sqrt(-1.0), Err(DomainError::NegativeSquareRoot));
/// ```
pub fn sqrt(a: f64) -> MathResult<f64> {
    if a < 0.0 {
        return Err(DomainError::NegativeSquareRoot);
    }
    let root = round_default(newton_step(power(a, 0.5)?, a, 2.0));
    let candidate = root.round();
    if abs(candidate * candidate - a) < ROOT_SNAP_TOLERANCE {
        Ok(candidate)
    } else {
        Ok(root)
    }
}

/// The `n`-th root of `a`, `sign(a)·|a|^(1/n)`.
///
/// For an integral `n ≥ 2` the estimate is refined by a Newton step.
/// The result snaps to the nearest integer when that integer raised to the
/// `n`-th power lies within [`ROOT_SNAP_TOLERANCE`] of `a`.
///
/// # Errors
/// - [`DomainError::DivisionByZero`] for `n = 0`.
/// - [`DomainError::EvenRootOfNegative`] for `a < 0` unless `n` is an odd
///   integer.
///
/// # Example
/// ```
/// use kalkulacka::kernel::{DomainError, roots::nthroot};
///
/// assert_eq!(nthroot(27.0, 3.0), Ok(3.0));
/// assert_eq!(nthroot(-8.0, 3.0), Ok(-2.0));
/// assert_eq!(nthroot(-16.0, 4.0), Err(DomainError::EvenRootOfNegative));
/// ```
pub fn nthroot(a: f64, n: f64) -> MathResult<f64> {
    if n == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    if a < 0.0 && !is_odd_integer(n) {
        return Err(DomainError::EvenRootOfNegative);
    }

    let magnitude = newton_step(power(abs(a), 1.0 / n)?, abs(a), n);
    let root = if a < 0.0 { -magnitude } else { magnitude };
    let candidate = root.round();
    match power(candidate, n) {
        Ok(raised) if abs(raised - a) < ROOT_SNAP_TOLERANCE => Ok(candidate),
        _ => Ok(root),
    }
}

/// Cube root.
///
/// # Errors
/// Never fails for finite input; the signature matches the other roots.
pub fn cbrt(a: f64) -> MathResult<f64> {
    nthroot(a, 3.0)
}

/// One Newton iteration for `xⁿ = a` from `estimate`, with `n = degree` and
/// `a = radicand`: `x − (xⁿ − a)/(n·xⁿ⁻¹)`.
///
/// Only integral degrees of at least two are refined. The estimate is kept
/// when `xⁿ⁻¹` is zero or overflows.
fn newton_step(estimate: f64, radicand: f64, degree: f64) -> f64 {
    if estimate == 0.0 || degree < 2.0 || degree.fract() != 0.0 {
        return estimate;
    }
    match power(estimate, degree - 1.0) {
        Ok(lower) if lower != 0.0 => ((degree - 1.0) * estimate + radicand / lower) / degree,
        _ => estimate,
    }
}

fn is_odd_integer(n: f64) -> bool {
    n.fract() == 0.0 && abs(n % 2.0) == 1.0
}
