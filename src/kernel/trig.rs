use crate::kernel::{
    MAX_SERIES_TERMS, SERIES_PRECISION,
    arith::{abs, snap_to_integer},
    constants::pi,
    domain::{DomainError, MathResult},
};

/// Sine of an angle in degrees.
///
/// The angle is reduced modulo 360 and folded into `[0°, 45°]` with the
/// quadrant identities, so multiples of 90° land exactly on `0` or `±1`.
///
/// # Errors
/// [`DomainError::Overflow`] for a non-finite angle.
///
/// # Example
/// ```
/// use kalkulacka::kernel::trig::sin;
///
/// assert_eq!(sin(90.0), Ok(1.0));
/// assert_eq!(sin(270.0), Ok(-1.0));
/// ```
pub fn sin(degrees: f64) -> MathResult<f64> {
    let reduced = reduce(degrees)?;
    Ok(snap_to_integer(sin_folded(reduced), SERIES_PRECISION))
}

/// Cosine of an angle in degrees.
///
/// # Errors
/// [`DomainError::Overflow`] for a non-finite angle.
///
/// # Example
/// ```
/// use kalkulacka::kernel::trig::cos;
///
/// assert_eq!(cos(180.0), Ok(-1.0));
/// assert_eq!(cos(-360.0), Ok(1.0));
/// ```
pub fn cos(degrees: f64) -> MathResult<f64> {
    let reduced = reduce(degrees)?;
    Ok(snap_to_integer(cos_folded(reduced), SERIES_PRECISION))
}

/// Tangent of an angle in degrees.
///
/// # Errors
/// [`DomainError::UndefinedTangent`] where the cosine vanishes.
pub fn tg(degrees: f64) -> MathResult<f64> {
    let cosine = cos(degrees)?;
    if abs(cosine) < SERIES_PRECISION {
        return Err(DomainError::UndefinedTangent);
    }
    Ok(snap_to_integer(sin(degrees)? / cosine, SERIES_PRECISION))
}

/// Cotangent of an angle in degrees.
///
/// # Errors
/// [`DomainError::UndefinedCotangent`] where the sine vanishes.
pub fn cotg(degrees: f64) -> MathResult<f64> {
    let sine = sin(degrees)?;
    if abs(sine) < SERIES_PRECISION {
        return Err(DomainError::UndefinedCotangent);
    }
    Ok(snap_to_integer(cos(degrees)? / sine, SERIES_PRECISION))
}

fn reduce(degrees: f64) -> MathResult<f64> {
    if !degrees.is_finite() {
        return Err(DomainError::Overflow);
    }
    Ok(degrees.rem_euclid(360.0))
}

// Both folds take an angle in [0, 360].
fn sin_folded(degrees: f64) -> f64 {
    if degrees >= 180.0 {
        return -sin_folded(degrees - 180.0);
    }
    let degrees = if degrees > 90.0 { 180.0 - degrees } else { degrees };
    if degrees > 45.0 {
        cos_series(radians(90.0 - degrees))
    } else {
        sin_series(radians(degrees))
    }
}

fn cos_folded(degrees: f64) -> f64 {
    if degrees >= 180.0 {
        return -cos_folded(degrees - 180.0);
    }
    if degrees > 90.0 {
        return -cos_folded(180.0 - degrees);
    }
    if degrees > 45.0 {
        sin_series(radians(90.0 - degrees))
    } else {
        cos_series(radians(degrees))
    }
}

fn radians(degrees: f64) -> f64 {
    degrees * pi() / 180.0
}

#[allow(clippy::cast_precision_loss)]
fn sin_series(x: f64) -> f64 {
    let mut result = 0.0;
    let mut term = x;
    for n in 1..=MAX_SERIES_TERMS {
        if abs(term) <= SERIES_PRECISION {
            return result;
        }
        result += term;
        let n = n as f64;
        term *= -x * x / ((2.0 * n) * (2.0 * n + 1.0));
    }
    log::warn!("sin series for {x} rad did not converge within {MAX_SERIES_TERMS} terms");
    result
}

#[allow(clippy::cast_precision_loss)]
fn cos_series(x: f64) -> f64 {
    let mut result = 1.0;
    let mut term = 1.0;
    for n in 1..=MAX_SERIES_TERMS {
        if abs(term) <= SERIES_PRECISION {
            return result;
        }
        let n = n as f64;
        term *= -x * x / ((2.0 * n - 1.0) * (2.0 * n));
        result += term;
    }
    log::warn!("cos series for {x} rad did not converge within {MAX_SERIES_TERMS} terms");
    result
}
