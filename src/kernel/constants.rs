use crate::kernel::{MAX_SERIES_TERMS, SERIES_PRECISION, arith::abs};

/// Number of terms of `Σ 1/k!` summed by [`e`].
pub const E_TERMS: u32 = 20;

/// Euler's number as the truncated Taylor series `Σ 1/k!`, `k = 0..E_TERMS`.
///
/// # Example
/// ```
/// use kalkulacka::kernel::constants::e;
///
/// assert!((e() - 2.718_281_828_459_045).abs() < 1e-15);
/// ```
#[must_use]
pub fn e() -> f64 {
    let mut sum = 1.0;
    let mut term = 1.0;
    for k in 1..E_TERMS {
        term /= f64::from(k);
        sum += term;
    }
    sum
}

/// Arctangent in radians.
///
/// For `|x| < 1` this is the alternating series
/// `x - x³/3 + x⁵/5 - …`, summed until the power drops below
/// [`SERIES_PRECISION`]. Arguments outside that range are reflected through
/// `atan(x) = ±π/2 - atan(1/x)`.
#[must_use]
pub fn arctan(x: f64) -> f64 {
    let magnitude = abs(x);
    if magnitude > 1.0 {
        let half_pi = pi() / 2.0;
        let reflected = half_pi - arctan(1.0 / magnitude);
        return if x < 0.0 { -reflected } else { reflected };
    }
    if magnitude == 1.0 {
        return x * pi() / 4.0;
    }
    arctan_series(x)
}

#[allow(clippy::cast_precision_loss)]
fn arctan_series(x: f64) -> f64 {
    let mut term = x;
    let mut result = x;
    for n in 1..=MAX_SERIES_TERMS {
        if abs(term) <= SERIES_PRECISION {
            return result;
        }
        term *= -x * x;
        result += term / (2 * n + 1) as f64;
    }
    log::warn!("arctan({x}) did not converge within {MAX_SERIES_TERMS} terms");
    result
}

/// `π` by Machin's formula, `4·(4·atan(1/5) − atan(1/239))`.
///
/// # Example
/// ```
/// use kalkulacka::kernel::constants::pi;
///
/// assert!((pi() - 3.141_592_653_589_793).abs() < 1e-15);
/// ```
#[must_use]
pub fn pi() -> f64 {
    4.0 * (4.0 * arctan_series(1.0 / 5.0) - arctan_series(1.0 / 239.0))
}
