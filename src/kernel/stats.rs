use crate::kernel::{
    arith::div,
    domain::{DomainError, MathResult},
    roots::sqrt,
};

#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean.
///
/// # Errors
/// [`DomainError::InsufficientData`] for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(DomainError::InsufficientData);
    }
    div(sum(values), values.len() as f64)
}

/// Sample standard deviation,
/// `sqrt((Σx² − N·mean²) / (N − 1))`.
///
/// Rounding can push the variance of nearly identical samples a hair below
/// zero; it is clamped to zero before the root is taken.
///
/// # Errors
/// [`DomainError::InsufficientData`] for fewer than two samples.
///
/// # Example
/// ```
/// use kalkulacka::kernel::stats::sample_std_dev;
///
/// let s = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(s, 2.138_089_935_3);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn sample_std_dev(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(DomainError::InsufficientData);
    }
    let n = values.len() as f64;
    let mean = mean(values)?;
    let sum_of_squares: f64 = values.iter().map(|x| x * x).sum();
    let variance = div(sum_of_squares - n * mean * mean, n - 1.0)?;
    sqrt(variance.max(0.0))
}
