/// Arithmetic primitives shared by the evaluator and the other kernel modules.
///
/// Covers division with an explicit zero check, floor division with
/// remainder, factorial, absolute value, and the rounding and snapping helpers
/// used to suppress series noise.
pub mod arith;
/// The constants `e` and `π`, and the arctangent series `π` is built from.
pub mod constants;
/// The kernel's error type.
///
/// Every kernel function reports an invalid operand through [`DomainError`]
/// instead of returning a number that could be mistaken for a result.
pub mod domain;
/// Natural and base-`b` logarithms computed from the `atanh`-style series.
pub mod logarithm;
/// Exponentiation.
///
/// Integral exponents use square-and-multiply; all other exponents go through
/// the kernel's own `exp` and `ln`.
pub mod power;
/// Square, cube and n-th roots with integer snap-back.
pub mod roots;
/// Sum, mean and sample standard deviation.
pub mod stats;
/// Trigonometric functions in degrees.
pub mod trig;

pub use domain::{DomainError, MathResult};

/// Convergence threshold shared by the arctangent, exponential and
/// trigonometric series.
pub const SERIES_PRECISION: f64 = 1e-17;

/// Convergence threshold of the logarithm series.
pub const LN_PRECISION: f64 = 1e-20;

/// Upper bound on the number of terms any series may sum.
///
/// Every series used by the kernel converges well before this bound for the
/// arguments it is called with; the cap only guarantees termination.
pub const MAX_SERIES_TERMS: usize = 10_000;

/// Number of fractional digits roots are rounded to before snapping.
pub const ROUND_DIGITS: i32 = 10;

/// Distance within which a root is snapped to the nearest integer.
pub const ROOT_SNAP_TOLERANCE: f64 = 1e-10;
