/// Dispatch from a binary operator to its implementation.
pub mod core;
/// Exponentiation.
pub mod power;
/// Addition, subtraction, multiplication and division, including division
/// with remainder.
pub mod scalar;
