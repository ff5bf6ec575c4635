/// Binary operator evaluation logic.
///
/// Handles the execution of the arithmetic operators, including integer
/// overflow promotion, exact integer division and division with remainder.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the function namespace it evaluates
/// against, and final result normalization.
pub mod core;

/// Function evaluation.
///
/// Handles calls of the builtin kernel functions and argument checking.
pub mod function;
