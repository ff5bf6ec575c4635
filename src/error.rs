/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// formula: characters that start no token, unbalanced parentheses, unknown
/// bare names, calls with too many arguments, and literals that do not fit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// functions, arity mismatches, kernel domain errors, and results that are not
/// finite.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

pub use crate::kernel::DomainError;
