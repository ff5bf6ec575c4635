/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponentiation levels of the
/// grammar.
pub mod binary;
/// Parser entry points and shared parsing state.
pub mod core;
/// Unary minus, literals, names, calls and parentheses.
pub mod unary;
/// Helpers shared by the other parsing modules.
pub mod utils;
