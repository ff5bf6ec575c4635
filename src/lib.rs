//! # kalkulacka
//!
//! kalkulacka is an arithmetic-expression evaluator written in Rust.
//! It accepts a formula such as `2+3*4`, `log(8,2)` or `1,5+2,5`, evaluates it
//! with its own series-based math kernel, and returns the formatted result.
//! Formulas may be written in binary, octal or decimal, and may use a comma
//! as the decimal separator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{BinaryOperator, Expr},
    base::{
        Base,
        format::{render_remainder, render_value},
        preprocess::{close_parentheses, preprocess},
    },
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::core::parse_formula,
        value::core::Value,
    },
};

/// Defines the structure of a parsed formula.
///
/// This module declares the `Expr` enum and the operator type that represent
/// a formula as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the node types for numbers, operators and calls.
/// - Attaches the formula offset to every node for error reporting.
pub mod ast;
/// Numeral bases, formula preprocessing and result formatting.
///
/// Everything that depends on how a formula is written or displayed lives
/// here, so the lexer, parser and evaluator only ever deal with decimal
/// numbers.
///
/// # Responsibilities
/// - Converts binary and octal literals to decimal.
/// - Tells decimal commas apart from argument separators.
/// - Renders values in the active base.
pub mod base;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a formula. Every error carries the offset in the formula at
/// which it was detected.
///
/// # Responsibilities
/// - Defines error enums for structural and semantic failures.
/// - Re-exports the kernel's domain error.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a single formula.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The numeric kernel.
///
/// Every elementary function the calculator offers is computed here from
/// first principles, using only the four arithmetic operations: series for
/// the transcendental functions, square-and-multiply for integer powers, and
/// Machin's formula for `π`. No routine of the standard library's floating
/// point math is used.
pub mod kernel;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Text returned by [`evaluate`] when a formula cannot be evaluated.
pub const ERROR_SENTINEL: &str = "Error";

/// The outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// The result as it should be displayed.
    pub text:  String,
    /// The numeric result, suitable as the next last answer.
    ///
    /// For a division rendered as quotient and remainder this is the
    /// quotient.
    pub value: Value,
}

/// Evaluates a formula and returns the formatted result.
///
/// This runs the whole pipeline: open parentheses are closed, the formula is
/// preprocessed for `base`, tokenized, parsed and evaluated, and the value is
/// rendered. In a non-decimal base, a formula whose top-level operation is a
/// division is rendered as quotient and remainder.
///
/// # Parameters
/// - `formula`: The formula as typed by the user.
/// - `base`: The base the formula is written and displayed in.
/// - `last_answer`: The value of the `ans` marker.
///
/// # Errors
/// Returns an error if preprocessing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use kalkulacka::{base::Base, compute, interpreter::value::core::Value};
///
/// let answer = compute("ans * 2", Base::Decimal, Value::Integer(21)).unwrap();
/// assert_eq!(answer.text, "42");
/// assert_eq!(answer.value, Value::Integer(42));
///
/// // The remainder form keeps the quotient as the value.
/// let answer = compute("111/10", Base::Binary, Value::Integer(0)).unwrap();
/// assert_eq!(answer.text, "11 zv.1");
/// assert_eq!(answer.value, Value::Integer(3));
///
/// assert!(compute("5/0", Base::Decimal, Value::Integer(0)).is_err());
/// ```
pub fn compute(formula: &str,
               base: Base,
               last_answer: Value)
               -> Result<Answer, Box<dyn std::error::Error>> {
    let source = preprocess(&close_parentheses(formula), base)?;
    log::debug!("preprocessed {formula:?} to {source:?} (base {base})");

    let tokens = tokenize(&source)?;
    log::debug!("{} tokens", tokens.len());

    let expr = parse_formula(&tokens, last_answer)?;
    log::debug!("parsed {expr}");

    let context = Context::new();

    if base != Base::Decimal
       && let Expr::BinaryOp { left,
                               op: BinaryOperator::Div,
                               right,
                               position, } = &expr
    {
        let (quotient, remainder) = context.eval_division_with_remainder(left, right, *position)?;
        return Ok(Answer { text:  render_remainder(quotient, remainder, base),
                           value: Value::Integer(quotient), });
    }

    let value = context.evaluate(&expr)?;
    Ok(Answer { text: render_value(value, base),
                value })
}

/// Evaluates a formula with a last answer of `0`.
///
/// Every failure is reported as [`ERROR_SENTINEL`].
///
/// # Examples
/// ```
/// use kalkulacka::{ERROR_SENTINEL, base::Base, evaluate};
///
/// assert_eq!(evaluate("2+3*4", Base::Decimal), "14");
/// assert_eq!(evaluate("log(8,2)", Base::Decimal), "3");
/// assert_eq!(evaluate("101/11", Base::Binary), "1 zv.10");
/// assert_eq!(evaluate("sqrt(-1)", Base::Decimal), ERROR_SENTINEL);
/// ```
#[must_use]
pub fn evaluate(formula: &str, base: Base) -> String {
    evaluate_with_answer(formula, base, Value::default())
}

/// Evaluates a formula in which `ans` stands for `last_answer`.
///
/// Every failure is reported as [`ERROR_SENTINEL`].
///
/// # Examples
/// ```
/// use kalkulacka::{base::Base, evaluate_with_answer, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_with_answer("ANS + 1", Base::Decimal, Value::Real(1.5)), "2.5");
/// ```
#[must_use]
pub fn evaluate_with_answer(formula: &str, base: Base, last_answer: Value) -> String {
    match compute(formula, base, last_answer) {
        Ok(answer) => answer.text,
        Err(e) => {
            log::debug!("{formula:?} evaluated to {ERROR_SENTINEL}: {e}");
            ERROR_SENTINEL.to_string()
        },
    }
}
