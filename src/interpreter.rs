/// The evaluator module computes results from AST nodes.
///
/// The evaluator walks the AST, performs the arithmetic operations, calls the
/// builtin functions of the numeric kernel, and produces a single value. It
/// is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves calls against the function namespace.
/// - Reports runtime errors such as division by zero or domain errors.
pub mod evaluator;
/// The lexer module tokenizes a formula for further parsing.
///
/// The lexer reads the raw formula text and produces a stream of tokens, each
/// corresponding to a number, a name, an operator or a parenthesis. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their offsets.
/// - Decodes numeric literals into integers or reals.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the structure of the formula.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, honouring operator precedence.
/// - Resolves the last answer and the bare constants.
/// - Validates the grammar, reporting errors with their offset.
pub mod parser;
/// The value module defines the runtime number type.
///
/// # Responsibilities
/// - Defines the `Value` enum with its integer and real variants.
/// - Provides conversion and normalization between the two.
pub mod value;
