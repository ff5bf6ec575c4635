use kalkulacka::{
    ERROR_SENTINEL,
    ast::Expr,
    base::{
        Base,
        preprocess::{COMMA_SENTINEL, close_parentheses, preprocess},
    },
    error::{DomainError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::{
            core::Context,
            function::core::{BUILTIN_FUNCTIONS, Callable},
        },
        lexer::{Token, tokenize},
        parser::core::{MAX_NESTING_DEPTH, MAX_OPERATORS, parse_formula},
        value::core::Value,
    },
};

fn parse(src: &str) -> Result<Expr, ParseError> {
    parse_formula(&tokenize(src)?, Value::Integer(0))
}

fn eval(src: &str) -> Result<Value, RuntimeError> {
    let expr = parse(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"));
    Context::new().evaluate(&expr)
}

fn assert_tree(src: &str, expected: &str) {
    match parse(src) {
        Ok(expr) => assert_eq!(expr.to_string(), expected, "Tree of {src:?}"),
        Err(e) => panic!("Parsing {src:?} failed: {e}"),
    }
}

#[test]
fn lexer_reads_numbers_names_and_operators() {
    let tokens: Vec<Token> = tokenize("2.75 * n√(27, 3) - 5.")
        .unwrap()
        .into_iter()
        .map(|(token, _)| token)
        .collect();
    assert_eq!(tokens,
               vec![Token::Real(2.75),
                    Token::Star,
                    Token::Identifier("n√".to_string()),
                    Token::LParen,
                    Token::Integer(27),
                    Token::Comma,
                    Token::Integer(3),
                    Token::RParen,
                    Token::Minus,
                    Token::Real(5.0),
                    Token::End]);
}

#[test]
fn lexer_positions_count_characters() {
    let tokens = tokenize("π+π").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|(_, position)| *position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3]);
}

#[test]
fn lexer_rejects_unknown_characters() {
    assert_eq!(tokenize("2 # 3"),
               Err(ParseError::UnexpectedCharacter { text:     "#".to_string(),
                                                     position: 2, }));
}

#[test]
fn oversized_integer_literals_become_reals() {
    let tokens = tokenize("1+100000000000000000000").unwrap();
    assert_eq!(tokens[2], (Token::Real(1e20), 2));

    let huge = format!("1+{}", "9".repeat(400));
    assert_eq!(tokenize(&huge), Err(ParseError::LiteralTooLarge { position: 2 }));
    let huge_real = format!("{}.5", "9".repeat(400));
    assert_eq!(tokenize(&huge_real), Err(ParseError::LiteralTooLarge { position: 0 }));
}

#[test]
fn precedence_and_associativity() {
    assert_tree("2+3*4", "(2 + (3 * 4))");
    assert_tree("2-3-4", "((2 - 3) - 4)");
    assert_tree("8/4/2", "((8 / 4) / 2)");
    assert_tree("2^3^2", "(2 ^ (3 ^ 2))");
    assert_tree("2**3", "(2 ^ 3)");
    assert_tree("2*3^2", "(2 * (3 ^ 2))");
}

#[test]
fn unary_minus_binds_to_one_factor() {
    assert_tree("-2^2", "((-2) ^ 2)");
    assert_tree("--2", "(-(-2))");
    assert_tree("2*-3", "(2 * (-3))");
}

#[test]
fn calls_and_constants() {
    assert_tree("log(8, 2)", "log(8, 2)");
    assert_tree("sin(90)", "sin(90)");
    assert_tree("pi()", "pi()");
    assert!(matches!(parse("PI"), Ok(Expr::Number { value: Value::Real(_), .. })));
    assert!(matches!(parse("e"), Ok(Expr::Number { value: Value::Real(_), .. })));
}

#[test]
fn last_answer_is_substituted_while_parsing() {
    let expr = parse_formula(&tokenize("Ans*2").unwrap(), Value::Integer(7)).unwrap();
    assert_eq!(expr.to_string(), "(7 * 2)");
}

#[test]
fn structural_errors() {
    assert_eq!(parse("1+"), Err(ParseError::UnexpectedEndOfInput { position: 2 }));
    assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { position: 0 }));
    assert_eq!(parse("(1"), Err(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(parse("foo"),
               Err(ParseError::UnknownIdentifier { name:     "foo".to_string(),
                                                   position: 0, }));
    assert_eq!(parse("log(1,2,3)"),
               Err(ParseError::TooManyArguments { name:     "log".to_string(),
                                                  position: 0, }));
    assert!(matches!(parse("1 2"), Err(ParseError::UnexpectedTrailingTokens { position: 2, .. })));
    assert!(matches!(parse("1)"), Err(ParseError::UnexpectedTrailingTokens { position: 1, .. })));
    assert!(matches!(parse("*2"), Err(ParseError::UnexpectedToken { position: 0, .. })));
    assert_eq!(parse("2*(3+)").map_err(|e| e.position()), Err(5));
}

#[test]
fn nesting_is_bounded() {
    let deep_minus = format!("{}1", "-".repeat(MAX_NESTING_DEPTH * 2));
    assert!(matches!(parse(&deep_minus), Err(ParseError::NestingTooDeep { .. })));

    let deep_parens = format!("{}1{}",
                              "(".repeat(MAX_NESTING_DEPTH * 2),
                              ")".repeat(MAX_NESTING_DEPTH * 2));
    assert!(matches!(parse(&deep_parens), Err(ParseError::NestingTooDeep { .. })));

    let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert!(parse(&shallow).is_ok());
}

#[test]
fn operator_chains_are_bounded() {
    let longest = format!("{}1", "1+".repeat(MAX_OPERATORS));
    assert_eq!(evaluate(&longest, Base::Decimal), (MAX_OPERATORS + 1).to_string());

    let too_long = format!("{}1", "1*".repeat(MAX_OPERATORS + 1));
    assert!(matches!(parse(&too_long), Err(ParseError::TooManyOperators { .. })));

    let mixed = format!("{}2^1", "2^1-".repeat(MAX_OPERATORS / 2));
    assert!(matches!(parse(&mixed), Err(ParseError::TooManyOperators { .. })));

    for operator in ["+", "*", "-", "/"] {
        let formula = format!("{}1", format!("1{operator}").repeat(199_999));
        assert_eq!(evaluate(&formula, Base::Decimal), ERROR_SENTINEL, "chain of {operator}");
    }
}

#[test]
fn evaluator_keeps_integers_exact() {
    assert_eq!(eval("2+3*4"), Ok(Value::Integer(14)));
    assert_eq!(eval("8/2"), Ok(Value::Integer(4)));
    assert_eq!(eval("7/2"), Ok(Value::Real(3.5)));
    assert_eq!(eval("2^10"), Ok(Value::Integer(1024)));
    assert_eq!(eval("2^-2"), Ok(Value::Real(0.25)));
}

#[test]
fn evaluator_promotes_overflowing_integers() {
    assert_eq!(eval("9223372036854775807+1"), Ok(Value::Real(9_223_372_036_854_775_808.0)));
    assert_eq!(eval("2^63"), Ok(Value::Real(9_223_372_036_854_775_808.0)));
}

#[test]
fn evaluator_normalizes_integral_reals() {
    assert_eq!(eval("log(8, 2)"), Ok(Value::Integer(3)));
    assert_eq!(eval("sqrt(16)"), Ok(Value::Integer(4)));
    assert_eq!(eval("2.5*2"), Ok(Value::Integer(5)));
}

#[test]
fn evaluator_errors() {
    assert!(matches!(eval("foo(1)"), Err(RuntimeError::UnknownFunction { .. })));
    assert!(matches!(eval("sin()"),
                     Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                               found: 0,
                                                               .. })));
    assert!(matches!(eval("log(8)"),
                     Err(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                               found: 1,
                                                               .. })));
    assert!(matches!(eval("sqrt(-1)"),
                     Err(RuntimeError::Domain { source: DomainError::NegativeSquareRoot,
                                                .. })));
    assert!(matches!(eval("5/0"),
                     Err(RuntimeError::Domain { source: DomainError::DivisionByZero,
                                                .. })));
    assert!(matches!(eval("10^400"), Err(RuntimeError::Overflow { .. })));
}

#[test]
fn every_builtin_is_in_the_namespace() {
    let namespace = Callable::namespace();
    assert_eq!(namespace.len(), BUILTIN_FUNCTIONS.len());
    for name in BUILTIN_FUNCTIONS {
        assert!(namespace.contains_key(*name), "{name} is missing");
    }
    assert_eq!(namespace["nthroot"].arity(), 2);
    assert_eq!(namespace["fact"].arity(), 1);
}

#[test]
fn function_names_ignore_case() {
    assert_eq!(eval("SIN(90)"), Ok(Value::Integer(1)));
    assert_eq!(eval("Log(100, 10)"), Ok(Value::Integer(2)));
}

#[test]
fn division_with_remainder_floors() {
    let context = Context::new();
    let cases = [("7", "2", (3, 1)), ("-7", "2", (-4, 1)), ("7", "-2", (-4, -1)), ("6", "3", (2, 0))];
    for (left, right, expected) in cases {
        let left = parse(left).unwrap();
        let right = parse(right).unwrap();
        assert_eq!(context.eval_division_with_remainder(&left, &right, 0), Ok(expected));
    }

    let left = parse("7.5").unwrap();
    let right = parse("2").unwrap();
    assert!(matches!(context.eval_division_with_remainder(&left, &right, 0),
                     Err(RuntimeError::ExpectedInteger { .. })));
}

#[test]
fn preprocess_separates_decimal_and_argument_commas() {
    assert_eq!(preprocess("1,5+2,5", Base::Decimal).unwrap(), "1.5+2.5");
    assert_eq!(preprocess("log(8,2)", Base::Decimal).unwrap(), "log(8,2)");
    assert_eq!(preprocess("LOG(8,2)", Base::Decimal).unwrap(), "LOG(8,2)");
    assert_eq!(preprocess("nthroot(27,3)+0,5", Base::Decimal).unwrap(), "nthroot(27,3)+0.5");
    assert_eq!(preprocess("sqrt(4,2)", Base::Decimal).unwrap(), "sqrt(4.2)");
    assert_eq!(preprocess("mylog(8,2)", Base::Decimal).unwrap(), "mylog(8.2)");
}

#[test]
fn preprocess_converts_literals_of_the_base() {
    assert_eq!(preprocess("101+11", Base::Binary).unwrap(), "5+3");
    assert_eq!(preprocess("17*2", Base::Octal).unwrap(), "15*2");
    assert_eq!(preprocess("sin(12)", Base::Binary).unwrap(), "sin(12)");
    assert_eq!(preprocess("ans+10", Base::Binary).unwrap(), "ans+2");
}

#[test]
fn preprocess_rejects_the_sentinel() {
    let formula = format!("1{COMMA_SENTINEL}2");
    assert_eq!(preprocess(&formula, Base::Decimal),
               Err(ParseError::UnexpectedCharacter { text:     COMMA_SENTINEL.to_string(),
                                                     position: 1, }));
}

#[test]
fn open_parentheses_are_closed() {
    assert_eq!(close_parentheses("2*(3+4"), "2*(3+4)");
    assert_eq!(close_parentheses("sin(cos(0"), "sin(cos(0))");
    assert_eq!(close_parentheses("1+2"), "1+2");
}
