use std::fs;

use kalkulacka::{
    ERROR_SENTINEL,
    base::{Base, format::render_integer},
    compute, evaluate, evaluate_with_answer,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn formula_files_evaluate_as_listed() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/formulas").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for case in extract_cases(&content) {
            count += 1;
            let actual = evaluate(&case.formula, case.base);
            assert_eq!(actual, case.expected,
                       "{:?} in {:?} (base {}), line {}",
                       case.formula, path, case.base, case.line);
        }
    }

    assert!(count > 0, "No formulas found in tests/formulas");
}

struct Case {
    formula:  String,
    expected: String,
    base:     Base,
    line:     usize,
}

/// Reads `formula => result` lines. Blank lines and `#` comments are skipped,
/// and a `base N` line switches the base for the lines that follow.
fn extract_cases(content: &str) -> Vec<Case> {
    let mut cases = Vec::new();
    let mut base = Base::Decimal;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(radix) = trimmed.strip_prefix("base ") {
            base = radix.parse()
                        .unwrap_or_else(|e| panic!("Line {}: {e}", i + 1));
            continue;
        }
        let Some((formula, expected)) = trimmed.rsplit_once(" => ") else {
            panic!("Line {} is not of the form `formula => result`: {trimmed}", i + 1);
        };
        cases.push(Case { formula: formula.to_string(),
                          expected: expected.to_string(),
                          base,
                          line: i + 1 });
    }

    cases
}

fn assert_result(formula: &str, expected: &str) {
    assert_eq!(evaluate(formula, Base::Decimal), expected, "Formula {formula:?}");
}

fn assert_error(formula: &str) {
    assert_eq!(evaluate(formula, Base::Decimal),
               ERROR_SENTINEL,
               "Formula {formula:?} succeeded but was expected to fail");
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2", "3");
    assert_result("7 * 9", "63");
    assert_result("8 - 5", "3");
    assert_result("10 / 4", "2.5");
    assert_result("  2 *\t3  ", "6");
}

#[test]
fn results_are_rounded_to_ten_digits() {
    assert_result("2/3", "0.6666666667");
    assert_result("0.1 * 3", "0.3");
    assert_result("1.5 * 2", "3");
    assert_result("0 - 0.0", "0");
}

#[test]
fn whitespace_only_or_empty_formula_is_error() {
    assert_error("");
    assert_error("   ");
}

#[test]
fn surplus_closing_parenthesis_is_error() {
    assert_error("(1+2))");
}

#[test]
fn last_answer_is_reused() {
    assert_eq!(evaluate_with_answer("ans * 2", Base::Decimal, Value::Integer(21)), "42");
    assert_eq!(evaluate_with_answer("ANS + 1", Base::Decimal, Value::Real(1.5)), "2.5");
    assert_eq!(evaluate_with_answer("ans", Base::Binary, Value::Integer(5)), "101");
    assert_eq!(evaluate("ans", Base::Decimal), "0");
}

#[test]
fn answers_chain_through_compute() {
    let mut last = Value::default();
    for (formula, expected) in [("2+3", "5"), ("ans*ans", "25"), ("ans/2", "12.5")] {
        let answer = compute(formula, Base::Decimal, last).unwrap();
        assert_eq!(answer.text, expected);
        last = answer.value;
    }
    assert_eq!(last, Value::Real(12.5));
}

#[test]
fn remainder_division_keeps_the_quotient() {
    let answer = compute("111/10", Base::Binary, Value::default()).unwrap();
    assert_eq!(answer.text, "11 zv.1");
    assert_eq!(answer.value, Value::Integer(3));
}

#[test]
fn rendered_integers_evaluate_to_themselves() {
    for base in [Base::Binary, Base::Octal, Base::Decimal] {
        for n in [0, 1, 7, 8, 255, 4096, 1_000_003] {
            let text = render_integer(n, base);
            assert_eq!(evaluate(&text, base), text, "{n} in base {base}");
        }
    }
}

#[test]
fn division_is_plain_in_decimal() {
    assert_result("7/2", "3.5");
    assert_eq!(evaluate("7/2", Base::Octal), "3 zv.1");
}

#[test]
fn nested_division_is_not_split() {
    assert_eq!(evaluate("(110/10)+1", Base::Binary), "100");
    assert_eq!(evaluate("1+11/10", Base::Binary), "2.5");
}

#[test]
fn errors_are_reported_with_a_cause() {
    let error = compute("sqrt(-1)", Base::Decimal, Value::default()).unwrap_err();
    assert!(error.to_string().contains("negative"), "{error}");

    let error = compute("1 +* 2", Base::Decimal, Value::default()).unwrap_err();
    assert!(error.to_string().starts_with("Error at 3"), "{error}");
}

#[test]
fn argument_commas_depend_on_the_function() {
    assert_result("log(8,2)", "3");
    assert_result("nthroot(8,3)", "2");
    assert_result("sqrt(4,2)", "2.0493901532");
    assert_result("sin(1,5)", "0.0261769483");
    assert_error("log(2,5,2)");
}
