use crate::{base::Base, error::ParseError, interpreter::parser::core::ParseResult};

/// Private-use character standing in for an argument-separating comma while
/// decimal commas are converted.
pub const COMMA_SENTINEL: char = '\u{E000}';

/// Functions whose two arguments are separated by a comma that must not be
/// read as a decimal comma. Compared case-insensitively.
pub const TWO_ARGUMENT_FUNCTIONS: &[&str] = &["log", "nthroot", "n√", "ⁿ√"];

/// Rewrites a formula so the lexer only ever sees decimal numbers.
///
/// The steps, in order:
/// 1. literals of the active base are replaced by their decimal value,
/// 2. the comma between the two arguments of a call listed in
///    [`TWO_ARGUMENT_FUNCTIONS`] is masked with [`COMMA_SENTINEL`],
/// 3. every remaining comma between two digits becomes a decimal point,
/// 4. the masked commas are restored.
///
/// # Errors
/// `ParseError::UnexpectedCharacter` if the formula already contains
/// [`COMMA_SENTINEL`].
///
/// # Example
/// ```
/// use kalkulacka::base::{Base, preprocess::preprocess};
///
/// assert_eq!(preprocess("1,5+2,5", Base::Decimal).unwrap(), "1.5+2.5");
/// assert_eq!(preprocess("log(8,2)", Base::Decimal).unwrap(), "log(8,2)");
/// assert_eq!(preprocess("101/11", Base::Binary).unwrap(), "5/3");
/// ```
pub fn preprocess(formula: &str, base: Base) -> ParseResult<String> {
    if let Some(position) = formula.chars().position(|c| c == COMMA_SENTINEL) {
        return Err(ParseError::UnexpectedCharacter { text: COMMA_SENTINEL.to_string(),
                                                     position });
    }

    let converted = convert_literals(formula, base);
    let masked = mask_argument_commas(&converted);
    let pointed = convert_decimal_commas(&masked);

    Ok(pointed.into_iter()
              .map(|c| if c == COMMA_SENTINEL { ',' } else { c })
              .collect())
}

/// Appends a `)` for every `(` left open at the end of the formula.
///
/// Surplus closing parentheses are left for the parser to report.
///
/// # Example
/// ```
/// use kalkulacka::base::preprocess::close_parentheses;
///
/// assert_eq!(close_parentheses("sin(90"), "sin(90)");
/// assert_eq!(close_parentheses("((1+2"), "((1+2))");
/// assert_eq!(close_parentheses("(1))"), "(1))");
/// ```
#[must_use]
pub fn close_parentheses(formula: &str) -> String {
    let mut open = 0usize;
    for c in formula.chars() {
        match c {
            '(' => open += 1,
            ')' => open = open.saturating_sub(1),
            _ => {},
        }
    }

    let mut closed = formula.to_string();
    closed.extend(std::iter::repeat_n(')', open));
    closed
}

/// Returns `true` for the characters a word is made of.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces every maximal run of word characters that is a valid numeral in
/// `base` by its decimal value.
///
/// Runs containing letters or digits invalid in the base are kept verbatim,
/// as are runs too long to fit an `i64`.
fn convert_literals(formula: &str, base: Base) -> String {
    if base == Base::Decimal {
        return formula.to_string();
    }

    let radix = base.radix();
    let mut output = String::with_capacity(formula.len());
    let mut run = String::new();

    let flush = |run: &mut String, output: &mut String| {
        if run.chars().all(|c| c.to_digit(radix).is_some())
           && let Ok(value) = i64::from_str_radix(run.as_str(), radix)
        {
            output.push_str(&value.to_string());
        } else {
            output.push_str(run);
        }
        run.clear();
    };

    for c in formula.chars() {
        if is_word_char(c) {
            run.push(c);
        } else {
            if !run.is_empty() {
                flush(&mut run, &mut output);
            }
            output.push(c);
        }
    }
    if !run.is_empty() {
        flush(&mut run, &mut output);
    }

    output
}

/// Masks the comma separating the two arguments of a two-argument call.
///
/// Only calls whose arguments contain neither parentheses nor commas are
/// recognized, e.g. `log(8,2)` but not `log((8),2)`.
fn mask_argument_commas(formula: &str) -> Vec<char> {
    let mut chars: Vec<char> = formula.chars().collect();

    let mut i = 0;
    while i < chars.len() {
        if let Some(comma) = argument_comma(&chars, i) {
            chars[comma] = COMMA_SENTINEL;
            i = comma + 1;
        } else {
            i += 1;
        }
    }

    chars
}

/// If a listed two-argument call starts at `start`, returns the index of the
/// comma between its arguments.
fn argument_comma(chars: &[char], start: usize) -> Option<usize> {
    if start > 0 && is_word_char(chars[start - 1]) {
        return None;
    }

    let name_len = TWO_ARGUMENT_FUNCTIONS.iter()
                                         .map(|name| name.chars().collect::<Vec<_>>())
                                         .find(|name| starts_with_ignore_case(&chars[start..], name))
                                         .map(|name| name.len())?;

    let open = start + name_len;
    if chars.get(open) != Some(&'(') {
        return None;
    }

    let comma = scan_argument(chars, open + 1)?;
    if chars.get(comma) != Some(&',') {
        return None;
    }

    let close = scan_argument(chars, comma + 1)?;
    (chars.get(close) == Some(&')')).then_some(comma)
}

/// Skips one argument free of `,`, `(` and `)`, returning the index of the
/// character that ends it. Empty arguments yield `None`.
fn scan_argument(chars: &[char], from: usize) -> Option<usize> {
    let end = chars.get(from..)?
                   .iter()
                   .position(|c| matches!(c, ',' | '(' | ')'))
                   .map_or(chars.len(), |offset| from + offset);
    (end > from).then_some(end)
}

fn starts_with_ignore_case(haystack: &[char], needle: &[char]) -> bool {
    haystack.len() >= needle.len()
    && haystack.iter()
               .zip(needle)
               .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}

/// Turns every comma standing between two ASCII digits into a decimal point.
fn convert_decimal_commas(chars: &[char]) -> Vec<char> {
    chars.iter()
         .enumerate()
         .map(|(i, &c)| {
             let between_digits = i > 0
                                  && chars[i - 1].is_ascii_digit()
                                  && chars.get(i + 1).is_some_and(char::is_ascii_digit);
             if c == ',' && between_digits { '.' } else { c }
         })
         .collect()
}
