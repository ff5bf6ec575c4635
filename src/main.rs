use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use kalkulacka::{ERROR_SENTINEL, base::Base, compute, interpreter::value::core::Value};

/// kalkulacka evaluates arithmetic formulas in binary, octal or decimal, with
/// decimal commas, `ans` for the previous result, and functions such as
/// `sin`, `log`, `nthroot` and `fact`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base the formulas are written and displayed in (2, 8 or 10).
    #[arg(short, long, default_value_t = Base::Decimal)]
    base: Base,

    /// Initial value of `ans`.
    #[arg(short, long, default_value_t = Value::Integer(0), allow_hyphen_values = true)]
    ans: Value,

    /// Tells kalkulacka to read formulas from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// A formula, or a path with `--file`. Formulas are read from stdin,
    /// one per line, when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let formulas: Vec<String> = match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path).map(|text| text.lines().map(str::to_string).collect())
                                                      .unwrap_or_else(|_| {
                                                          eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                          std::process::exit(1);
                                                      }),
        (Some(formula), false) => vec![formula.clone()],
        (None, _) => io::stdin().lock()
                                .lines()
                                .map_while(Result::ok)
                                .collect(),
    };

    let mut last_answer = args.ans;
    for formula in formulas.iter().filter(|line| !line.trim().is_empty()) {
        match compute(formula, args.base, last_answer) {
            Ok(answer) => {
                println!("{}", answer.text);
                last_answer = answer.value;
            },
            Err(e) => {
                log::info!("{formula}: {e}");
                println!("{ERROR_SENTINEL}");
            },
        }
    }
}
