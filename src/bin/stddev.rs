use std::io::{self, Read};

use kalkulacka::{base::format::render_real, kernel::stats::sample_std_dev};

/// Reads whitespace-separated numbers from stdin, any number per line, and
/// prints their sample standard deviation.
fn main() {
    env_logger::init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read standard input: {e}");
        std::process::exit(1);
    }

    let samples = match input.split_whitespace()
                             .map(str::parse::<f64>)
                             .collect::<Result<Vec<_>, _>>()
    {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("Invalid input: {e}");
            std::process::exit(1);
        },
    };
    log::debug!("read {} samples", samples.len());

    match sample_std_dev(&samples) {
        Ok(deviation) => println!("{}", render_real(deviation)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
