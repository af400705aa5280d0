/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use quantity::IntervalsValidator;
use std::process;

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Range Checker
///
/// Validates quantities against a range expression and outputs the
/// normalised form.
struct Args {
    #[clap(long, short)]
    /// Report validity through the exit code only.
    quiet: bool,
    /// The range expression, e.g. "MiB: (0, 2560]".
    range: String,
    /// The quantities to validate.
    value: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let validator = match IntervalsValidator::parse(&args.range) {
        Ok(validator) => validator,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2)
        }
    };

    let mut valid = true;
    for value in &args.value {
        match validator.normalize(value) {
            Ok(normalized) => {
                if !args.quiet {
                    println!("{}", normalized)
                }
            }
            Err(err) => {
                valid = false;
                if !args.quiet {
                    eprintln!("{}: {}", value, err)
                }
            }
        }
    }
    if !valid {
        process::exit(1)
    }
}
