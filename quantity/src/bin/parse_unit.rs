/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use quantity::{DimensionalUnit, QuantityError};
use std::process;

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit Parser
///
/// Parses human-readable unit expressions and outputs the canonical
/// form.
struct Args {
    #[clap(long, short)]
    /// Output the unit as JSON instead of the canonical form.
    json: bool,
    #[clap(long, short)]
    /// Output the conversion ratio into this unit.
    to: Option<String>,
    /// The unit expressions to parse.
    unit: Vec<String>,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1)
        }
    }
}

fn run(args: &Args) -> Result<(), QuantityError> {
    let target = args
        .to
        .as_deref()
        .map(DimensionalUnit::parse)
        .transpose()?;

    for input in &args.unit {
        let unit = DimensionalUnit::parse(input)?;
        match &target {
            Some(target) => println!("{}", unit.to(target)?),
            None => match args.json {
                true => println!(
                    "{}",
                    serde_json::to_string(&unit)
                        .expect("serialization failed!?")
                ),
                false => println!("{}", unit),
            },
        }
    }
    Ok(())
}
