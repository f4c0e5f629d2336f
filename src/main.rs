use std::fs;

use clap::Parser;
use shunter::evaluate;

/// shunter evaluates an arithmetic expression given as whitespace-separated
/// tokens and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunter to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    match evaluate(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
