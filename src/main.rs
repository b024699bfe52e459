use std::fs;

use clap::Parser;
use numera::interpreter::{evaluator::evaluate, printer::render};

/// Expression evaluated when none is supplied on the command line.
const DEFAULT_EXPRESSION: &str = "2 + 3 * 4";

/// numera is an integer arithmetic expression calculator. It prints the
/// expression's value followed by its syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numera to read the expression from a file instead of the
    /// argument itself.
    #[arg(short, long)]
    file: bool,

    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        let path = args.expression.unwrap_or_else(|| {
                                      eprintln!("No input file given.");
                                      std::process::exit(1);
                                  });
        fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        args.expression
            .unwrap_or_else(|| DEFAULT_EXPRESSION.to_string())
    };

    let expr = match numera::parse(&source) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    let result = match evaluate(&expr) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    println!("Result: {result}");
    print!("{}", render(&expr, "expr"));
}
