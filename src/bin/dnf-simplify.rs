//! DNF Simplifier - Command Line Interface
//!
//! Reads one propositional expression and prints its minimized DNF.

use clap::Parser;
use dnf_simplifier::{to_dnf, Absorption, Error, Expr};
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "dnf-simplify")]
#[command(about = "Convert a propositional expression to minimized DNF", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to simplify (read one line from stdin if omitted)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,

    /// Repeat absorption until no more terms are removed
    #[arg(long = "fixed-point")]
    fixed_point: bool,

    /// Print the unminimized expansion to stderr
    #[arg(short = 'e', long = "show-expansion")]
    show_expansion: bool,

    /// Print prompts around the input and the result
    #[arg(short = 'p', long = "prompt")]
    prompt: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = match args.expression.clone() {
        Some(expr) => expr,
        None => {
            if args.prompt {
                println!("Enter a logical expression:");
            }
            match read_line() {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    match run(input.trim(), &args) {
        Ok(output) => {
            if args.prompt {
                println!("Minimized DNF:");
            }
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn read_line() -> io::Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run(input: &str, args: &Args) -> Result<String, Error> {
    let expr = Expr::parse(input)?;
    let expanded = to_dnf(&expr)?;
    if args.show_expansion {
        eprintln!("Expansion ({} terms): {}", expanded.len(), expanded);
    }

    let absorption = if args.fixed_point {
        Absorption::FixedPoint
    } else {
        Absorption::SinglePass
    };
    Ok(expanded.simplify_with(absorption).to_string())
}
