mod error;

use binexp_compute::simplify;
use binexp_parser::parser::{ast::expr::Expr, fmt::{Postfix, Prefix}, Parser};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};

/// The notation used to print simplified expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Notation {
    Prefix,
    Infix,
    Postfix,
}

/// Parses and simplifies the given input line, returning the reduced expression.
fn parse_simplify(input: &str) -> Result<Expr, Error> {
    let expr = Parser::new(input).try_parse_full::<Expr>()?;
    let reduced = simplify(&expr)?;
    Ok(reduced)
}

/// Parses and simplifies the given input line, printing the result in the selected notation or
/// reporting the failure.
fn read_simplify(input: &str, notation: Notation) {
    match parse_simplify(input) {
        Ok(expr) => match notation {
            Notation::Prefix => println!("{}", expr.as_prefix()),
            Notation::Infix => println!("{}", expr),
            Notation::Postfix => println!("{}", expr.as_postfix()),
        },
        Err(err) => err.report_to_stderr(input),
    }
}

/// Runs every non-empty line of the input, one expression per line. A failing line is reported to
/// stderr and the remaining lines still run.
fn execute(input: &str, notation: Notation) {
    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        read_simplify(line, notation);
    }
}

fn main() {
    let mut filename = None;
    let mut notation = Notation::Prefix;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--prefix" => notation = Notation::Prefix,
            "--infix" => notation = Notation::Infix,
            "--postfix" => notation = Notation::Postfix,
            _ => filename = Some(arg),
        }
    }

    if let Some(filename) = filename {
        // run expressions from a file
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        execute(&input, notation);
    } else if !io::stdin().is_terminal() {
        // read expressions from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        execute(&input, notation);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        fn process_line(rl: &mut DefaultEditor, notation: Notation) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            read_simplify(&input, notation);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, notation) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
