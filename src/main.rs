use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use opcalc::{
    CalcResult, compile,
    interpreter::{
        evaluator::core::evaluate,
        operator::{Operator, REGISTRY},
        parser::render,
    },
};

/// opcalc is an arithmetic expression calculator with unary, binary and
/// postfix operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression and exit instead of starting the prompt.
    expression: Option<String>,

    /// Also print the postfix (reverse Polish) form of each expression.
    #[arg(short, long)]
    postfix: bool,

    /// Do not print the banner when the prompt starts.
    #[arg(short, long)]
    quiet: bool,

    /// Log more (`-v` for debug, `-vv` for trace). `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Some(expression) = &args.expression {
        if !run(expression, args.postfix) {
            process::exit(1);
        }
        return;
    }

    if let Err(e) = prompt(&args) {
        eprintln!("Failed to read input: {e}");
        process::exit(1);
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

/// Reads expressions line by line until `exit`, `quit` or end of input.
fn prompt(args: &Args) -> io::Result<()> {
    if !args.quiet {
        println!("opcalc {}", env!("CARGO_PKG_VERSION"));
        println!("Enter a mathematical expression to calculate or type 'exit' to quit.");
        println!("Supported operators: {} ( )", supported_operators());
        println!("Examples: 2 + 3 * 4, (2 + 3) * 4, 5!, 2 ^ 3, 5 $ 3, 5 & 3, 5 @ 3, ~3 + 5, 123#");
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter expression: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let expression = line.trim();
        if expression.eq_ignore_ascii_case("exit") || expression.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }
        if expression.is_empty() {
            continue;
        }
        run(expression, args.postfix);
    }
    Ok(())
}

/// Evaluates one expression and prints the outcome. Returns `false` on error.
fn run(expression: &str, show_postfix: bool) -> bool {
    match solve(expression, show_postfix) {
        Ok(value) => {
            println!("Result: {value}");
            true
        },
        Err(e) => {
            eprintln!("{}", e.report(expression));
            false
        },
    }
}

/// Compiles `expression` once, optionally prints its postfix form, then
/// evaluates that same plan.
fn solve(expression: &str, show_postfix: bool) -> CalcResult<f64> {
    let plan = compile(expression)?;
    if show_postfix {
        println!("Postfix: {}", render(&plan));
    }
    evaluate(&plan)
}

/// Lists the typed operator symbols. `u-` is typed as `-`, which already
/// appears as subtraction.
fn supported_operators() -> String {
    REGISTRY.iter()
            .filter(|def| def.operator != Operator::Neg)
            .map(|def| def.symbol)
            .collect::<Vec<_>>()
            .join(", ")
}
