use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use exacta::{ParseOptions, Value, number::base::BaseSystem, parse};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// exacta evaluates arithmetic over exact numerals: fractions, repeating
/// decimals, continued fractions, intervals, uncertainty brackets and
/// arbitrary bases.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every non-empty line of this file instead of an expression.
    #[arg(short, long)]
    file: Option<String>,

    /// Radix for numerals written without an explicit `[base]`.
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=62))]
    base: u32,

    /// Disable type-aware promotion; every result is an interval.
    #[arg(short, long)]
    legacy: bool,

    /// Show rationals as repeating decimals (`0.#3`) instead of `n/d`.
    #[arg(short, long)]
    repeating: bool,

    /// Expression to evaluate. Reads lines from stdin when omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_env("EXACTA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let input_base = match BaseSystem::from_base(args.base) {
        Ok(base) => base,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    let options = ParseOptions::default().with_type_aware(!args.legacy)
                                         .with_input_base(input_base);
    debug!(?options, "starting");

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };

        for line in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
            match parse(line, &options) {
                Ok(value) => println!("{}", render(&value, args.repeating)),
                Err(e) => {
                    eprintln!("{line}: {e}");
                    return ExitCode::FAILURE;
                },
            }
        }
        return ExitCode::SUCCESS;
    }

    if let Some(expression) = &args.expression {
        return match parse(expression, &options) {
            Ok(value) => {
                println!("{}", render(&value, args.repeating));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "stdin closed");
                break;
            },
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse(&line, &options) {
            Ok(value) => println!("{}", render(&value, args.repeating)),
            Err(e) => eprintln!("{e}"),
        }
    }

    ExitCode::SUCCESS
}

fn render(value: &Value, repeating: bool) -> String {
    match value {
        Value::Rational(r) if repeating => r.to_repeating_decimal(),
        Value::Interval(iv) if repeating => {
            format!("{}:{}", iv.low().to_repeating_decimal(), iv.high().to_repeating_decimal())
        },
        other => other.to_string(),
    }
}
