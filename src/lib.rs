//! # exacta
//!
//! exacta is an exact numeral parser and arithmetic engine written in Rust.
//! It reads arithmetic expressions over numerals written in many notations
//! (fractions, mixed numbers, repeating decimals, continued fractions,
//! uncertainty brackets, intervals and arbitrary bases) and evaluates them
//! without rounding, to an Integer, a Rational or a RationalInterval.
//!
//! ```
//! use exacta::{ParseOptions, Value, parse};
//!
//! let options = ParseOptions::default();
//! assert_eq!(parse("0.#3 + 1..1/3", &options).unwrap().to_string(), "5/3");
//! assert!(matches!(parse("1.3[+-1]", &options).unwrap(), Value::Interval(_)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::Context,
    lexer::tokenize,
    parser::core::{ParseContext, parse_tokens},
};
pub use crate::{error::Error, interpreter::options::ParseOptions, number::value::Value};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that reading or computing an expression
/// can raise, grouped under one crate-level [`Error`] with a coarse
/// [`error::ErrorKind`] for callers that only need the category.
pub mod error;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, parsing and evaluation, plus the options
/// that steer them.
pub mod interpreter;
/// Exact number types.
///
/// Bases, rationals, integers, intervals and the tagged value model shared by
/// the parser and evaluator.
pub mod number;
/// Numeral sub-parsers.
///
/// Each notation has its own parser; [`numeral::parse_numeral`] picks the
/// right one for a collected numeral.
pub mod numeral;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides checked conversions between `BigInt` and machine
/// integers, radix powers, and the multi-factorial used by `!` and `!!`.
pub mod util;

/// Parses and evaluates an arithmetic expression exactly.
///
/// Numerals without an explicit `[base]` are read in
/// `options.input_base`. In type-aware mode the result is narrowed to the
/// simplest shape matching how it was written; otherwise it is always a
/// `RationalInterval`.
///
/// # Errors
/// Returns an [`Error`] for malformed numerals, invalid digits, radix values
/// out of range, division by zero, undefined operations such as `0^0`, and
/// unconsumed or missing input.
///
/// # Resource use
/// Evaluation is exact and unbounded. Exponents are limited to `u32` and
/// factorial arguments to `u64`, but values inside those limits are computed
/// in full: `99999999999!`, `2^4000000000` or `2**4000000000` run until time
/// or memory runs out. Callers that evaluate untrusted input must bound the
/// work themselves, for example by running `parse` on a worker with a
/// deadline or by rejecting large exponents before calling it.
///
/// ```
/// use exacta::{ParseOptions, error::ErrorKind, parse};
///
/// let err = parse("2^99999999999", &ParseOptions::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Range);
/// ```
///
/// # Examples
/// ```
/// use exacta::{ParseOptions, error::ErrorKind, parse};
///
/// let options = ParseOptions::default();
/// assert_eq!(parse("1/2 + 1/3", &options).unwrap().to_string(), "5/6");
/// assert_eq!(parse("(-1:2)^2", &options).unwrap().to_string(), "0:4");
///
/// let err = parse("2 +", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
pub fn parse(expression: &str, options: &ParseOptions) -> Result<Value, Error> {
    debug!(expression, type_aware = options.type_aware, base = options.input_base.base(), "parse");

    if expression.trim().is_empty() {
        return Err(error::ParseError::format("empty expression").into());
    }

    let tokens = tokenize(expression)?;
    let expr = parse_tokens(&tokens, &ParseContext::new(expression, &options.input_base))?;

    Context::new(options).evaluate(&expr)
}
