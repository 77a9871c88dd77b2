/// Radix alphabets.
///
/// A `BaseSystem` maps the characters of a radix (2 to 62) to digit values
/// and back. Every numeral parser validates and accumulates digits through
/// one.
pub mod base;
/// Whole numbers.
///
/// The narrowest value shape; adds factorial and double factorial.
pub mod integer;
/// Closed intervals of rationals.
///
/// Interval arithmetic with two exponentiation operators: the closed-form
/// monotone `pow` and the repeated-multiplication `mpow`.
pub mod interval;
/// Exact fractions.
pub mod rational;
/// The closed sum of value shapes a parse can produce, plus the provenance
/// tag that drives type promotion.
pub mod value;
