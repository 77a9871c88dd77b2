/// Core parsing entry points.
///
/// Contains the parse context, the expression entry point and the check for
/// unconsumed input.
pub mod core;

/// Binary operator parsing.
///
/// Handles the two left-associative precedence levels: additive and
/// multiplicative, including spaced scientific notation.
pub mod binary;

/// Unary operator and primary parsing.
///
/// Handles negation, parentheses, numerals and the postfix suffixes: tight
/// scientific notation, factorials and powers.
pub mod unary;

/// Numeral collection.
///
/// Gathers the run of tightly written tokens that forms one numeral and hands
/// its text to the numeral sub-parsers.
pub mod numeral;
