/// Binary operator evaluation logic.
///
/// Handles `+`, `-`, `*`, `/` across value shapes and scientific-notation
/// scaling.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, factorial and double factorial.
pub mod unary;

/// Exponentiation.
///
/// Implements `^` (closed-form power) and `**` (repeated multiplication).
pub mod power;

/// Type promotion.
///
/// Narrows results to the simplest shape their provenance allows.
pub mod promotion;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the tree walk, and error propagation.
pub mod core;
