/// The evaluator module walks the AST and computes exact results.
///
/// Literals arrive already interpreted, so the evaluator combines values,
/// applies exponentiation and scientific scaling, and narrows each result
/// to the simplest shape its notation allows.
///
/// # Responsibilities
/// - Evaluates AST nodes across Integer, Rational and interval values.
/// - Applies type promotion after every node in type-aware mode.
/// - Reports arithmetic errors such as division by zero or `0^0`.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens with
/// their byte spans. Spans matter: whether two tokens touch decides if they
/// form one numeral.
///
/// # Responsibilities
/// - Converts the input into alphanumeric runs and punctuation tokens.
/// - Skips whitespace while keeping exact source offsets.
/// - Reports characters no numeral or operator uses.
pub mod lexer;
/// Caller-facing parse settings.
pub mod options;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer, reassembles
/// numerals from tightly written tokens, interprets them in the active base,
/// and builds an AST honoring precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with byte positions.
/// - Rejects unconsumed trailing input.
pub mod parser;
